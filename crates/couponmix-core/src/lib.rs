//! couponmix core
//!
//! Order-sensitive grouping of items with mutually exclusive blocked types.
//!
//! # Core Concepts
//!
//! - [`Blocked`]: Anything carrying blocked-type tags (e.g. [`Coupon`])
//! - [`GroupingEngine`]: Single-pass grouping of an ordered item slice
//! - [`Grouping`]: Groups of [`ItemId`]s in creation order
//! - [`PairLedger`]: Tracks which pairs already share a group
//! - [`validate`]: Checks a grouping against its items
//!
//! # Example
//!
//! ```rust
//! use couponmix_core::{compute_groupings, Coupon};
//!
//! let coupons = vec![
//!     Coupon::named("a", ["1", "2"]),
//!     Coupon::named("b", ["1"]),
//!     Coupon::named("c", ["2"]),
//! ];
//!
//! let groups = compute_groupings(&coupons);
//! assert_eq!(groups, vec![vec![&coupons[0]], vec![&coupons[1], &coupons[2]]]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod arena;
mod config;
mod engine;
mod error;
mod group;
mod item;
mod ledger;
mod validation;

// Re-exports
pub use arena::{ItemArena, TagId, TagSet};
pub use config::EngineConfig;
pub use engine::{compute_groupings, group_with, GroupingEngine};
pub use error::{GroupingError, ValidationDiagnostic, ViolationKind};
pub use group::{Group, Grouping};
pub use item::{Blocked, Coupon, ItemId};
pub use ledger::{LedgerKind, PairIndexLedger, PairLedger, ScanLedger};
pub use validation::{validate, validate_arena, GroupingReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
