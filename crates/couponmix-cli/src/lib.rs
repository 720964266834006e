//! couponmix command-line support
//!
//! Loading coupon lists, building the engine from flags and configuration,
//! and rendering groupings. The binary in `main.rs` only parses arguments.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use anyhow::{Context, Result};
use couponmix_core::{
    Coupon, EngineConfig, Grouping, GroupingEngine, GroupingReport, ItemId, LedgerKind,
};
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Coupon file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON array of coupons
    Json,

    /// YAML sequence of coupons
    Yaml,
}

impl InputFormat {
    /// Guess format from the file extension (JSON unless `.yaml`/`.yml`)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per group
    #[default]
    Text,

    /// Nested JSON arrays of coupons
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Parse a coupon list
///
/// # Errors
/// Fails if `text` is not a list of coupons in the given format.
pub fn parse_coupons(text: &str, format: InputFormat) -> Result<Vec<Coupon>> {
    let coupons = match format {
        InputFormat::Json => serde_json::from_str(text).context("invalid JSON coupon list")?,
        InputFormat::Yaml => serde_yaml::from_str(text).context("invalid YAML coupon list")?,
    };
    Ok(coupons)
}

/// Read and parse a coupon list from any reader
///
/// # Errors
/// Fails if `reader` cannot be read to the end or its content does not parse.
pub fn load_coupons_from(mut reader: impl Read, format: InputFormat) -> Result<Vec<Coupon>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read coupons")?;
    parse_coupons(&text, format)
}

/// Load a coupon list from a file, or JSON from stdin when `path` is `-`
///
/// # Errors
/// Fails if the file cannot be read or parsed.
pub fn load_coupons(path: &Path) -> Result<Vec<Coupon>> {
    let coupons = if path.as_os_str() == "-" {
        load_coupons_from(std::io::stdin().lock(), InputFormat::Json)
            .context("failed to load coupons from stdin")?
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_coupons(&text, InputFormat::from_path(path))
            .with_context(|| format!("failed to parse {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), coupons = coupons.len(), "loaded coupons");
    Ok(coupons)
}

/// Build the engine from an optional config file and an optional ledger override
///
/// # Errors
/// Fails if the config file cannot be loaded.
pub fn build_engine(config: Option<&Path>, ledger: Option<LedgerKind>) -> Result<GroupingEngine> {
    let mut config = match config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(ledger) = ledger {
        config = config.with_ledger(ledger);
    }
    Ok(GroupingEngine::new(config))
}

/// Render groups as `N: name, name, ...` lines
///
/// Members without a matching coupon in `items` render as their `#index`.
#[must_use]
pub fn render_text(items: &[Coupon], grouping: &Grouping) -> String {
    let mut out = String::new();
    for (index, group) in grouping.iter().enumerate() {
        let labels: Vec<String> = group
            .members()
            .iter()
            .map(|&id| label(items, id))
            .collect();
        let _ = writeln!(out, "{}: {}", index + 1, labels.join(", "));
    }
    out
}

/// Render groups as pretty JSON arrays of coupons
///
/// # Errors
/// Fails only if serialization fails.
pub fn render_json(items: &[Coupon], grouping: &Grouping) -> Result<String> {
    serde_json::to_string_pretty(&grouping.resolve(items)).context("failed to serialize groups")
}

/// Render a grouping in the requested format
///
/// # Errors
/// See [`render_json`].
pub fn render(items: &[Coupon], grouping: &Grouping, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(items, grouping)),
        OutputFormat::Json => render_json(items, grouping).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

/// Render a validation report
#[must_use]
pub fn render_report(items: &[Coupon], report: &GroupingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Grouping Report");
    let _ = writeln!(out, "  Items: {}", report.item_count);
    let _ = writeln!(out, "  Groups: {}", report.group_count);
    let _ = writeln!(out, "  Largest group: {}", report.largest_group);
    let _ = writeln!(out, "  Distinct pairs: {}", report.distinct_pairs);
    let _ = writeln!(out, "  Repeated pairs: {}", report.warnings.len());
    for warning in &report.warnings {
        let names: Vec<String> = warning
            .involved_items
            .iter()
            .map(|&id| label(items, id))
            .collect();
        let _ = writeln!(out, "    {} ({})", names.join(" + "), warning.description);
    }
    out
}

fn label(items: &[Coupon], id: ItemId) -> String {
    items
        .get(id.index())
        .map_or_else(|| id.to_string(), |coupon| coupon.label(id))
}

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` wins; otherwise `warn`, or `debug` when `verbose`.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
