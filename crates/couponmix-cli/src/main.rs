use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use couponmix_cli::{build_engine, init_tracing, load_coupons, render, render_report, OutputFormat};
use couponmix_core::{validate, LedgerKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Coupon list (.json, .yaml/.yml, or - for JSON on stdin)")
}

fn ledger_arg() -> Arg {
    Arg::new("ledger")
        .long("ledger")
        .value_parser(|s: &str| s.parse::<LedgerKind>())
        .help("Pair ledger: scan or pair-index")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("Engine configuration (TOML)")
}

fn cli() -> Command {
    Command::new("couponmix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Group coupons whose blocked types allow them to be combined")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
        .subcommand(
            Command::new("group")
                .about("Print every coupon combination")
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("text")
                        .value_parser(|s: &str| s.parse::<OutputFormat>())
                        .help("Output format: text or json"),
                )
                .arg(ledger_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Group coupons and validate the result")
                .arg(input_arg())
                .arg(ledger_arg())
                .arg(config_arg()),
        )
}

fn engine_from(args: &ArgMatches) -> Result<couponmix_core::GroupingEngine> {
    build_engine(
        args.get_one::<PathBuf>("config").map(PathBuf::as_path),
        args.get_one::<LedgerKind>("ledger").copied(),
    )
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("group", args)) => {
            let input = args.get_one::<PathBuf>("input").expect("required");
            let format = args
                .get_one::<OutputFormat>("format")
                .copied()
                .unwrap_or_default();

            let coupons = load_coupons(input)?;
            let grouping = engine_from(args)?.try_group(&coupons)?;
            print!("{}", render(&coupons, &grouping, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(("check", args)) => {
            let input = args.get_one::<PathBuf>("input").expect("required");

            let coupons = load_coupons(input)?;
            let grouping = engine_from(args)?.try_group(&coupons)?;
            match validate(&coupons, &grouping) {
                Ok(report) => {
                    print!("{}", render_report(&coupons, &report));
                    println!("Status: PASSED");
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    tracing::error!("validation failed: {err}");
                    println!("Status: FAILED ({err})");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn parses_group_flags() {
        let matches = cli()
            .try_get_matches_from([
                "couponmix", "group", "coupons.json", "--format", "json", "--ledger", "scan",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "group");
        assert_eq!(args.get_one::<OutputFormat>("format"), Some(&OutputFormat::Json));
        assert_eq!(args.get_one::<LedgerKind>("ledger"), Some(&LedgerKind::Scan));
    }

    #[test]
    fn rejects_unknown_ledger() {
        let result = cli().try_get_matches_from(["couponmix", "check", "x.json", "--ledger", "fast"]);
        assert!(result.is_err());
    }
}
