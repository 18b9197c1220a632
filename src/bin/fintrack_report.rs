use std::{env, path::PathBuf, process};

use chrono::NaiveDate;
use fintrack::{build_report, init, render_report, report::ReportStyle, CliError, ReportSettings};
use fintrack_config::ConfigManager;
use fintrack_core::{
    format::SymbolFormatter,
    time::{Clock, SystemClock},
    AnalyticsRange,
};
use fintrack_storage_json::JsonSnapshotFile;

const USAGE: &str = "Usage: fintrack_report [snapshot.json] [options]\n\
Options:\n  \
--date YYYY-MM-DD    reference date (defaults to today)\n  \
--range 1m|3m|6m|1y  analytics range (defaults to the configured range)\n  \
--config <file>      config file (defaults to the platform config directory)\n  \
--plain              ASCII output without colours\n  \
--json               print the report as JSON\n  \
--help               show this message";

#[derive(Debug, Default)]
struct Args {
    snapshot: Option<PathBuf>,
    date: Option<NaiveDate>,
    range: Option<AnalyticsRange>,
    config: Option<PathBuf>,
    plain: bool,
    json: bool,
    help: bool,
}

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let manager = match args.config {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::from_platform_dirs()?,
    };
    let config = manager.load()?;
    let mut settings = ReportSettings::from_config(&config)?;
    if let Some(range) = args.range {
        settings.range = range;
    }
    let snapshot_path = args.snapshot.unwrap_or_else(|| settings.snapshot_path.clone());
    let reference = args.date.unwrap_or_else(|| SystemClock.today());
    tracing::debug!(
        snapshot = %snapshot_path.display(),
        %reference,
        range = settings.range.code(),
        "building report"
    );

    let provider = JsonSnapshotFile::new(snapshot_path);
    let report = build_report(&provider, reference, &settings)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(fintrack::FintrackError::from)?;
        println!("{json}");
        return Ok(());
    }

    let style = if args.plain || !settings.color {
        ReportStyle::plain()
    } else {
        ReportStyle::colored()
    };
    let money = SymbolFormatter::new(settings.currency_symbol.clone());
    print!("{}", render_report(&report, &money, &style));
    Ok(())
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut args = Args::default();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--date" => {
                let value = option_value(&mut raw, "--date")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                    CliError::Usage(format!("invalid date `{value}` (expected YYYY-MM-DD)"))
                })?;
                args.date = Some(date);
            }
            "--range" => {
                let value = option_value(&mut raw, "--range")?;
                args.range = Some(value.parse::<AnalyticsRange>()?);
            }
            "--config" => {
                args.config = Some(PathBuf::from(option_value(&mut raw, "--config")?));
            }
            "--plain" => args.plain = true,
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option `{flag}`")));
            }
            path => {
                if args.snapshot.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument `{path}`")));
                }
                args.snapshot = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn option_value(raw: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    raw.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))
}
