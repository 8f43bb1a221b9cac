pub mod args;
pub mod output;

use std::io::Write;

use tally_config::{Config, ConfigManager};
use tally_core::{Clock, FixedClock, SummaryService, SystemClock};
use tracing::warn;

use crate::{errors::AppError, source::load_records, utils::build_info};

pub use args::{CliOptions, USAGE};

/// Entry point used by the `tally_cli` binary.
pub fn run_cli() -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with(std::env::args().skip(1), &mut handle)
}

/// Runs one invocation against `out`, so tests can capture the output.
pub fn run_with<I, S, W>(args: I, out: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let options = CliOptions::parse(args)?;

    if options.help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }
    if options.version {
        writeln!(out, "{}", build_info::current().summary())?;
        return Ok(());
    }
    if options.plain || options.json {
        colored::control::set_override(false);
    }

    let input = options
        .input
        .as_deref()
        .ok_or_else(|| AppError::Usage(format!("missing payload path\n\n{USAGE}")))?;

    let config = load_config(&options);
    let records = load_records(input)?;
    let time_frame = options.frame.unwrap_or(config.default_time_frame);
    let clock: Box<dyn Clock> = match options.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };

    let labels = config.labels();
    let summary = SummaryService::build(&records, time_frame, clock.as_ref(), labels.clone());

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(
            out,
            "{}",
            output::render_summary(&summary, &config.currency_symbol, &labels)
        )?;
    }
    Ok(())
}

/// An unreadable config is not fatal: the dashboard falls back to defaults.
fn load_config(options: &CliOptions) -> Config {
    let manager = match &options.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location(),
    };
    manager.load().unwrap_or_else(|err| {
        warn!(path = %manager.config_path().display(), error = %err, "using default config");
        Config::default()
    })
}
