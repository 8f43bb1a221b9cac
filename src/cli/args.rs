use std::path::PathBuf;

use chrono::NaiveDateTime;
use tally_domain::TimeFrame;

use crate::{errors::AppError, source::parse_timestamp};

pub const USAGE: &str = "\
Usage: tally_cli <payload.json> [options]

Options:
  --frame <week|month|year>  Time frame to chart (default from config)
  --now <YYYY-MM-DD>         Reference instant instead of the system clock
  --config <path>            Config file (default <config_dir>/tally/config.json)
  --json                     Print the dashboard summary as JSON
  --plain                    Disable colored output
  --version                  Print build information
  --help                     Print this message";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub input: Option<PathBuf>,
    pub frame: Option<TimeFrame>,
    pub now: Option<NaiveDateTime>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub plain: bool,
    pub version: bool,
    pub help: bool,
}

impl CliOptions {
    pub fn parse<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--frame" => {
                    let value = expect_value(&mut args, "--frame")?;
                    options.frame = Some(value.parse()?);
                }
                "--now" => {
                    let value = expect_value(&mut args, "--now")?;
                    let now = parse_timestamp(&value)
                        .ok_or_else(|| AppError::Usage(format!("invalid --now value `{value}`")))?;
                    options.now = Some(now);
                }
                "--config" => {
                    options.config = Some(PathBuf::from(expect_value(&mut args, "--config")?));
                }
                "--json" => options.json = true,
                "--plain" => options.plain = true,
                "--version" | "-V" => options.version = true,
                "--help" | "-h" => options.help = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown option `{flag}`\n\n{USAGE}")));
                }
                _ if options.input.is_none() => options.input = Some(PathBuf::from(&arg)),
                _ => {
                    return Err(AppError::Usage(format!(
                        "unexpected argument `{arg}`\n\n{USAGE}"
                    )));
                }
            }
        }

        Ok(options)
    }
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, AppError> {
    args.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
}
