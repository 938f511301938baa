use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::due_date::INPUT_FORMAT;

#[derive(Parser, Debug, Clone)]
#[command(name = "tasklist", version, about = "A terminal to-do list")]
pub struct Cli {
    /// Write logs to this file. The UI owns the terminal, so nothing is
    /// logged without it.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Treat this day as today when deciding what is overdue.
    #[arg(long = "today", value_parser = parse_today)]
    pub today: Option<NaiveDate>,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, INPUT_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(cli.verbose)))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}
