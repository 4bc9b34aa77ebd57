use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deskcalc::config::Config;
use deskcalc::engine::Calculator;
use deskcalc::format::DigitGrouping;
use deskcalc::tui;

/// A keypad-driven desk calculator with a two-line display.
#[derive(Debug, Parser)]
#[command(name = "deskcalc", version, about)]
struct Cli {
    /// Digit-grouping convention (overrides the config file).
    #[arg(long, value_enum)]
    grouping: Option<DigitGrouping>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // RUST_LOG-driven; logs go to stderr so they can be redirected away from
    // the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let grouping = cli.grouping.unwrap_or(config.grouping);

    let mut calculator = Calculator::with_grouping(grouping);
    tui::run(&mut calculator)
}
