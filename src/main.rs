use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use zcalc::calculator::Calculator;
use zcalc::config::CalculatorConfig;
use zcalc::input::{action_for_key, tokenize};
use zcalc::logging;

#[derive(Parser)]
#[command(
    name = "zcalc",
    about = "Four-function calculator driven by key presses",
    version
)]
struct Cli {
    /// Config file path (default: $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the calculator state as JSON instead of the display text
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. "debug" or "zcalc=trace" (overrides the config)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Keys to press, e.g. `5 + 3 =` or `12*4 Enter`. Reads lines from
    /// stdin when omitted.
    #[arg(value_name = "KEYS")]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CalculatorConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let filter = cli.log_level.as_deref().unwrap_or(&config.log.level);
    logging::init(filter);

    let mut calculator = Calculator::with_limits(config.limits);
    let mut stdout = io::stdout().lock();

    if !cli.keys.is_empty() {
        press_keys(&mut calculator, &cli.keys.join(" "));
        print_state(&mut stdout, &calculator, cli.json)?;
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        press_keys(&mut calculator, &line);
        print_state(&mut stdout, &calculator, cli.json)?;
    }

    Ok(())
}

/// Feed every key in `line` to the calculator, skipping unmapped keys.
fn press_keys(calculator: &mut Calculator, line: &str) {
    for key in tokenize(line) {
        match action_for_key(&key) {
            Some(action) => {
                calculator.apply(action);
            }
            None => tracing::debug!(key = %key, "ignoring unmapped key"),
        }
    }
}

fn print_state(out: &mut impl Write, calculator: &Calculator, json: bool) -> Result<()> {
    if json {
        let snapshot = serde_json::to_string(&calculator.snapshot())
            .context("Failed to serialize calculator state")?;
        writeln!(out, "{}", snapshot)?;
    } else {
        writeln!(out, "{}", calculator.display())?;
    }
    out.flush()?;
    Ok(())
}
