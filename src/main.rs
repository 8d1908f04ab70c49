use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use keypad_calc::calculator::{Calculator, copy_to_clipboard};
use keypad_calc::config::Config;
use keypad_calc::input::InputScript;

/// Keypad calculator with strict left-to-right evaluation.
///
/// Inputs are keypad words: digits, `.`, `+`, `-`, `x`/`*`, `÷`/`/`,
/// `(-)`, `CLEAR`, `BACK` and `ENTER`. Words like `12+3` are typed one key
/// at a time.
#[derive(Debug, Parser)]
#[command(name = "keypad-calc", version, about)]
struct Args {
    /// Inputs to type, in order.
    #[arg(allow_hyphen_values = true)]
    inputs: Vec<String>,

    /// Read inputs from a script file.
    #[arg(short, long, value_name = "FILE", conflicts_with = "inputs")]
    script: Option<PathBuf>,

    /// Configuration file (default: <config dir>/keypad-calc/config.toml).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Copy the final display to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    display: &'a str,
    expression: Option<&'a str>,
    error: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let mut calc = Calculator::with_options(config.calculator_options());
    debug!(options = ?calc.options(), "calculator ready");

    let script = if let Some(path) = &args.script {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let script = InputScript::from_text(&text)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        Some(script)
    } else if !args.inputs.is_empty() {
        Some(InputScript::from_words(args.inputs.as_slice()).context("Invalid inputs")?)
    } else {
        None
    };

    match script {
        Some(script) => {
            debug!(inputs = script.len(), "running script");
            for input in script {
                calc.apply(input);
            }
            print_final(&calc, args.json)?;
        }
        None => run_interactive(&mut calc)?,
    }

    if args.copy {
        copy_to_clipboard(calc.display_text()).context("Failed to copy result")?;
    }

    Ok(())
}

/// Read script lines from stdin, showing the display after each one.
fn run_interactive(calc: &mut Calculator) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for (line_num, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        match InputScript::parse_line(&line, line_num + 1) {
            Ok(inputs) => {
                for input in inputs {
                    calc.apply(input);
                }
                writeln!(stdout, "[{}]", calc.display_text())?;
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn print_final(calc: &Calculator, json: bool) -> Result<()> {
    if !json {
        println!("{}", calc.display_text());
        return Ok(());
    }

    let result = calc.last_result();
    let report = Report {
        display: calc.display_text(),
        expression: result.map(|r| r.expression()),
        error: result.and_then(|r| r.error()).map(ToString::to_string),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
