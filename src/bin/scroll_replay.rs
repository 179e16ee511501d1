//! CLI tool for virtual-scroll - replays a scroll scenario and outputs JSON
//!
//! Usage:
//!   scroll_replay <scenario.json>              # Output steps to stdout
//!   scroll_replay <scenario.json> -o out.json  # Output steps to file
//!   scroll_replay -                            # Read scenario from stdin

#![allow(clippy::exit)]

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use virtual_scroll::replay::Scenario;

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Scenario source and optional output file
struct Args {
    input: String,
    output: Option<String>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Option<Self> {
        let input = args.next()?;
        let output = match (args.next().as_deref(), args.next()) {
            (Some("-o"), Some(path)) => Some(path),
            _ => None,
        };
        Some(Self { input, output })
    }
}

fn read_scenario(input: &str) -> CliResult<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("reading stdin: {e}"))?;
        Ok(buf)
    } else {
        fs::read_to_string(input).map_err(|e| format!("reading {input}: {e}").into())
    }
}

fn run(args: &Args) -> CliResult<()> {
    let scenario = Scenario::from_json(&read_scenario(&args.input)?)?;
    let steps = scenario.run()?;
    let json = serde_json::to_string_pretty(&steps)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| format!("writing {path}: {e}"))?;
            eprintln!("Written: {} ({} steps)", path, steps.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() {
    let Some(args) = Args::parse(std::env::args().skip(1)) else {
        eprintln!("Usage: scroll_replay <scenario.json | -> [-o output.json]");
        std::process::exit(1);
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
