//! Shortest knight path on the command line.
//!
//! Run: cargo run --bin knight-path -- a1 h8 -o c2,b3 --random 10 --seed 7
//!
//! Exit status is 0 when a path was found, 1 when the goal is unreachable and
//! 2 for invalid input.

use std::process::ExitCode;

use clap::Parser;
use knight_demos::{Cli, init_logging, run};

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        println!("{}", report.to_text());
    }

    if report.path.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
