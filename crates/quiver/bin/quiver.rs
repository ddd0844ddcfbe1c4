//! Headless command-line output.
//!
//! Usage:
//!   quiver          Print the computed vectors
//!   quiver -h       Print help
//!
//! The interactive plot lives in the `quiver-tui` binary; this one prints
//! the arithmetic for terminals without a usable display.

use std::{env, process::ExitCode};

use quiver::Figure;
use quiver::figure::fmt_vec;

const USAGE: &str = "\
Usage: quiver [OPTIONS]

Computes v1 + v2 and v1 - v2 for the fixed vectors v1 = [3, 4] and
v2 = [2, 1] and prints the results. Run quiver-tui for the plot.

Options:
  -h, --help Print this help message";

enum Action {
    Print,
    Help,
}

fn parse_args() -> Result<Action, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => Ok(Action::Print),
        [arg] if arg == "-h" || arg == "--help" => Ok(Action::Help),
        _ => Err(USAGE.into()),
    }
}

fn main() -> ExitCode {
    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Print) => {
            let figure = Figure::demo();
            let bounds = figure.bounds();
            println!("v1      = {}", fmt_vec(figure.v1()));
            println!("v2      = {}", fmt_vec(figure.v2()));
            println!("v1 + v2 = {}", fmt_vec(figure.sum()));
            println!("v1 - v2 = {}", fmt_vec(figure.diff()));
            println!(
                "axes    = x [{}, {}], y [{}, {}]",
                bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
