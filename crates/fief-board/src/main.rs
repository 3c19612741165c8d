//! fief-board CLI — convert a tabular board description into the JSON
//! board document format.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a CSV board description into a JSON board document.
#[derive(Parser, Debug)]
#[command(name = "fief-board", version, about)]
struct Args {
    /// Input board description (.csv).
    input: PathBuf,
    /// Output board document (.json).
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match fief_board::convert(&args.input, &args.output) {
        Ok(board) => {
            println!("wrote {} spaces to {}", board.len(), args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
