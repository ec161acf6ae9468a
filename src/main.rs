//! CLI tool to split shell-style command lines into words.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use shlex_rs::{LexError, Lexer, Tokenizer};

fn usage() {
    eprintln!("Usage: shlex <command> [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  split   Print each word on its own line (comments dropped)");
    eprintln!("  tokens  Print each token with its kind");
    eprintln!();
    eprintln!("Reads standard input when no files are given.");
    eprintln!("Set RUST_LOG=trace to log every emitted token.");
}

/// Failure while processing one input.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("write failure: {0}")]
    Write(io::Error),
}

fn run(command: &str, input: impl Read, out: &mut impl Write) -> Result<(), RunError> {
    if command == "split" {
        for word in Lexer::from_reader(input) {
            writeln!(out, "{}", word?).map_err(RunError::Write)?;
        }
    } else {
        for token in Tokenizer::from_reader(input) {
            let token = token?;
            writeln!(out, "{}\t{:?}", token.kind, token.value).map_err(RunError::Write)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    if !matches!(command, "split" | "tokens") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let files = &args[2..];

    if files.is_empty() {
        return match run(command, io::stdin().lock(), &mut out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("<stdin>: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut had_error = false;

    for path in files {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        if let Err(e) = run(command, file, &mut out) {
            eprintln!("{path}: {e}");
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
