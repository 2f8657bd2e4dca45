//! CLI tool to tokenize arithmetic expressions.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use arith_lex::{DEFAULT_SOURCE_NAME, format_tokens, run};

const PROMPT: &str = "basic > ";

/// Log to stderr only when `RUST_LOG` is set, e.g. `RUST_LOG=arith_lex=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage: arith-lex <command> [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokens  Print the tokens of each file");
    eprintln!("  check   Check that each file lexes cleanly");
    eprintln!("  repl    Read expressions from stdin, one per line");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  arith-lex tokens expr.txt");
    eprintln!("  arith-lex check a.txt b.txt");
    eprintln!("  arith-lex repl");
    ExitCode::from(2)
}

fn repl() -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{PROMPT}");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("{DEFAULT_SOURCE_NAME}: {e}");
                return ExitCode::FAILURE;
            }
        }

        match run(DEFAULT_SOURCE_NAME, line.trim_end_matches(['\n', '\r'])) {
            Ok(tokens) => println!("{}", format_tokens(&tokens)),
            Err(e) => println!("{}", e.as_string()),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let command = args[1].as_str();
    let files = &args[2..];

    match command {
        "repl" => return repl(),
        "tokens" | "check" => {}
        _ => {
            eprintln!("Unknown command: {command}");
            return ExitCode::from(2);
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        // newlines are not whitespace to the lexer
        match run(path, content.trim_end_matches(['\n', '\r'])) {
            Ok(tokens) if command == "tokens" => println!("{}", format_tokens(&tokens)),
            Ok(tokens) => eprintln!("{path}: ok ({} token(s))", tokens.len()),
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
