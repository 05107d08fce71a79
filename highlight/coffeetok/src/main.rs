//! coffeetok CLI entry point.

use coffeetok::commands::{parse_tokens_options, run_tokens};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const USAGE: &str = "\
coffeetok - CoffeeScript tokens with reconciled source positions

Usage: coffeetok <command> [options]

Commands:
  tokens <file.coffee>   Resolve and print the token stream
  help                   Show this help message
  version                Show version information

Tokens options:
  --capture <tokens.json>   Replay a JSON token capture
  --command \"<cmd>\"         Run a tokenizer (source on stdin, JSON on stdout)
  --json                    Emit a JSON array instead of lines

Exactly one of --capture and --command is required.
Logging goes to stderr and follows RUST_LOG (default: warn).";

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "tokens" => {
            let (file, options) = match parse_tokens_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    eprintln!("{USAGE}");
                    std::process::exit(1);
                }
            };
            std::process::exit(run_tokens(&file, &options));
        }
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
        }
        "version" | "--version" | "-V" => {
            println!("coffeetok {}", env!("CARGO_PKG_VERSION"));
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    }
}

/// Stderr logging filtered by `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .init();
}
