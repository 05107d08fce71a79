//! The `tokens` command: resolve and print a positioned token stream.

use std::fs;
use std::path::PathBuf;

use coffee_oracle::{CommandOracle, ReplayOracle, TokenOracle};
use coffee_resolve::Resolver;

/// Options for the `tokens` command.
#[derive(Debug, Default)]
pub struct TokensOptions {
    /// Replay a JSON token capture instead of running a tokenizer.
    pub capture: Option<PathBuf>,
    /// Tokenizer command line reading source on stdin, writing JSON on
    /// stdout.
    pub command: Option<String>,
    /// Emit a JSON array instead of one line per token.
    pub json: bool,
}

/// Parse the arguments after `tokens`: one source file plus flags.
///
/// `--capture` and `--command` take a value and need lookahead; exactly
/// one of them must be given.
pub fn parse_tokens_options(args: &[String]) -> Result<(String, TokensOptions), String> {
    let mut file = None;
    let mut options = TokensOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--capture" => {
                let Some(path) = args.get(i + 1) else {
                    return Err("--capture needs a file path".to_string());
                };
                options.capture = Some(PathBuf::from(path));
                i += 2;
            }
            "--command" => {
                let Some(command) = args.get(i + 1) else {
                    return Err("--command needs a tokenizer command line".to_string());
                };
                options.command = Some(command.clone());
                i += 2;
            }
            "--json" => {
                options.json = true;
                i += 1;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option '{arg}'"));
            }
            arg => {
                if file.is_some() {
                    return Err(format!("unexpected argument '{arg}'"));
                }
                file = Some(arg.to_string());
                i += 1;
            }
        }
    }

    let Some(file) = file else {
        return Err("missing source file".to_string());
    };
    match (&options.capture, &options.command) {
        (Some(_), Some(_)) => Err("--capture and --command are mutually exclusive".to_string()),
        (None, None) => Err("a token source is required (--capture or --command)".to_string()),
        _ => Ok((file, options)),
    }
}

/// Run the `tokens` command. Returns the process exit code.
pub fn run_tokens(file: &str, options: &TokensOptions) -> i32 {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read {file}: {error}");
            return 1;
        }
    };
    tracing::debug!(%file, bytes = source.len(), "resolving token positions");

    match (&options.capture, &options.command) {
        (Some(path), _) => {
            let capture = match fs::read_to_string(path) {
                Ok(capture) => capture,
                Err(error) => {
                    eprintln!("error: cannot read capture {}: {error}", path.display());
                    return 1;
                }
            };
            print_stream(ReplayOracle::from_json(&capture), &source, options.json)
        }
        (None, Some(command_line)) => {
            let Some(oracle) = CommandOracle::from_command_line(command_line) else {
                eprintln!("error: empty tokenizer command");
                return 1;
            };
            print_stream(oracle, &source, options.json)
        }
        (None, None) => {
            eprintln!("error: a token source is required (--capture or --command)");
            1
        }
    }
}

/// Resolve and print. Tokens resolved before a failure are still
/// printed; the failure goes to stderr and the exit code is non-zero.
fn print_stream<O: TokenOracle>(oracle: O, source: &str, json: bool) -> i32 {
    let mut resolver = Resolver::new(oracle);
    let mut failure = None;
    let mut tokens = Vec::new();
    for result in resolver.resolve(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                failure = Some(error);
                break;
            }
        }
    }

    if json {
        let items: Vec<serde_json::Value> = tokens
            .iter()
            .map(|token| {
                serde_json::json!({
                    "kind": token.kind,
                    "value": token.value,
                    "index": token.index,
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(items));
    } else {
        for token in &tokens {
            println!("{token}");
        }
    }

    match failure {
        Some(error) => {
            eprintln!("error: {error}");
            1
        }
        None => 0,
    }
}
