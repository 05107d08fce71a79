//! External-process tokenizer adapter.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::warn;

use crate::replay::parse_capture;
use crate::{RawToken, TokenOracle};

/// Pipes source through an external tokenizer command.
///
/// The command receives the source on stdin and must print the tokenizer's
/// JSON dump (the [`ReplayOracle`] capture format) on stdout. A thin Node
/// wrapper around `CoffeeScript.tokens(src, {rewrite: false})` is the
/// expected shape. Spawn failure, non-zero exit, or malformed output all
/// tokenize as empty, per the oracle contract.
///
/// The child must read its entire stdin before writing output; the stdout
/// pipe is not drained while the source is being written.
///
/// [`ReplayOracle`]: crate::ReplayOracle
#[derive(Debug, Clone)]
pub struct CommandOracle {
    program: String,
    args: Vec<String>,
}

impl CommandOracle {
    /// Build from a program and its arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandOracle {
            program: program.into(),
            args,
        }
    }

    /// Split a command line on whitespace.
    ///
    /// No quoting support; wrappers with spaced paths should be invoked
    /// through a script. Returns `None` for an all-whitespace line.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?.to_string();
        let args = parts.map(str::to_string).collect();
        Some(CommandOracle { program, args })
    }

    /// The program this oracle spawns.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, source: &str) -> Result<Vec<RawToken>, String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("spawn failed: {e}"))?;

        if let Some(mut stdin) = child.stdin.take() {
            // Dropping stdin at the end of this block closes the pipe so
            // the child sees EOF. A child that exits without draining its
            // stdin breaks the pipe mid-write; its exit status and output
            // decide the outcome, not the feed error.
            if let Err(error) = stdin.write_all(source.as_bytes()) {
                tracing::debug!(%error, "tokenizer closed stdin early");
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| format!("wait failed: {e}"))?;
        if !output.status.success() {
            return Err(format!("exited with {}", output.status));
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|_| "stdout is not UTF-8".to_string())?;
        parse_capture(&stdout)
    }
}

impl TokenOracle for CommandOracle {
    fn raw_tokens(&mut self, source: &str) -> Vec<RawToken> {
        self.run(source).unwrap_or_else(|reason| {
            warn!(program = %self.program, %reason, "external tokenizer failed");
            Vec::new()
        })
    }
}
