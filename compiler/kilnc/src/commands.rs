//! CLI command implementations.
//!
//! Each command comes in two layers: a `*_payload` function over raw bytes
//! and a `*_file` wrapper that reads the payload from disk first.

use std::fmt;
use std::io;

use kiln_eval::{evaluate_program_with, EvalBacktrace, EvalConfig, EvalError, FunctionTable};
use kiln_ir::Program;
use kiln_parse::{parse_program, ParseError};
use thiserror::Error;

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The payload file could not be read.
    #[error("{message}")]
    Read { path: String, message: String },

    /// The payload could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Building the function table or evaluating failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    /// Call backtrace of an evaluation failure, if one was captured.
    pub fn backtrace(&self) -> Option<&EvalBacktrace> {
        match self {
            Self::Eval(err) => err.backtrace.as_ref(),
            _ => None,
        }
    }
}

/// Result of `kiln check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckSummary {
    pub functions: usize,
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.functions == 1 { "function" } else { "functions" };
        write!(f, "ok: {} {noun}", self.functions)
    }
}

/// Read a payload file, mapping I/O failures to readable messages.
pub fn read_file(path: &str) -> Result<Vec<u8>, CommandError> {
    std::fs::read(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            _ => format!("error reading '{path}': {e}"),
        };
        CommandError::Read {
            path: path.to_string(),
            message,
        }
    })
}

/// Decode and evaluate a payload.
pub fn run_payload(payload: &[u8], config: &EvalConfig) -> Result<i64, CommandError> {
    let program = parse_program(payload)?;
    Ok(evaluate_program_with(&program, config)?)
}

/// Decode a payload without evaluating it.
pub fn parse_payload(payload: &[u8]) -> Result<Program, CommandError> {
    Ok(parse_program(payload)?)
}

/// Decode a payload and build its function table without evaluating.
pub fn check_payload(payload: &[u8], config: &EvalConfig) -> Result<CheckSummary, CommandError> {
    let program = parse_program(payload)?;
    let table = FunctionTable::from_definitions(&program.functions, config.duplicates)?;
    Ok(CheckSummary {
        functions: table.len(),
    })
}

#[tracing::instrument(level = "debug", skip(config))]
pub fn run_file(path: &str, config: &EvalConfig) -> Result<i64, CommandError> {
    run_payload(&read_file(path)?, config)
}

#[tracing::instrument(level = "debug")]
pub fn parse_file(path: &str) -> Result<Program, CommandError> {
    parse_payload(&read_file(path)?)
}

#[tracing::instrument(level = "debug", skip(config))]
pub fn check_file(path: &str, config: &EvalConfig) -> Result<CheckSummary, CommandError> {
    check_payload(&read_file(path)?, config)
}
