//! Kiln Eval - tree-walking evaluator for the Kiln expression language.
//!
//! # Architecture
//!
//! - `Environment`: one variable scope; fresh per function call
//! - `FunctionTable`: name → definition, built once per program
//! - `Interpreter`: recursive evaluation over a table and a config
//! - `evaluate_binary`: direct enum-based operator dispatch
//! - `EvalError` / `EvalErrorKind`: typed failures with call backtraces
//!
//! # Entry points
//!
//! - [`evaluate`] for callers that hand-build trees and own the scope
//! - [`evaluate_program`] / [`evaluate_program_with`] for whole programs

mod config;
mod diagnostics;
mod environment;
pub mod errors;
mod function_table;
mod interpreter;
mod operators;

#[cfg(test)]
mod tests;

use kiln_ir::{Expr, Program};

pub use config::{DuplicatePolicy, EvalConfig};
pub use diagnostics::CallStack;
pub use environment::Environment;
pub use errors::{EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use function_table::FunctionTable;
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;

/// Evaluate a single expression in the scope `env` against `functions`.
///
/// Uses the default configuration (no call-depth limit).
pub fn evaluate(expr: &Expr, env: &mut Environment, functions: &FunctionTable<'_>) -> EvalResult {
    Interpreter::new(functions).eval(expr, env)
}

/// Evaluate a whole program with the default configuration.
///
/// Builds the function table, starts from an empty environment, and
/// evaluates `program.body`.
pub fn evaluate_program(program: &Program) -> EvalResult {
    evaluate_program_with(program, &EvalConfig::default())
}

/// Evaluate a whole program with an explicit configuration.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_program_with(program: &Program, config: &EvalConfig) -> EvalResult {
    let functions = FunctionTable::from_definitions(&program.functions, config.duplicates)?;
    let mut env = Environment::new();
    let result = Interpreter::with_config(&functions, config).eval(&program.body, &mut env);
    tracing::debug!(?result, variables = env.len(), "program evaluated");
    result
}
