//! Tree-walking interpreter.
//!
//! # Scopes
//!
//! The interpreter never stores an environment. Every evaluation method
//! takes the current scope as `&mut Environment`:
//!
//! - `Seq`, `If`, and `While` pass the same `env` down to their children, so
//!   assignments are visible to later siblings, later iterations, and
//!   whatever follows the loop.
//! - `Call` builds a fresh scope with `Environment::for_call`; the callee
//!   sees its parameters and nothing else (see `function_call.rs`).
//!
//! # Evaluation order
//!
//! Children are evaluated left to right and the first error aborts the whole
//! evaluation.

mod function_call;

use kiln_ir::Expr;
use kiln_stack::ensure_sufficient_stack;

use crate::config::EvalConfig;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::errors::{undefined_variable, EvalResult};
use crate::function_table::FunctionTable;
use crate::operators::evaluate_binary;

/// Tree-walking interpreter over a fixed function table.
pub struct Interpreter<'a> {
    /// Functions callable from any scope. Never mutated during evaluation.
    functions: &'a FunctionTable<'a>,
    /// Active calls, for the depth limit and error backtraces.
    call_stack: CallStack<'a>,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with the default configuration.
    pub fn new(functions: &'a FunctionTable<'a>) -> Self {
        Self::with_config(functions, &EvalConfig::default())
    }

    /// Create an interpreter with an explicit configuration.
    pub fn with_config(functions: &'a FunctionTable<'a>, config: &EvalConfig) -> Self {
        Self {
            functions,
            call_stack: CallStack::new(config.max_call_depth),
        }
    }

    /// Current function-call depth.
    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate `expr` in the scope `env`.
    pub fn eval(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult {
        match expr {
            Expr::Number(value) => Ok(*value),

            Expr::Ident(name) => env.get(name).ok_or_else(|| undefined_variable(name)),

            Expr::Binary { op, left, right } => {
                // Left side fully, side effects included, before the right.
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(*op, left, right)
            }

            Expr::Seq(items) => self.eval_seq(items, env),

            Expr::Assign { name, value } => {
                let value = self.eval(value, env)?;
                env.set(name, value);
                Ok(value)
            }

            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond, env)? != 0 {
                    self.eval(then_branch, env)
                } else {
                    self.eval(else_branch, env)
                }
            }

            Expr::While { cond, body } => {
                while self.eval(cond, env)? != 0 {
                    self.eval(body, env)?;
                }
                Ok(0)
            }

            Expr::Call { name, args } => self.eval_call(name, args, env),
        }
    }

    /// Evaluate a sequence for its side effects.
    ///
    /// The value is the last item's value; an empty sequence is `0`.
    fn eval_seq(&mut self, items: &[Expr], env: &mut Environment) -> EvalResult {
        let mut result = 0;
        for item in items {
            result = self.eval(item, env)?;
        }
        Ok(result)
    }
}
