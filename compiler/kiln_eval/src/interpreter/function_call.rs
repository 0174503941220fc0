//! Function call evaluation for the Interpreter.

use kiln_ir::Expr;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{arity_mismatch, undefined_function, EvalResult};

impl Interpreter<'_> {
    /// Evaluate a call of the function `name`.
    ///
    /// Steps, in order: resolve the name, check arity, evaluate every
    /// argument in the caller's scope, then run the body in a fresh scope
    /// holding only the parameters.
    #[tracing::instrument(level = "debug", skip(self, args, env), fields(depth = self.call_stack.depth()))]
    pub(super) fn eval_call(
        &mut self,
        name: &str,
        args: &[Expr],
        env: &mut Environment,
    ) -> EvalResult {
        let Some(func) = self.functions.get(name) else {
            return Err(undefined_function(name));
        };
        if func.arity() != args.len() {
            return Err(arity_mismatch(name, func.arity(), args.len()));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, env)?);
        }

        self.call_stack
            .push(&func.name)
            .map_err(|err| self.call_stack.attach_backtrace(err))?;
        let mut call_env = Environment::for_call(&func.params, values);
        let result = self
            .eval(&func.body, &mut call_env)
            .map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();

        tracing::trace!(?result, "call returned");
        result
    }
}
