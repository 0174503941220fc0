//! Call tracking for the evaluator.
//!
//! `CallStack` records the name of every active function call. It enforces
//! the optional call-depth limit and produces the `EvalBacktrace` attached
//! to errors raised inside calls.

use crate::errors::{recursion_limit_exceeded, EvalBacktrace, EvalError};

/// Live call stack.
///
/// Each call pushes its function name and pops it on return. The depth
/// check is part of `push()`.
#[derive(Clone, Debug)]
pub struct CallStack<'a> {
    frames: Vec<&'a str>,
    max_depth: Option<usize>,
}

impl<'a> CallStack<'a> {
    /// Create an empty call stack; `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed when the limit is reached.
    pub fn push(&mut self, name: &'a str) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(name);
        Ok(())
    }

    /// Pop the most recent call frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    /// Current call depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot the active calls, most recent first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(self.frames.iter().rev().map(|s| (*s).to_string()).collect())
    }

    /// Attach a backtrace of the active calls to `err` unless it has one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
