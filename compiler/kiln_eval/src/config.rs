//! Evaluation policies.
//!
//! `EvalConfig` is plain data handed to the interpreter. The defaults match
//! `kiln run`: unlimited call depth (the stack grows on demand) and
//! rejection of duplicate function names.

/// What to do when two function definitions share a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateFunction` before evaluation starts.
    #[default]
    Reject,
    /// The definition that comes last in the program wins.
    LastWins,
}

/// Evaluation configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    /// Maximum number of nested function calls, or `None` for unlimited.
    ///
    /// Reaching the limit fails with `RecursionLimitExceeded`.
    pub max_call_depth: Option<usize>,
    /// Handling of duplicate function names.
    pub duplicates: DuplicatePolicy,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the call depth.
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Set the duplicate function policy.
    #[must_use]
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
