//! Variable environment.
//!
//! One `Environment` backs one evaluation scope. There is no parent chain:
//! the top-level body owns one environment, and every function call starts
//! from an empty one that holds only the callee's parameters
//! (see [`Environment::for_call`]).

use rustc_hash::FxHashMap;

/// Mutable mapping from variable name to value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<String, i64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the environment for a function body.
    ///
    /// Binds `params[i]` to `args[i]` in order. If a parameter name repeats,
    /// the later argument wins. Nothing from the caller's scope is visible.
    pub fn for_call(params: &[String], args: Vec<i64>) -> Self {
        debug_assert_eq!(params.len(), args.len(), "arity checked by caller");
        let mut bindings = FxHashMap::default();
        bindings.reserve(params.len());
        for (param, value) in params.iter().zip(args) {
            bindings.insert(param.clone(), value);
        }
        Self { bindings }
    }

    /// Look up a variable by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` to `value`, overwriting any previous binding.
    #[inline]
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
