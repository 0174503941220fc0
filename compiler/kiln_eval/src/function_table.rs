//! Function table.
//!
//! Built once from `Program::functions` before evaluation and only read
//! afterwards. Entries borrow the definitions, so the table is cheap to
//! build and can be shared by every nested call.

use kiln_ir::FunctionDef;
use rustc_hash::FxHashMap;

use crate::config::DuplicatePolicy;
use crate::errors::{duplicate_function, EvalError};

/// Immutable mapping from function name to definition.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable<'a> {
    functions: FxHashMap<&'a str, &'a FunctionDef>,
}

impl<'a> FunctionTable<'a> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `definitions` by name.
    ///
    /// Under `DuplicatePolicy::Reject` the second definition of a name fails
    /// with `DuplicateFunction`; under `LastWins` it replaces the first.
    pub fn from_definitions(
        definitions: &'a [FunctionDef],
        policy: DuplicatePolicy,
    ) -> Result<Self, EvalError> {
        let mut table = Self {
            functions: FxHashMap::default(),
        };
        table.functions.reserve(definitions.len());

        for def in definitions {
            if let Some(param) = def.duplicate_param() {
                tracing::warn!(
                    function = %def.name,
                    param,
                    "duplicate parameter name; the last argument bound to it wins"
                );
            }
            if table.insert(def).is_some() {
                match policy {
                    DuplicatePolicy::Reject => return Err(duplicate_function(&def.name)),
                    DuplicatePolicy::LastWins => {
                        tracing::warn!(function = %def.name, "function redefined; using the later definition");
                    }
                }
            }
        }

        tracing::debug!(functions = table.len(), "built function table");
        Ok(table)
    }

    /// Register a definition, returning the one it replaced.
    pub fn insert(&mut self, def: &'a FunctionDef) -> Option<&'a FunctionDef> {
        self.functions.insert(def.name.as_str(), def)
    }

    /// Resolve a function by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'a FunctionDef> {
        self.functions.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
