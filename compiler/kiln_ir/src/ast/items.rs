//! Top-level items: function definitions and programs.

use std::fmt;

use super::expr::Expr;

/// A named first-order function.
///
/// Parameter names are expected to be unique; if they are not, the last
/// binding of a repeated name wins when the function is called.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Expr,
}

impl FunctionDef {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = S>,
        body: Expr,
    ) -> Self {
        FunctionDef {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body,
        }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The first parameter name that appears more than once, if any.
    pub fn duplicate_param(&self) -> Option<&str> {
        self.params
            .iter()
            .enumerate()
            .find(|(i, p)| self.params[..*i].contains(p))
            .map(|(_, p)| p.as_str())
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "def {}({}) = {}", self.name, self.params.join(", "), self.body)
    }
}

/// A whole program: function definitions plus the body to evaluate.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub functions: Vec<FunctionDef>,
    pub body: Expr,
}

impl Program {
    pub fn new(functions: Vec<FunctionDef>, body: Expr) -> Self {
        Program { functions, body }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for func in &self.functions {
            writeln!(f, "{func}")?;
        }
        write!(f, "{}", self.body)
    }
}
