//! Operator Types
//!
//! The language has a single operator category: binary operators over
//! integers. Arithmetic operators produce an integer, comparison operators
//! produce `1` or `0`.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    Neq,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 10] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Lt,
        Self::Gt,
        Self::LtEq,
        Self::GtEq,
        Self::Eq,
        Self::Neq,
    ];

    /// Returns the operator's name in the exchange format (`"LtEq"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Lt => "Lt",
            Self::Gt => "Gt",
            Self::LtEq => "LtEq",
            Self::GtEq => "GtEq",
            Self::Eq => "Eq",
            Self::Neq => "Neq",
        }
    }

    /// Look up an operator by its exchange-format name.
    ///
    /// Names are case-sensitive; anything outside the closed set is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in log and error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            // Comparison
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::Neq => "!=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
