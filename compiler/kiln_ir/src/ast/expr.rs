//! Expression Types
//!
//! `Expr` owns its children through `Box`/`Vec`. The tree is immutable once
//! built: the evaluator only ever borrows it.

use std::fmt;

use super::operators::BinaryOp;

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal: `42`
    Number(i64),

    /// Variable reference: `x`
    Ident(String),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Sequence of expressions, evaluated in order.
    ///
    /// The value is the last item's value, or `0` when empty.
    Seq(Vec<Expr>),

    /// Assignment into the current scope: `name = value`
    Assign { name: String, value: Box<Expr> },

    /// Conditional: `if cond then then_branch else else_branch`
    ///
    /// Both branches are mandatory.
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },

    /// Loop: `while cond do body`. Always evaluates to `0`.
    While { cond: Box<Expr>, body: Box<Expr> },

    /// Call of a named function: `name(args...)`
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn num(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn seq(items: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Seq(items.into_iter().collect())
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn if_(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_(cond: Expr, body: Expr) -> Self {
        Expr::While {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// The exchange-format tag for this variant (`"num"`, `"bin"`, ...).
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "num",
            Expr::Ident(_) => "ident",
            Expr::Binary { .. } => "bin",
            Expr::Seq(_) => "seq",
            Expr::Assign { .. } => "assign",
            Expr::If { .. } => "if",
            Expr::While { .. } => "while",
            Expr::Call { .. } => "call",
        }
    }
}

/// Compact single-line rendering, used by `kiln parse` and in logs.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Ident(name) => f.write_str(name),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Seq(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Expr::Assign { name, value } => write!(f, "{name} = {value}"),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "if {cond} then {then_branch} else {else_branch}"),
            Expr::While { cond, body } => write!(f, "while {cond} do {body}"),
            Expr::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
