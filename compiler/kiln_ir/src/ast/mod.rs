//! AST types.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes (`Expr`)
//! - `operators`: binary operators (`BinaryOp`)
//! - `items`: function definitions and whole programs

mod expr;
mod items;
mod operators;

pub use expr::Expr;
pub use items::{FunctionDef, Program};
pub use operators::BinaryOp;
