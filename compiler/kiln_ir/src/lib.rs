//! Kiln IR - Abstract Syntax Model
//!
//! This crate contains the data structures shared by the Kiln evaluator and
//! deserializer:
//! - `Expr`: the closed set of expression variants
//! - `BinaryOp`: arithmetic and comparison operators
//! - `FunctionDef` and `Program`: top-level items
//!
//! # Design Philosophy
//!
//! - **Closed variants**: `Expr` is a plain enum, so every consumer matches
//!   exhaustively and adding a variant breaks every `match` that forgot it.
//! - **Owned trees**: children are boxed and owned by their parent; there is
//!   no sharing and no cycles.
//! - **No behavior**: evaluation lives in `kiln_eval`, decoding in `kiln_parse`.

pub mod ast;

pub use ast::{BinaryOp, Expr, FunctionDef, Program};
