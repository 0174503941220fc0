//! Kiln Parse - decoder for the JSON exchange format.
//!
//! Payloads are tag-discriminated JSON trees:
//!
//! ```text
//! { "funcs": [ { "name": "f", "params": ["n"], "body": <expr> } ],
//!   "body":  { "type": "call", "name": "f", "args": [ { "type": "num", "value": 5 } ] } }
//! ```
//!
//! Decoding goes straight to `kiln_ir` types; no dynamically typed tree
//! outlives the call. Every failure is a [`ParseError`] naming the offending
//! node's path.
//!
//! JSON nesting is limited by `serde_json`'s recursion guard (128 levels),
//! which surfaces as [`ParseError::InvalidJson`].

mod decode;
mod errors;

pub use decode::{parse_expr, parse_function, parse_program, parse_program_str, parse_program_value};
pub use errors::{NodePath, ParseError};
