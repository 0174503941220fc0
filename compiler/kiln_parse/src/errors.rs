//! Deserialization errors.

use std::fmt;

use thiserror::Error;

/// Location of a node inside the payload, e.g. `body.exprs[2].left`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath(String);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the object field `name` below this node.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Path of the array element `index` below this node.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Failure to decode a payload into a `Program`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The payload is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// An expression node's `type` tag is not one of the known tags.
    #[error("unknown node type `{tag}` at {path}")]
    UnknownNodeType { tag: String, path: NodePath },

    /// A `bin` node names an operator outside the closed set.
    #[error("unknown operator `{name}` at {path}")]
    UnknownOperator { name: String, path: NodePath },

    /// A required field is missing or has the wrong shape.
    #[error("malformed node at {path}: {detail}")]
    MalformedNode { path: NodePath, detail: String },
}

impl ParseError {
    /// Where in the payload the error was found, if it is node-specific.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            Self::InvalidJson(_) => None,
            Self::UnknownNodeType { path, .. }
            | Self::UnknownOperator { path, .. }
            | Self::MalformedNode { path, .. } => Some(path),
        }
    }
}

#[cold]
pub(crate) fn malformed(path: &NodePath, detail: impl Into<String>) -> ParseError {
    ParseError::MalformedNode {
        path: path.clone(),
        detail: detail.into(),
    }
}

#[cold]
pub(crate) fn missing_field(path: &NodePath, field: &str) -> ParseError {
    malformed(path, format!("missing field `{field}`"))
}

#[cold]
pub(crate) fn wrong_type(path: &NodePath, field: &str, expected: &str) -> ParseError {
    malformed(path, format!("field `{field}` must be {expected}"))
}
