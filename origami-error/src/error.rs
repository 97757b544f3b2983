use crate::type_error::TypeError;

use origami_types::{Span, Spanned};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A diagnostic attached to the node it was raised on.
///
/// Errors never abort the pass: the rule that detects one stores it on the offending node and
/// returns, and the parent carries on with the remaining siblings.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompileError {
    #[error("untyped {name}")]
    UnresolvedName { name: String, span: Span },
    #[error("#{tag} node is missing child {index}")]
    MissingChild {
        tag: String,
        index: usize,
        span: Span,
    },
    #[error("{0}")]
    TypeError(TypeError),
}

impl From<TypeError> for CompileError {
    fn from(other: TypeError) -> CompileError {
        CompileError::TypeError(other)
    }
}

impl Spanned for CompileError {
    fn span(&self) -> Span {
        match self {
            CompileError::UnresolvedName { span, .. } => *span,
            CompileError::MissingChild { span, .. } => *span,
            CompileError::TypeError(err) => err.span(),
        }
    }
}
