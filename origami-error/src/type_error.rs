use origami_types::{Span, Spanned};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeError {
    #[error(
        "Mapping operand is not a function of {arity} index argument(s).\n\
         found: {found}"
    )]
    NotAMapping {
        found: String,
        arity: usize,
        span: Span,
    },
}

impl Spanned for TypeError {
    fn span(&self) -> Span {
        use TypeError::*;
        match self {
            NotAMapping { span, .. } => *span,
        }
    }
}
