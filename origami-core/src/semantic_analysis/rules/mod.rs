//! The Nico rule table: one rule per tag.
//!
//! Every rule takes the node by value and returns it typed, or carrying an error. Child
//! positions in comments are zero-based, matching `Node::children`.

/// Returns `$node` with a [CompileError::MissingChild] attached when it has fewer than
/// `$count` children.
///
/// [CompileError::MissingChild]: origami_error::error::CompileError::MissingChild
macro_rules! expect_children {
    ($node:ident, $count:expr) => {
        if $node.children.len() < $count {
            let error = origami_error::error::CompileError::MissingChild {
                tag: $node.tag.to_string(),
                index: $count,
                span: $node.span,
            };
            return $node.err(error);
        }
    };
}

pub(crate) mod assume;
pub(crate) mod declaration;
pub(crate) mod expression;
pub(crate) mod program;
pub(crate) mod statement;
pub(crate) mod type_decl;


use crate::{language::Node, type_system::TypeInfo};
use origami_error::error::CompileError;

/// The type a node adopts from its context. Without an expectation it settles on `void`, so
/// the node never comes back untyped.
pub(crate) fn expected_or_void(expected: Option<&TypeInfo>) -> TypeInfo {
    expected.cloned().unwrap_or_else(TypeInfo::void)
}

/// Attaches an `untyped <name>` error to `node`.
pub(crate) fn unresolved(node: Node, name: impl Into<String>) -> Node {
    let name = name.into();
    tracing::warn!(tag = %node.tag, "untyped {name}");
    let span = node.span;
    node.err(CompileError::UnresolvedName { name, span })
}
