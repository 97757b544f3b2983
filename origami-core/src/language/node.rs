use crate::{language::Tag, type_system::TypeInfo};
use origami_error::error::CompileError;
use origami_types::{Span, Spanned};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the tree the PEG front end hands to the semantic pass.
///
/// Children are owned exclusively by their parent. Rules take nodes by value and hand back the
/// rewritten node, which the caller moves back into the parent's slot.
///
/// Child positions are zero-based here; the first "real" child of a node is `children[0]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CompileError>,
    /// Set on nodes that are finalized without asserting a type of their own.
    #[serde(default, skip_serializing_if = "is_false")]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Span::is_dummy")]
    pub span: Span,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Node {
    pub fn new(tag: Tag, children: Vec<Node>) -> Node {
        Node {
            tag,
            children,
            ..Default::default()
        }
    }

    pub fn leaf(tag: Tag, text: impl Into<String>) -> Node {
        Node {
            tag,
            payload: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_context(self, context: impl Into<String>) -> Node {
        Node {
            context: Some(context.into()),
            ..self
        }
    }

    pub fn with_span(self, span: Span) -> Node {
        Node { span, ..self }
    }

    pub fn with_type(self, ty: Option<TypeInfo>) -> Node {
        Node { ty, ..self }
    }

    pub fn set_type(&mut self, ty: TypeInfo) {
        self.ty = Some(ty);
    }

    /// Attaches `error` and returns the node as a terminal error leaf of its subtree.
    pub fn err(self, error: CompileError) -> Node {
        Node {
            error: Some(error),
            ..self
        }
    }

    /// Marks the node as visited and finalized.
    pub fn finish(self) -> Node {
        Node { done: true, ..self }
    }

    /// A node is resolved once the pass typed it, attached an error to it, or finalized it.
    pub fn is_resolved(&self) -> bool {
        self.ty.is_some() || self.error.is_some() || self.done
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Follows `path` down through child positions.
    pub fn descendant(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, index| node.children.get(*index))
    }

    /// The textual form of the node: its payload when it is a leaf, otherwise the text of its
    /// first child. Names of declarations are read this way.
    pub fn text(&self) -> &str {
        match (&self.payload, self.children.first()) {
            (Some(payload), _) => payload,
            (None, Some(first)) => first.text(),
            (None, None) => "",
        }
    }

    /// Every error attached anywhere in this subtree, in pre-order.
    pub fn errors(&self) -> Vec<&CompileError> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        errors
    }

    fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a CompileError>) {
        if let Some(error) = &self.error {
            errors.push(error);
        }
        for child in &self.children {
            child.collect_errors(errors);
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[#{}", self.tag)?;
        if let Some(payload) = &self.payload {
            write!(f, " {payload:?}")?;
        }
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import_decl() -> Node {
        Node::new(
            Tag::ImportDecl,
            vec![
                Node::new(
                    Tag::Other("ImportName".into()),
                    vec![
                        Node::new(Tag::NameExpr, vec![Node::leaf(Tag::Text, "Token")]),
                        Node::leaf(Tag::Text, "tok"),
                    ],
                ),
                Node::leaf(Tag::Text, "./token"),
            ],
        )
    }

    #[test]
    fn text_of_leaf_and_branch() {
        let node = import_decl();
        assert_eq!(node.child(1).map(Node::text), Some("./token"));
        assert_eq!(node.text(), "Token");
        assert_eq!(Node::new(Tag::Block, vec![]).text(), "");
    }

    #[test]
    fn descendant_follows_positions() {
        let node = import_decl();
        assert_eq!(node.descendant(&[0, 0, 0]).map(Node::text), Some("Token"));
        assert_eq!(node.descendant(&[0, 1]).map(Node::text), Some("tok"));
        assert!(node.descendant(&[0, 2]).is_none());
        assert_eq!(node.descendant(&[]), Some(&node));
    }

    #[test]
    fn display_is_bracketed() {
        let node = Node::new(
            Tag::Assign,
            vec![Node::leaf(Tag::NameExpr, "a"), Node::leaf(Tag::IntExpr, "1")],
        );
        assert_eq!(node.to_string(), r#"[#Assign [#NameExpr "a"] [#IntExpr "1"]]"#);
    }

    #[test]
    fn errors_are_collected_in_pre_order() {
        let first = CompileError::UnresolvedName {
            name: "a".into(),
            span: Span::dummy(),
        };
        let second = CompileError::UnresolvedName {
            name: "b".into(),
            span: Span::dummy(),
        };
        let tree = Node::new(
            Tag::Block,
            vec![
                Node::new(Tag::Pair, vec![]).err(first.clone()),
                Node::new(
                    Tag::Block,
                    vec![Node::new(Tag::Pair, vec![]).err(second.clone())],
                ),
            ],
        );
        assert_eq!(tree.errors(), vec![&first, &second]);
        assert!(!tree.is_resolved());
    }
}
