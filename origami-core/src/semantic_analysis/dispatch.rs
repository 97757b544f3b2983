use super::{rules, Environment};
use crate::{
    build_config::BuildConfig,
    language::{Node, Tag},
    type_system::TypeInfo,
};
use indexmap::IndexMap;

/// A rule for a tag outside the known vocabulary.
///
/// Like the built-in rules, an extension rule receives the node by value, is responsible for
/// recursing into its own children through [Origami::type_at] or [Origami::as_type], and must
/// hand back a node that is typed or carries an error.
pub trait TagRule {
    fn type_check(
        &self,
        engine: &Origami,
        env: &mut Environment,
        node: Node,
        expected: Option<&TypeInfo>,
    ) -> Node;
}

impl<F> TagRule for F
where
    F: Fn(&Origami, &mut Environment, Node, Option<&TypeInfo>) -> Node,
{
    fn type_check(
        &self,
        engine: &Origami,
        env: &mut Environment,
        node: Node,
        expected: Option<&TypeInfo>,
    ) -> Node {
        self(engine, env, node, expected)
    }
}

type Rule = fn(&Origami, &mut Environment, Node, Option<&TypeInfo>) -> Node;

/// The dispatch engine: applies the rule matching each node's tag.
///
/// Traversal is a single synchronous pass. A node is never revisited once its rule returns.
pub struct Origami {
    config: BuildConfig,
    extensions: IndexMap<String, Box<dyn TagRule>>,
}

impl Origami {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            extensions: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Registers `rule` for the open tag `tag`. A later registration for the same tag replaces
    /// the earlier one.
    pub fn register_rule(&mut self, tag: impl Into<String>, rule: impl TagRule + 'static) {
        self.extensions.insert(tag.into(), Box::new(rule));
    }

    /// Runs the pass over one source unit with a fresh environment.
    pub fn type_check_source(&self, tree: Node) -> Node {
        let mut env = Environment::from_config(&self.config);
        self.as_type(&mut env, tree, Some(&TypeInfo::void()))
    }

    /// Rewrites the child of `parent` at `index` in place. Out-of-range indices are ignored.
    pub fn type_at(
        &self,
        env: &mut Environment,
        parent: &mut Node,
        index: usize,
        expected: Option<&TypeInfo>,
    ) {
        if let Some(slot) = parent.children.get_mut(index) {
            let child = std::mem::take(slot);
            *slot = self.dispatch(env, child, expected);
        }
    }

    /// Rewrites a node that has no parent slot and returns the result.
    pub fn as_type(&self, env: &mut Environment, node: Node, expected: Option<&TypeInfo>) -> Node {
        self.dispatch(env, node, expected)
    }

    pub fn dispatch(&self, env: &mut Environment, node: Node, expected: Option<&TypeInfo>) -> Node {
        tracing::trace!(tag = %node.tag, "dispatch");
        let rule: Rule = match node.tag {
            Tag::Source => rules::program::source,
            Tag::Block => rules::program::block,
            Tag::Title => rules::program::title,
            Tag::Import => rules::program::import,
            Tag::ImportDecl => rules::program::import_decl,
            Tag::VariableDecl => rules::program::variable_decl,
            Tag::VPair | Tag::Pair => rules::expression::pair,
            Tag::FunctionDecl => rules::declaration::function_decl,
            Tag::FunctionName => rules::declaration::function_name,
            Tag::FDParam => rules::declaration::fd_param,
            Tag::FDPair => rules::declaration::fd_pair,
            Tag::FDBody => rules::declaration::fd_body,
            Tag::EventDecl => rules::declaration::event_decl,
            Tag::Assign => rules::statement::assign,
            Tag::Return => rules::statement::return_statement,
            Tag::RecordStatement => rules::statement::record_statement,
            Tag::CompleteStatement => rules::statement::complete_statement,
            Tag::Map1 => rules::expression::map1,
            Tag::Map2 => rules::expression::map2,
            Tag::Raw => rules::expression::raw,
            Tag::IntExpr => rules::expression::int_expr,
            Tag::StructDefine => rules::type_decl::struct_define,
            Tag::EnumType => rules::type_decl::enum_type,
            Tag::WordDefine | Tag::AssumeDecls => rules::assume::finalize_children,
            Tag::AssumeDecl => rules::assume::assume_decl,
            Tag::NoImport
            | Tag::ImportPair
            | Tag::FunctionParam
            | Tag::EventStatement
            | Tag::EnumDefine
            | Tag::EnumElement
            | Tag::Require
            | Tag::Infix
            | Tag::NameExpr
            | Tag::Text
            | Tag::TypeDecls
            | Tag::ReturnType
            | Tag::NotConstructor
            | Tag::ViewType
            | Tag::MemoryType => return node,
            Tag::Other(_) => return self.dispatch_extension(env, node, expected),
        };
        rule(self, env, node, expected)
    }

    /// Open tags are processed by their registered rule, or left as they are.
    fn dispatch_extension(
        &self,
        env: &mut Environment,
        node: Node,
        expected: Option<&TypeInfo>,
    ) -> Node {
        let rule = match &node.tag {
            Tag::Other(name) => self.extensions.get(name.as_str()),
            _ => None,
        };
        match rule {
            Some(rule) => rule.type_check(self, env, node, expected),
            None => node,
        }
    }
}
