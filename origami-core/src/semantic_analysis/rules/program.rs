use super::expected_or_void;
use crate::{
    language::{Node, Tag},
    semantic_analysis::{Environment, ImportDescriptor, Origami},
    transform::encode_import_name,
    type_system::TypeInfo,
};
use origami_error::error::CompileError;
use origami_types::constants::CONTEXT_USER;

pub(crate) fn source(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    env.reset_extension();
    tracing::debug!(children = node.children.len(), "type checking source unit");
    let void = TypeInfo::void();

    // A trailing assumption block binds the constants every other declaration may refer to.
    let assumptions = node
        .children
        .len()
        .checked_sub(1)
        .filter(|last| node.children[*last].tag == Tag::AssumeDecls);
    if let Some(index) = assumptions {
        engine.type_at(env, &mut node, index, Some(&void));
    }
    for index in 0..node.children.len() {
        if Some(index) != assumptions {
            engine.type_at(env, &mut node, index, Some(&void));
        }
    }

    let decls = env.ext_mut().take_decls();
    tracing::debug!(count = decls.len(), "hoisting synthesized declarations");
    let user = Node::new(Tag::TypeDecls, decls)
        .with_context(CONTEXT_USER)
        .with_type(Some(void));
    node.children.push(user);
    node.with_type(Some(expected_or_void(expected)))
}

pub(crate) fn block(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, expected);
    }
    node.with_type(Some(expected_or_void(expected)))
}

pub(crate) fn title(
    _engine: &Origami,
    _env: &mut Environment,
    node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    node.with_type(Some(expected_or_void(expected)))
}

pub(crate) fn import(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    if node.is_leaf() && node.payload.is_some() {
        // A bare string stands for an empty import list.
        node.payload = None;
        node.children = vec![Node::leaf(Tag::NoImport, "").with_span(node.span)];
    } else {
        for index in 0..node.children.len() {
            engine.type_at(env, &mut node, index, expected);
        }
    }
    node.with_type(Some(expected_or_void(expected)))
}

/// Layout: `[ImportName [Name symbol] short] path address`.
pub(crate) fn import_decl(
    _engine: &Origami,
    env: &mut Environment,
    node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 3);
    let (symbol, short_name) = match (node.descendant(&[0, 0, 0]), node.descendant(&[0, 1])) {
        (Some(symbol), Some(short_name)) => (symbol.text(), short_name.text()),
        _ => {
            let error = CompileError::MissingChild {
                tag: node.children[0].tag.to_string(),
                index: 2,
                span: node.children[0].span,
            };
            return node.err(error);
        }
    };
    let import = ImportDescriptor {
        encoded_name: encode_import_name(symbol),
        short_name: short_name.to_string(),
        path: node.children[1].text().to_string(),
        address: node.children[2].text().to_string(),
    };
    tracing::debug!(symbol, encoded = %import.encoded_name, "recorded import");
    env.ext_mut().record_import(import);
    node.with_type(Some(expected_or_void(expected)))
}

/// Binds every import recorded so far to the declaration scope that follows it.
pub(crate) fn variable_decl(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, None);
    }
    let pairs = env
        .ext()
        .imports()
        .iter()
        .map(ImportDescriptor::to_pair_node)
        .collect::<Vec<_>>();
    node.children.extend(pairs);
    node.with_type(Some(expected_or_void(expected)))
}
