use super::unresolved;
use crate::{
    language::{Node, Tag},
    semantic_analysis::{Environment, Origami},
    type_system::TypeInfo,
};
use origami_types::constants::CONTEXT_NAME;

/// Layout: `target value`. The value is checked against the target's type.
pub(crate) fn assign(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 2);
    engine.type_at(env, &mut node, 0, None);
    let target = node.children[0].ty.clone();
    engine.type_at(env, &mut node, 1, target.as_ref());
    node.with_type(Some(TypeInfo::void()))
}

pub(crate) fn return_statement(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 1);
    engine.type_at(env, &mut node, 0, expected);
    let operand = &node.children[0];
    let resolved = match (&operand.ty, &operand.error) {
        (Some(ty), _) => Ok(ty.clone()),
        // The operand already carries its own diagnostic.
        (None, Some(_)) => Ok(TypeInfo::Unknown),
        // Only a bare name is looked up.
        (None, None) if operand.is_leaf() && operand.payload.is_some() => {
            let name = operand.text().to_string();
            env.infer_name(&name).ok_or(name)
        }
        (None, None) => Ok(TypeInfo::Unknown),
    };
    match resolved {
        Ok(ty) => node.with_type(Some(ty)),
        Err(name) => unresolved(node, name),
    }
}

/// Layout: `target event`. When `event` names a function with a display override, the
/// override is appended as a `name` leaf.
pub(crate) fn record_statement(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 2);
    engine.type_at(env, &mut node, 0, expected);
    if let Some(display) = env.ext().display_name(node.children[1].text()) {
        let display = Node::leaf(Tag::Text, display).with_context(CONTEXT_NAME);
        node.children.push(display);
    }
    node.with_type(Some(TypeInfo::void()))
}

pub(crate) fn complete_statement(
    _engine: &Origami,
    _env: &mut Environment,
    node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    node.with_type(Some(TypeInfo::boolean()))
}
