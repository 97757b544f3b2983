use crate::{
    language::Node,
    semantic_analysis::{Environment, Origami},
    transform::normalize_value,
    type_system::TypeInfo,
};

/// `WordDefine` and `AssumeDecls`: every child is processed, then the node is finalized
/// without a type of its own.
pub(crate) fn finalize_children(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, expected);
    }
    node.finish()
}

/// Layout: `name value`. Binds the name to the width-normalized literal, or to a list type
/// when the value is a sequence of literals.
pub(crate) fn assume_decl(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 2);
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, expected);
    }
    normalize_value(&mut node.children[1]);
    let name = node.children[0].text().to_string();
    let bound = literal_type(&node.children[1]);
    tracing::debug!(%name, ty = %bound, "bound assumption");
    env.add_name(name, bound);
    node.with_type(Some(TypeInfo::void()))
}

fn literal_type(value: &Node) -> TypeInfo {
    if value.is_leaf() {
        TypeInfo::named(value.text())
    } else {
        TypeInfo::List(value.children.iter().map(literal_type).collect())
    }
}
