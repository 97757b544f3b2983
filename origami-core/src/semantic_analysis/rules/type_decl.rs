use super::expected_or_void;
use crate::{
    language::{Node, Tag},
    semantic_analysis::{Environment, Origami},
    type_system::TypeInfo,
};
use origami_types::constants::{CONTEXT_DATA, CONTEXT_NAME};

/// Layout: `name field*`. The struct is bound under its name and queued for hoisting.
pub(crate) fn struct_define(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 1);
    for index in 1..node.children.len() {
        engine.type_at(env, &mut node, index, expected);
    }
    let name = node.children[0].text().to_string();
    let fields = node.children[1..]
        .iter()
        .map(|field| field.ty.clone().unwrap_or_default())
        .collect();
    env.add_name(
        &name,
        TypeInfo::Struct {
            name: name.clone(),
            fields,
        },
    );
    let node = node.with_type(Some(expected_or_void(expected)));
    tracing::debug!(%name, "queued struct for hoisting");
    env.ext_mut().push_decl(node.clone());
    node
}

/// Layout: `variant*`. An anonymous enum gets a generated name and an `EnumDefine` queued for
/// hoisting; the generated name is also appended to the original node.
pub(crate) fn enum_type(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, expected);
    }
    let generated = format!(
        "{}{}",
        engine.config().enum_name_prefix,
        env.ext().synthesized_decls().len()
    );
    let name = Node::leaf(Tag::Text, &generated).with_context(CONTEXT_NAME);
    let elements = Node::new(Tag::EnumElement, node.children.clone()).with_context(CONTEXT_DATA);
    let define = Node::new(Tag::EnumDefine, vec![elements, name.clone()])
        .with_span(node.span)
        .with_type(Some(expected_or_void(expected)));
    tracing::debug!(name = %generated, "queued enum for hoisting");
    env.ext_mut().push_decl(define);
    node.children.push(name);
    node.with_type(Some(expected_or_void(expected)))
}
