use super::unresolved;
use crate::{
    language::Node,
    semantic_analysis::{Environment, Origami},
    type_system::TypeInfo,
};
use origami_error::{error::CompileError, type_error::TypeError};

/// `VPair` and `Pair`. Layout: `_ name`.
pub(crate) fn pair(
    _engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 2);
    let name = node.children[1].text().to_string();
    let Some(ty) = env.infer_name(&name) else {
        return unresolved(node, name);
    };
    node.children[1].set_type(ty.clone());
    node.with_type(Some(ty))
}

/// Layout: `index mapping`.
pub(crate) fn map1(
    engine: &Origami,
    env: &mut Environment,
    node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    mapping_access(engine, env, node, 1)
}

/// Layout: `index index mapping`.
pub(crate) fn map2(
    engine: &Origami,
    env: &mut Environment,
    node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    mapping_access(engine, env, node, 2)
}

/// Types the mapping operand that follows `arity` index arguments, then the indices. The access
/// has the mapping's return type.
fn mapping_access(engine: &Origami, env: &mut Environment, mut node: Node, arity: usize) -> Node {
    expect_children!(node, arity + 1);
    engine.type_at(env, &mut node, arity, None);
    let operand = &node.children[arity];
    let returns = match operand.ty.as_ref().and_then(|ty| ty.as_mapping(arity)) {
        Some((_, returns)) => returns.clone(),
        None => {
            let error = TypeError::NotAMapping {
                found: operand.ty.clone().unwrap_or_default().to_string(),
                arity,
                span: operand.span,
            };
            return node.err(CompileError::from(error));
        }
    };
    for index in 0..arity {
        engine.type_at(env, &mut node, index, None);
    }
    node.with_type(Some(returns))
}

/// A raw name is looked up but never reported: it may stay untyped.
pub(crate) fn raw(
    _engine: &Origami,
    env: &mut Environment,
    node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    let ty = env.infer_name(node.text());
    if ty.is_none() {
        tracing::trace!(name = node.text(), "raw name left untyped");
    }
    node.with_type(ty)
}

pub(crate) fn int_expr(
    _engine: &Origami,
    _env: &mut Environment,
    node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    node.with_type(Some(TypeInfo::int256()))
}
