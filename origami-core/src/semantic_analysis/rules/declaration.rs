use super::{expected_or_void, unresolved};
use crate::{
    build_config::BuildConfig,
    language::{Node, Tag},
    semantic_analysis::{Environment, Origami},
    type_system::TypeInfo,
};
use origami_types::constants::{
    ADDRESS_TYPE_NAME, CONTEXT_BODY, CONTEXT_MEMORY, CONTEXT_NOT_CONSTRUCTOR, CONTEXT_PARAM,
    CONTEXT_RETURNS, CONTEXT_VIEW, STRING_TYPE_NAME,
};

/// Layout: `name raw`, where `raw` holds the `FunctionParam`s and the body statements.
///
/// The raw child is replaced by an `FDParam`/`FDBody` pair, the function's type is bound under
/// its name, and return/constructor/view markers are appended. A body ending in an
/// `EventStatement` turns the whole declaration into an `EventDecl`.
pub(crate) fn function_decl(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 2);
    let Some(raw) = node.children.pop() else {
        return node;
    };
    let (params, statements): (Vec<Node>, Vec<Node>) = raw
        .children
        .into_iter()
        .partition(|child| child.tag == Tag::FunctionParam);
    let params = params
        .into_iter()
        .filter_map(|param| param.children.into_iter().next())
        .collect();
    let param = Node::new(Tag::FDParam, params)
        .with_context(CONTEXT_PARAM)
        .with_span(raw.span);
    let mut body = Node::new(Tag::FDBody, statements)
        .with_context(CONTEXT_BODY)
        .with_span(raw.span);

    engine.type_at(env, &mut node, 0, expected);
    let param = engine.as_type(env, param, None);

    let guards = env
        .ext_mut()
        .drain_requires()
        .into_iter()
        .map(|param| non_zero_guard(engine, env, param))
        .collect::<Vec<_>>();
    if !guards.is_empty() {
        tracing::debug!(function = node.text(), count = guards.len(), "synthesized guards");
        body.children.splice(0..0, guards);
    }
    let body = engine.as_type(env, body, None);

    let param_types = match &param.ty {
        Some(TypeInfo::Function { params, .. }) if !params.is_empty() => params.clone(),
        _ => expected.cloned().into_iter().collect(),
    };
    let returns = body.ty.clone().unwrap_or_else(TypeInfo::void);
    env.add_name(
        node.text(),
        TypeInfo::function(param_types, Some(returns.clone())),
    );

    if ends_with_event(&body) {
        tracing::debug!(function = node.text(), "rewriting as event declaration");
        let name = node.children.swap_remove(0);
        let event = Node::new(Tag::EventDecl, vec![name, param]).with_span(node.span);
        return engine.as_type(env, event, expected);
    }

    let read_only = is_read_only(&body);
    let constructor = is_constructor(&node.children[0], engine.config());
    node.children.push(param);
    node.children.push(body);
    if !returns.is_void() {
        let ret = Node::leaf(Tag::ReturnType, returns.to_string())
            .with_context(CONTEXT_RETURNS)
            .with_type(Some(returns));
        node.children.push(ret);
    }
    if !constructor {
        node.children
            .push(Node::leaf(Tag::NotConstructor, "").with_context(CONTEXT_NOT_CONSTRUCTOR));
        if read_only {
            node.children
                .push(Node::leaf(Tag::ViewType, "").with_context(CONTEXT_VIEW));
        }
    }
    node.with_type(Some(expected_or_void(expected)))
}

/// `Require(Infix(param, NameExpr(op), Text(zero)))`.
fn non_zero_guard(engine: &Origami, env: &mut Environment, param: Node) -> Node {
    let config = engine.config();
    let span = param.span;
    let op = engine.as_type(env, Node::leaf(Tag::NameExpr, &config.guard_operator), None);
    let zero = Node::leaf(Tag::Text, &config.zero_address_literal);
    let infix = Node::new(Tag::Infix, vec![param, op, zero]).with_span(span);
    Node::new(Tag::Require, vec![infix]).with_span(span)
}

/// A declaration is the constructor when its name carries a display override equal to the
/// configured constructor name.
fn is_constructor(name: &Node, config: &BuildConfig) -> bool {
    name.children.len() == 2 && name.children[1].text() == config.constructor_name
}

/// Heuristic read-only check: no statement of the body is a `RecordStatement`.
///
/// This is a structural approximation, not an effect analysis. Calls into helpers that write
/// state are not seen.
fn is_read_only(body: &Node) -> bool {
    !body
        .children
        .iter()
        .any(|statement| statement.tag == Tag::RecordStatement)
}

fn ends_with_event(body: &Node) -> bool {
    body.children
        .last()
        .is_some_and(|statement| statement.tag == Tag::EventStatement)
}

/// Layout: `name [display]`. A display override is remembered for later `RecordStatement`s.
pub(crate) fn function_name(
    _engine: &Origami,
    env: &mut Environment,
    node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    if let [name, display] = node.children.as_slice() {
        env.ext_mut()
            .record_display_name(name.text(), display.text());
    }
    node.with_type(Some(expected_or_void(expected)))
}

pub(crate) fn fd_param(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, expected);
    }
    let params = node
        .children
        .iter()
        .map(|param| param.ty.clone().unwrap_or_default())
        .collect();
    node.with_type(Some(TypeInfo::function(params, None)))
}

/// Layout: `... name`. The bound name is the last child.
pub(crate) fn fd_pair(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    expect_children!(node, 1);
    let last = node.children.len() - 1;
    let name = node.children[last].text().to_string();
    let Some(ty) = env.infer_name(&name) else {
        return unresolved(node, name);
    };
    node.children[last].set_type(ty.clone());
    if ty.is_named(STRING_TYPE_NAME) {
        node.children
            .push(Node::leaf(Tag::MemoryType, "").with_context(CONTEXT_MEMORY));
    }
    if ty.is_named(ADDRESS_TYPE_NAME) && engine.config().synthesize_guards {
        env.ext_mut().queue_require(node.children[last].clone());
    }
    node.with_type(Some(ty))
}

pub(crate) fn fd_body(
    engine: &Origami,
    env: &mut Environment,
    mut node: Node,
    _expected: Option<&TypeInfo>,
) -> Node {
    for index in 0..node.children.len() {
        engine.type_at(env, &mut node, index, None);
    }
    let ty = match node.children.last() {
        Some(last) if matches!(last.tag, Tag::Return | Tag::CompleteStatement) => {
            last.ty.clone().unwrap_or_default()
        }
        _ => TypeInfo::void(),
    };
    node.with_type(Some(ty))
}

/// Layout: `name param`, both already processed by the declaration it replaces.
pub(crate) fn event_decl(
    _engine: &Origami,
    _env: &mut Environment,
    node: Node,
    expected: Option<&TypeInfo>,
) -> Node {
    node.with_type(Some(expected_or_void(expected)))
}
