use crate::language::Node;
use origami_types::constants::{INT256_TYPE_NAME, INT_TYPE_NAME, UINT256_TYPE_NAME, UINT_TYPE_NAME};

/// Fixes the width of a generic integer literal: `int` becomes `int256` and `uint` becomes
/// `uint256`. Any other payload is left as it is.
pub fn normalize_width(node: &mut Node) {
    let fixed = match node.payload.as_deref() {
        Some(INT_TYPE_NAME) => INT256_TYPE_NAME,
        Some(UINT_TYPE_NAME) => UINT256_TYPE_NAME,
        _ => return,
    };
    node.payload = Some(fixed.to_string());
}

/// Applies [normalize_width] to a value position, descending into every element when the
/// value is a sequence.
pub fn normalize_value(node: &mut Node) {
    if node.is_leaf() {
        normalize_width(node);
    } else {
        node.children.iter_mut().for_each(normalize_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Tag;

    fn literal(text: &str) -> Node {
        Node::leaf(Tag::Text, text)
    }

    #[test]
    fn widens_generic_integers() {
        for (input, output) in [
            ("int", "int256"),
            ("uint", "uint256"),
            ("int256", "int256"),
            ("uint8", "uint8"),
            ("address", "address"),
        ] {
            let mut node = literal(input);
            normalize_width(&mut node);
            assert_eq!(node.payload.as_deref(), Some(output));
        }
    }

    #[test]
    fn idempotent() {
        for input in ["int", "uint", "bool", ""] {
            let mut once = literal(input);
            normalize_width(&mut once);
            let mut twice = once.clone();
            normalize_width(&mut twice);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn sequences_are_normalized_element_wise() {
        let mut value = Node::new(
            Tag::Other("List".into()),
            vec![
                literal("int"),
                Node::new(Tag::Other("List".into()), vec![literal("uint")]),
                literal("bool"),
            ],
        );
        normalize_value(&mut value);
        assert_eq!(value.children[0].text(), "int256");
        assert_eq!(value.children[1].children[0].text(), "uint256");
        assert_eq!(value.children[2].text(), "bool");
    }
}
