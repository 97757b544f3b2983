//! Semantic analysis and declaration synthesis for Origami source trees.
//!
//! The PEG front end hands over a tree rooted at a `Source` node. The pass types every node it
//! visits, validates name bindings, and reshapes the tree for code generation: function
//! declarations are split into parameters and body, address parameters receive non-zero
//! guards, and struct and enum declarations are hoisted into a trailing `TypeDecls` node.
//!
//! Unresolved names do not abort the pass. They are attached to the offending node, and can be
//! gathered afterwards with [Node::errors].

mod build_config;
pub mod language;
pub mod semantic_analysis;
pub mod transform;
pub mod type_system;

pub use build_config::{BuildConfig, ConfigError};
pub use language::{Node, Tag};
pub use semantic_analysis::{Environment, Extension, ImportDescriptor, Origami, TagRule};
pub use type_system::TypeInfo;

/// Runs the semantic pass over one `Source` tree with the built-in rules only.
pub fn type_check_source(tree: Node, config: &BuildConfig) -> Node {
    Origami::new(config.clone()).type_check_source(tree)
}
