use crate::language::{Node, Tag};
use indexmap::IndexMap;
use origami_types::constants::{CONTEXT_IMPORT_ADDRESS, CONTEXT_IMPORT_FNAME, CONTEXT_IMPORT_SNAME};

/// One `import` recorded while processing a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDescriptor {
    /// The imported symbol, encoded with [encode_import_name](crate::transform::encode_import_name).
    pub encoded_name: String,
    pub short_name: String,
    pub path: String,
    pub address: String,
}

impl ImportDescriptor {
    /// The `ImportPair` node attached to variable declarations following the import.
    pub(crate) fn to_pair_node(&self) -> Node {
        Node::new(
            Tag::ImportPair,
            vec![
                Node::leaf(Tag::Text, &self.encoded_name).with_context(CONTEXT_IMPORT_FNAME),
                Node::leaf(Tag::Text, &self.short_name).with_context(CONTEXT_IMPORT_SNAME),
                Node::leaf(Tag::Text, &self.address).with_context(CONTEXT_IMPORT_ADDRESS),
            ],
        )
    }
}

/// Cross-cutting state accumulated over one source unit.
#[derive(Clone, Debug, Default)]
pub struct Extension {
    imports: Vec<ImportDescriptor>,
    synthesized_decls: Vec<Node>,
    display_names: IndexMap<String, String>,
    pending_requires: Vec<Node>,
}

impl Extension {
    pub fn imports(&self) -> &[ImportDescriptor] {
        &self.imports
    }

    pub(crate) fn record_import(&mut self, import: ImportDescriptor) {
        self.imports.push(import);
    }

    pub fn synthesized_decls(&self) -> &[Node] {
        &self.synthesized_decls
    }

    pub(crate) fn push_decl(&mut self, decl: Node) {
        self.synthesized_decls.push(decl);
    }

    /// Hands over every declaration synthesized so far, leaving none behind.
    pub(crate) fn take_decls(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.synthesized_decls)
    }

    pub fn display_name(&self, name: &str) -> Option<&str> {
        self.display_names.get(name).map(String::as_str)
    }

    pub(crate) fn record_display_name(
        &mut self,
        name: impl Into<String>,
        display: impl Into<String>,
    ) {
        self.display_names.insert(name.into(), display.into());
    }

    pub fn pending_requires(&self) -> &[Node] {
        &self.pending_requires
    }

    pub(crate) fn queue_require(&mut self, param: Node) {
        self.pending_requires.push(param);
    }

    /// Empties the queue of parameters awaiting a guard, returning them in queue order.
    pub(crate) fn drain_requires(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.pending_requires)
    }
}
