use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use strum::EnumString;

macro_rules! define_tags {
    ($($(#[$meta:meta])* $variant:ident),* $(,)?) => {
        /// The tag of a [Node](crate::language::Node), selecting the rule that processes it.
        ///
        /// The known vocabulary is closed so that dispatch is an exhaustive `match`. Tags the
        /// front end produces outside of it land in [Tag::Other] and are only processed when an
        /// extension rule has been registered for them.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, SerializeDisplay, DeserializeFromStr)]
        pub enum Tag {
            $($(#[$meta])* $variant,)*
            #[strum(default)]
            Other(String),
        }

        impl Tag {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Tag::$variant => stringify!($variant),)*
                    Tag::Other(name) => name,
                }
            }
        }
    };
}

define_tags! {
    Source,
    Block,
    Title,
    Import,
    NoImport,
    ImportDecl,
    VariableDecl,
    ImportPair,
    VPair,
    Pair,
    FunctionDecl,
    FunctionName,
    FunctionParam,
    /// Synthesized: the true parameters of a function declaration.
    FDParam,
    FDPair,
    /// Synthesized: every non-parameter statement of a function declaration.
    FDBody,
    Assign,
    Return,
    RecordStatement,
    CompleteStatement,
    EventStatement,
    EventDecl,
    Map1,
    Map2,
    Raw,
    StructDefine,
    EnumType,
    EnumDefine,
    EnumElement,
    IntExpr,
    WordDefine,
    AssumeDecls,
    AssumeDecl,
    Require,
    Infix,
    NameExpr,
    Text,
    /// Synthesized: declarations hoisted to the end of a source unit.
    TypeDecls,
    ReturnType,
    NotConstructor,
    ViewType,
    MemoryType,
}

impl Default for Tag {
    fn default() -> Self {
        Tag::Other(String::new())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_open_tags() {
        assert_eq!("FunctionDecl".parse::<Tag>().unwrap(), Tag::FunctionDecl);
        assert_eq!(
            "WhileStatement".parse::<Tag>().unwrap(),
            Tag::Other("WhileStatement".into())
        );
        assert_eq!(Tag::FDBody.to_string(), "FDBody");
        assert_eq!(Tag::Other("Foo".into()).as_str(), "Foo");
    }
}
