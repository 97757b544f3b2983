//! Configurable yet non-changing constants for the compiler.

/// Primitive type names the pass assigns or compares against.
pub const VOID_TYPE_NAME: &str = "void";
pub const BOOL_TYPE_NAME: &str = "bool";
pub const STRING_TYPE_NAME: &str = "string";
pub const ADDRESS_TYPE_NAME: &str = "address";
pub const INT_TYPE_NAME: &str = "int";
pub const UINT_TYPE_NAME: &str = "uint";
pub const INT256_TYPE_NAME: &str = "int256";
pub const UINT256_TYPE_NAME: &str = "uint256";

/// How an unresolved type is written when a tree is serialized.
pub const UNKNOWN_TYPE_NAME: &str = "{unknown}";

/// Display name that marks a function declaration as the contract constructor.
pub const DEFAULT_CONSTRUCTOR_NAME: &str = "constructor";

/// Literal text used on the right-hand side of synthesized non-zero address guards.
pub const DEFAULT_ZERO_ADDRESS_LITERAL: &str = "address(0)";

/// Operator name used by synthesized guards, resolved like any other name expression.
pub const DEFAULT_GUARD_OPERATOR: &str = "NOT=";

/// Prefix of the names generated for anonymous enum types hoisted to the top level.
pub const DEFAULT_ENUM_NAME_PREFIX: &str = "Enum";

/// Prefix of encoded import symbol names.
pub const IMPORT_NAME_PREFIX: &str = "v_";

/// Context labels the pass attaches to synthesized nodes.
pub const CONTEXT_USER: &str = "user";
pub const CONTEXT_PARAM: &str = "param";
pub const CONTEXT_BODY: &str = "body";
pub const CONTEXT_NAME: &str = "name";
pub const CONTEXT_DATA: &str = "data";
pub const CONTEXT_RETURNS: &str = "returns";
pub const CONTEXT_NOT_CONSTRUCTOR: &str = "nconst";
pub const CONTEXT_VIEW: &str = "view";
pub const CONTEXT_MEMORY: &str = "memory";
pub const CONTEXT_IMPORT_FNAME: &str = "fname";
pub const CONTEXT_IMPORT_SNAME: &str = "sname";
pub const CONTEXT_IMPORT_ADDRESS: &str = "address";
