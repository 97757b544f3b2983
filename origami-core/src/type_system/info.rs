use origami_types::constants::{
    ADDRESS_TYPE_NAME, BOOL_TYPE_NAME, INT256_TYPE_NAME, STRING_TYPE_NAME, UINT256_TYPE_NAME,
    UNKNOWN_TYPE_NAME, VOID_TYPE_NAME,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type information inferred for, or bound to, a node or name.
///
/// Types compare structurally. In configuration files a primitive is written as a bare string
/// (`"uint256"`) and a function type as a table with `params` and an optional `returns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TypeInfoRepr", into = "TypeInfoRepr")]
pub enum TypeInfo {
    /// Stands in for a part that could not be resolved, keeping arities intact.
    #[default]
    Unknown,
    /// A primitive or otherwise nominal type such as `int256`, `address` or `void`.
    Named(String),
    List(Vec<TypeInfo>),
    Function {
        params: Vec<TypeInfo>,
        returns: Option<Box<TypeInfo>>,
    },
    Struct {
        name: String,
        fields: Vec<TypeInfo>,
    },
}

/// Serialized form of [TypeInfo].
///
/// `Unknown` is written as the name `{unknown}`: an untagged unit variant would be written as
/// `null`, which reads back as an absent type. `List` precedes `Function` so that sequences
/// never deserialize as a function.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TypeInfoRepr {
    Named(String),
    List(Vec<TypeInfo>),
    Function {
        params: Vec<TypeInfo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        returns: Option<Box<TypeInfo>>,
    },
    Struct {
        name: String,
        fields: Vec<TypeInfo>,
    },
}

impl From<TypeInfoRepr> for TypeInfo {
    fn from(repr: TypeInfoRepr) -> Self {
        match repr {
            TypeInfoRepr::Named(name) if name == UNKNOWN_TYPE_NAME => TypeInfo::Unknown,
            TypeInfoRepr::Named(name) => TypeInfo::Named(name),
            TypeInfoRepr::List(items) => TypeInfo::List(items),
            TypeInfoRepr::Function { params, returns } => TypeInfo::Function { params, returns },
            TypeInfoRepr::Struct { name, fields } => TypeInfo::Struct { name, fields },
        }
    }
}

impl From<TypeInfo> for TypeInfoRepr {
    fn from(ty: TypeInfo) -> Self {
        match ty {
            TypeInfo::Unknown => TypeInfoRepr::Named(UNKNOWN_TYPE_NAME.to_string()),
            TypeInfo::Named(name) => TypeInfoRepr::Named(name),
            TypeInfo::List(items) => TypeInfoRepr::List(items),
            TypeInfo::Function { params, returns } => TypeInfoRepr::Function { params, returns },
            TypeInfo::Struct { name, fields } => TypeInfoRepr::Struct { name, fields },
        }
    }
}

impl TypeInfo {
    pub fn named(name: impl Into<String>) -> TypeInfo {
        TypeInfo::Named(name.into())
    }

    pub fn void() -> TypeInfo {
        TypeInfo::named(VOID_TYPE_NAME)
    }

    pub fn boolean() -> TypeInfo {
        TypeInfo::named(BOOL_TYPE_NAME)
    }

    pub fn int256() -> TypeInfo {
        TypeInfo::named(INT256_TYPE_NAME)
    }

    pub fn uint256() -> TypeInfo {
        TypeInfo::named(UINT256_TYPE_NAME)
    }

    pub fn address() -> TypeInfo {
        TypeInfo::named(ADDRESS_TYPE_NAME)
    }

    pub fn string() -> TypeInfo {
        TypeInfo::named(STRING_TYPE_NAME)
    }

    pub fn function(params: Vec<TypeInfo>, returns: Option<TypeInfo>) -> TypeInfo {
        TypeInfo::Function {
            params,
            returns: returns.map(Box::new),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, TypeInfo::Named(n) if n == name)
    }

    pub fn is_void(&self) -> bool {
        self.is_named(VOID_TYPE_NAME)
    }

    /// Splits a function type of exactly `arity` parameters into its parameters and return type.
    pub fn as_mapping(&self, arity: usize) -> Option<(&[TypeInfo], &TypeInfo)> {
        match self {
            TypeInfo::Function {
                params,
                returns: Some(returns),
            } if params.len() == arity => Some((params, returns)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, items: &[TypeInfo]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }
        match self {
            TypeInfo::Unknown => f.write_str(UNKNOWN_TYPE_NAME),
            TypeInfo::Named(name) => write!(f, "{name}"),
            TypeInfo::Function { params, returns } => {
                write!(f, "(")?;
                list(f, params)?;
                write!(f, ")")?;
                match returns {
                    Some(returns) => write!(f, " -> {returns}"),
                    None => Ok(()),
                }
            }
            TypeInfo::List(items) => {
                write!(f, "[")?;
                list(f, items)?;
                write!(f, "]")
            }
            TypeInfo::Struct { name, .. } => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_types_compare_by_value() {
        let a = TypeInfo::function(vec![TypeInfo::address()], Some(TypeInfo::boolean()));
        let b = TypeInfo::function(vec![TypeInfo::named("address")], Some(TypeInfo::boolean()));
        assert_eq!(a, b);
        assert_ne!(a, TypeInfo::function(vec![TypeInfo::address()], None));
    }

    #[test]
    fn mapping_destructures_by_arity() {
        let map = TypeInfo::function(
            vec![TypeInfo::address(), TypeInfo::address()],
            Some(TypeInfo::uint256()),
        );
        let (params, returns) = map.as_mapping(2).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(returns, &TypeInfo::uint256());
        assert!(map.as_mapping(1).is_none());
        assert!(TypeInfo::int256().as_mapping(1).is_none());
    }

    #[test]
    fn display() {
        let map = TypeInfo::function(vec![TypeInfo::address()], Some(TypeInfo::uint256()));
        assert_eq!(map.to_string(), "(address) -> uint256");
        assert_eq!(
            TypeInfo::List(vec![TypeInfo::int256(), TypeInfo::uint256()]).to_string(),
            "[int256, uint256]"
        );
        assert_eq!(TypeInfo::Unknown.to_string(), "{unknown}");
    }

    #[test]
    fn unknown_survives_json() {
        let ty = TypeInfo::function(
            vec![TypeInfo::Unknown, TypeInfo::List(vec![TypeInfo::address()])],
            Some(TypeInfo::Unknown),
        );
        let json = serde_json::to_string(&Some(ty.clone())).unwrap();
        assert!(!json.contains("null"), "{json}");
        let back: Option<TypeInfo> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Some(ty));
        assert_eq!(
            serde_json::from_str::<TypeInfo>("\"{unknown}\"").unwrap(),
            TypeInfo::Unknown
        );
    }
}
