use crate::type_system::TypeInfo;
use indexmap::IndexMap;
use origami_types::constants::{
    DEFAULT_CONSTRUCTOR_NAME, DEFAULT_ENUM_NAME_PREFIX, DEFAULT_GUARD_OPERATOR,
    DEFAULT_ZERO_ADDRESS_LITERAL,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read pass configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse pass configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the semantic pass.
///
/// Every field has a default, so an empty TOML document is a valid configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Display name that marks a function declaration as the constructor.
    pub(crate) constructor_name: String,
    /// Right-hand side of every synthesized non-zero address guard.
    pub(crate) zero_address_literal: String,
    /// Operator name of every synthesized guard.
    pub(crate) guard_operator: String,
    /// Prefix of the names generated for hoisted anonymous enums.
    pub(crate) enum_name_prefix: String,
    /// When false, address parameters are not queued for guards.
    pub(crate) synthesize_guards: bool,
    /// Names bound in every fresh environment before a unit is processed.
    pub(crate) prelude: IndexMap<String, TypeInfo>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            constructor_name: DEFAULT_CONSTRUCTOR_NAME.to_string(),
            zero_address_literal: DEFAULT_ZERO_ADDRESS_LITERAL.to_string(),
            guard_operator: DEFAULT_GUARD_OPERATOR.to_string(),
            enum_name_prefix: DEFAULT_ENUM_NAME_PREFIX.to_string(),
            synthesize_guards: true,
            prelude: IndexMap::new(),
        }
    }
}

impl BuildConfig {
    /// Given a path to a TOML pass configuration, read and parse it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse a configuration from TOML text. Unknown keys are reported and otherwise ignored.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_de = toml::de::Deserializer::new(contents);
        let config: Self = serde_ignored::deserialize(toml_de, |path| {
            tracing::warn!("unused pass configuration key: {path}");
        })?;
        Ok(config)
    }

    pub fn constructor_name(self, a: impl Into<String>) -> Self {
        Self {
            constructor_name: a.into(),
            ..self
        }
    }

    pub fn zero_address_literal(self, a: impl Into<String>) -> Self {
        Self {
            zero_address_literal: a.into(),
            ..self
        }
    }

    pub fn guard_operator(self, a: impl Into<String>) -> Self {
        Self {
            guard_operator: a.into(),
            ..self
        }
    }

    pub fn enum_name_prefix(self, a: impl Into<String>) -> Self {
        Self {
            enum_name_prefix: a.into(),
            ..self
        }
    }

    pub fn synthesize_guards(self, a: bool) -> Self {
        Self {
            synthesize_guards: a,
            ..self
        }
    }

    /// Adds a binding to the prelude every fresh environment starts from.
    pub fn with_prelude_name(mut self, name: impl Into<String>, ty: TypeInfo) -> Self {
        self.prelude.insert(name.into(), ty);
        self
    }

    pub fn prelude(&self) -> &IndexMap<String, TypeInfo> {
        &self.prelude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(BuildConfig::from_toml_str("").unwrap(), BuildConfig::default());
    }

    #[test]
    fn parses_settings_and_prelude() {
        let config = BuildConfig::from_toml_str(
            r#"
            constructor-name = "init"
            synthesize-guards = false

            [prelude]
            owner = "address"
            balanceOf = { params = ["address"], returns = "uint256" }
            "#,
        )
        .unwrap();
        assert_eq!(config.constructor_name, "init");
        assert!(!config.synthesize_guards);
        assert_eq!(config.zero_address_literal, DEFAULT_ZERO_ADDRESS_LITERAL);
        assert_eq!(config.prelude()["owner"], TypeInfo::address());
        assert_eq!(
            config.prelude()["balanceOf"],
            TypeInfo::function(vec![TypeInfo::address()], Some(TypeInfo::uint256()))
        );
    }

    #[test]
    fn reports_bad_toml() {
        let err = BuildConfig::from_toml_str("synthesize-guards = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enum-name-prefix = \"E\"").unwrap();
        let config = BuildConfig::from_file(file.path()).unwrap();
        assert_eq!(config.enum_name_prefix, "E");

        let missing = BuildConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
