use super::Extension;
use crate::{build_config::BuildConfig, type_system::TypeInfo};
use indexmap::IndexMap;

/// The name-to-type scope of one source unit together with its [Extension].
///
/// A fresh environment is created for every unit; nothing carries over between units.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scope: IndexMap<String, TypeInfo>,
    ext: Extension,
}

impl Environment {
    /// An environment whose scope starts out with the configured prelude.
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            scope: config.prelude().clone(),
            ext: Extension::default(),
        }
    }

    /// Binds `name`, shadowing any earlier binding of the same name.
    pub fn add_name(&mut self, name: impl Into<String>, ty: TypeInfo) {
        self.scope.insert(name.into(), ty);
    }

    pub fn infer_name(&self, name: &str) -> Option<TypeInfo> {
        self.scope.get(name).cloned()
    }

    pub fn ext(&self) -> &Extension {
        &self.ext
    }

    pub fn ext_mut(&mut self) -> &mut Extension {
        &mut self.ext
    }

    /// Drops all state accumulated for the previous unit. Called on entry to every `Source` node.
    pub fn reset_extension(&mut self) {
        self.ext = Extension::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_bindings_shadow() {
        let mut env = Environment::default();
        env.add_name("x", TypeInfo::int256());
        env.add_name("x", TypeInfo::address());
        assert_eq!(env.infer_name("x"), Some(TypeInfo::address()));
        assert_eq!(env.infer_name("y"), None);
    }

    #[test]
    fn starts_from_prelude() {
        let config = BuildConfig::default().with_prelude_name("owner", TypeInfo::address());
        let env = Environment::from_config(&config);
        assert_eq!(env.infer_name("owner"), Some(TypeInfo::address()));
    }
}
