use serde::Deserialize;

/// Persistence annotation namespace used by generated entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistenceApi {
    /// `javax.persistence`
    #[serde(alias = "javax")]
    Legacy,
    /// `jakarta.persistence`
    #[default]
    #[serde(alias = "jakarta")]
    Modern,
}

impl PersistenceApi {
    /// Package prefix of the persistence annotations.
    pub fn namespace(&self) -> &'static str {
        match self {
            PersistenceApi::Legacy => "javax.persistence",
            PersistenceApi::Modern => "jakarta.persistence",
        }
    }
}

impl std::str::FromStr for PersistenceApi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "javax" => Ok(PersistenceApi::Legacy),
            "modern" | "jakarta" => Ok(PersistenceApi::Modern),
            other => Err(format!(
                "unknown persistence api '{}', expected 'legacy' or 'modern'",
                other
            )),
        }
    }
}

/// The `[options]` table as written by the user.
///
/// Every flag is optional; unset flags are derived from `dependencies`
/// when the request is resolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsConfig {
    #[serde(default)]
    pub lombok: Option<bool>,

    #[serde(default)]
    pub persistence: Option<PersistenceApi>,

    #[serde(default)]
    pub views: Option<bool>,

    #[serde(default)]
    pub tests: Option<bool>,

    /// Dependency identifiers of the surrounding project
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl OptionsConfig {
    /// Resolve into concrete options. Explicit flags win over flags
    /// derived from dependency identifiers.
    pub fn resolve(&self) -> GenerationOptions {
        let derived = GenerationOptions::from_dependencies(&self.dependencies);
        GenerationOptions {
            lombok: self.lombok.unwrap_or(derived.lombok),
            persistence: self.persistence.unwrap_or(derived.persistence),
            views: self.views.unwrap_or(derived.views),
            tests: self.tests.unwrap_or(derived.tests),
        }
    }
}

/// Generation switches consumed by the emitters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Replace accessors and constructors with Lombok annotations
    pub lombok: bool,
    pub persistence: PersistenceApi,
    /// Emit server-rendered view templates and a view controller
    pub views: bool,
    /// Emit service and controller test classes
    pub tests: bool,
}

impl GenerationOptions {
    /// Derive options from the dependency identifiers of a project.
    ///
    /// `lombok` enables Lombok, `thymeleaf` enables views, `test` (or any
    /// identifier ending in `-test`) enables tests and `javax` selects the
    /// legacy persistence namespace. Identifiers are compared
    /// case-insensitively.
    pub fn from_dependencies<S: AsRef<str>>(dependencies: &[S]) -> Self {
        let mut options = Self::default();
        for dependency in dependencies {
            let id = dependency.as_ref().trim().to_ascii_lowercase();
            match id.as_str() {
                "lombok" => options.lombok = true,
                "thymeleaf" => options.views = true,
                "test" => options.tests = true,
                "javax" | "javax-persistence" => options.persistence = PersistenceApi::Legacy,
                other if other.ends_with("-test") => options.tests = true,
                _ => {}
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dependencies() {
        let options = GenerationOptions::from_dependencies(&["web", "Thymeleaf", "lombok"]);
        assert!(options.lombok);
        assert!(options.views);
        assert!(!options.tests);
        assert_eq!(options.persistence, PersistenceApi::Modern);

        let options = GenerationOptions::from_dependencies(&["javax-persistence"]);
        assert_eq!(options.persistence, PersistenceApi::Legacy);

        let options = GenerationOptions::from_dependencies(&["spring-boot-starter-test"]);
        assert!(options.tests);
    }

    #[test]
    fn test_explicit_flags_win() {
        let config = OptionsConfig {
            views: Some(false),
            tests: Some(true),
            dependencies: vec!["thymeleaf".into()],
            ..OptionsConfig::default()
        };
        let options = config.resolve();
        assert!(!options.views);
        assert!(options.tests);
        assert!(!options.lombok);
    }

    #[test]
    fn test_persistence_namespace() {
        assert_eq!(PersistenceApi::Legacy.namespace(), "javax.persistence");
        assert_eq!(PersistenceApi::Modern.namespace(), "jakarta.persistence");
        assert_eq!("jakarta".parse::<PersistenceApi>(), Ok(PersistenceApi::Modern));
        assert!("hibernate".parse::<PersistenceApi>().is_err());
    }
}
