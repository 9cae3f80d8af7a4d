use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    EntityDefinition, Error, GenerationOptions, OptionsConfig, Result, SourceContext,
    parse::{parse_json, parse_toml},
};

/// Module name used when the request leaves it blank.
pub const DEFAULT_MODULE_NAME: &str = "crud-module";

/// Base package used when the request leaves it blank.
pub const DEFAULT_BASE_PACKAGE: &str = "com.example.demo";

/// Root of a generation request.
///
/// ```toml
/// module_name = "library"
/// base_package = "com.acme.library"
///
/// [[entities]]
/// name = "Book"
///
/// [[entities.fields]]
/// name = "title"
/// type = "String"
/// required = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default, alias = "moduleName")]
    pub module_name: Option<String>,

    #[serde(default, alias = "basePackage")]
    pub base_package: Option<String>,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default, alias = "classes")]
    pub entities: Vec<EntityDefinition>,
}

impl FromStr for GenerationRequest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_toml(s, "crudkit.toml")
    }
}

impl GenerationRequest {
    /// Create an empty request with the given module name and base package.
    pub fn new(module_name: impl Into<String>, base_package: impl Into<String>) -> Self {
        Self {
            module_name: Some(module_name.into()),
            base_package: Some(base_package.into()),
            ..Self::default()
        }
    }

    /// Read a request from disk. Files ending in `.json` are parsed as
    /// JSON, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            parse_json(&content, &filename)
        } else {
            parse_toml(&content, &filename)
        }
    }

    /// Parse the JSON payload shape.
    pub fn from_json(s: &str) -> Result<Self> {
        parse_json(s, "request.json")
    }

    /// Module directory name: trimmed, lowercased, with every character
    /// outside `[a-z0-9_-]` replaced by `-`.
    pub fn sanitized_module_name(&self) -> String {
        let raw = self.module_name.as_deref().unwrap_or_default().trim();
        if raw.is_empty() {
            return DEFAULT_MODULE_NAME.to_string();
        }
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Base package, trimmed, falling back to [`DEFAULT_BASE_PACKAGE`].
    pub fn sanitized_base_package(&self) -> String {
        let raw = self.base_package.as_deref().unwrap_or_default().trim();
        if raw.is_empty() {
            DEFAULT_BASE_PACKAGE.to_string()
        } else {
            raw.to_string()
        }
    }

    /// Options with dependency-derived flags resolved.
    pub fn generation_options(&self) -> GenerationOptions {
        self.options.resolve()
    }

    /// Check the request after parsing.
    pub(crate) fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.entities.is_empty() {
            let span = find_key(ctx.src(), &["entities", "classes"]);
            let message = "generation request must define at least one entity";
            return Err(match span {
                Some(span) => ctx.validation_error_at(message, span),
                None => ctx.validation_error(message),
            });
        }
        Ok(())
    }
}

/// Locate the first occurrence of any of the given keys for error labels.
fn find_key(src: &str, keys: &[&str]) -> Option<(usize, usize)> {
    keys.iter()
        .filter_map(|key| src.find(key).map(|offset| (offset, key.len())))
        .min_by_key(|(offset, _)| *offset)
}
