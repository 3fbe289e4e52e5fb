//! tsscope_options: analysis options.
//!
//! Parses the JSON options object accepted by the analyzer and provides the
//! [`AnalyzeOptions`] structure. Field names follow the camelCase spelling
//! used by linter configurations (`globalScope`, `sourceType`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Options for one `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AnalyzeOptions {
    /// Preset seeding the global scope with ambient library bindings.
    pub global_scope: GlobalPreset,
    /// Whether the root scope is a script's global scope or a module scope.
    pub source_type: SourceType,
    /// Treat the whole file as strict code.
    pub implied_strict: bool,
    /// Wrap a script's top level in a function scope (CommonJS wrappers).
    pub global_return: bool,
    /// Extra presets merged into the global scope after `global_scope`.
    pub lib: Vec<GlobalPreset>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            global_scope: GlobalPreset::Es2022,
            source_type: SourceType::Script,
            implied_strict: false,
            global_return: false,
            lib: Vec::new(),
        }
    }
}

impl AnalyzeOptions {
    pub fn module() -> Self {
        Self {
            source_type: SourceType::Module,
            ..Self::default()
        }
    }

    pub fn with_global_scope(mut self, preset: GlobalPreset) -> Self {
        self.global_scope = preset;
        self
    }

    pub fn with_lib(mut self, preset: GlobalPreset) -> Self {
        self.lib.push(preset);
        self
    }

    /// Every preset to seed, `global_scope` first, without repeats.
    pub fn presets(&self) -> Vec<GlobalPreset> {
        let mut presets = vec![self.global_scope];
        for &preset in &self.lib {
            if !presets.contains(&preset) {
                presets.push(preset);
            }
        }
        presets
    }

    /// Modules are always strict.
    pub fn is_strict(&self) -> bool {
        self.implied_strict || self.source_type == SourceType::Module
    }
}

/// Source type of the analyzed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Script => "script",
            SourceType::Module => "module",
        }
    }
}

impl FromStr for SourceType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" => Ok(SourceType::Script),
            "module" => Ok(SourceType::Module),
            "commonjs" => Ok(SourceType::Script),
            _ => Err(OptionsError::UnknownSourceType(s.to_string())),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named sets of ambient library bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalPreset {
    None,
    Es5,
    Es2015,
    Es2020,
    Es2022,
    Browser,
    Node,
}

impl GlobalPreset {
    pub const ALL: [GlobalPreset; 7] = [
        GlobalPreset::None,
        GlobalPreset::Es5,
        GlobalPreset::Es2015,
        GlobalPreset::Es2020,
        GlobalPreset::Es2022,
        GlobalPreset::Browser,
        GlobalPreset::Node,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GlobalPreset::None => "none",
            GlobalPreset::Es5 => "es5",
            GlobalPreset::Es2015 => "es2015",
            GlobalPreset::Es2020 => "es2020",
            GlobalPreset::Es2022 => "es2022",
            GlobalPreset::Browser => "browser",
            GlobalPreset::Node => "node",
        }
    }
}

impl FromStr for GlobalPreset {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        GlobalPreset::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| OptionsError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for GlobalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown global scope preset '{0}'")]
    UnknownPreset(String),
    #[error("unknown source type '{0}'")]
    UnknownSourceType(String),
    #[error("invalid analyzer options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse analyzer options from a JSON string. Missing fields take their
/// defaults.
pub fn parse_options(content: &str) -> Result<AnalyzeOptions, OptionsError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse analyzer options from a JSON file.
pub fn parse_options_file(path: &str) -> Result<AnalyzeOptions, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_options(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = parse_options("{}").unwrap();
        assert_eq!(options, AnalyzeOptions::default());
        assert_eq!(options.global_scope, GlobalPreset::Es2022);
        assert_eq!(options.source_type, SourceType::Script);
        assert!(!options.is_strict());
    }

    #[test]
    fn test_camel_case_fields() {
        let options = parse_options(
            r#"{ "globalScope": "browser", "sourceType": "module", "impliedStrict": true, "lib": ["node"] }"#,
        )
        .unwrap();
        assert_eq!(options.global_scope, GlobalPreset::Browser);
        assert_eq!(options.source_type, SourceType::Module);
        assert!(options.implied_strict);
        assert_eq!(options.presets(), vec![GlobalPreset::Browser, GlobalPreset::Node]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_options(r#"{ "ecmaVersion": 2020 }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(parse_options(r#"{ "globalScope": "deno" }"#).is_err());
        assert!(matches!(
            "deno".parse::<GlobalPreset>(),
            Err(OptionsError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ES2015".parse::<GlobalPreset>().unwrap(), GlobalPreset::Es2015);
        assert_eq!("module".parse::<SourceType>().unwrap(), SourceType::Module);
        assert!("esm".parse::<SourceType>().is_err());
    }

    #[test]
    fn test_presets_deduplicated() {
        let options = AnalyzeOptions::default()
            .with_lib(GlobalPreset::Es2022)
            .with_lib(GlobalPreset::Node);
        assert_eq!(options.presets(), vec![GlobalPreset::Es2022, GlobalPreset::Node]);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_options_file("/nonexistent/tsscope.json").unwrap_err();
        assert!(matches!(err, OptionsError::Io { .. }));
    }
}
