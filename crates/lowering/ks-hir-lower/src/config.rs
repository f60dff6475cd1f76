//! Lowering configuration

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when two macros share a name in the crate macro table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MacroConflictPolicy {
    /// Fail with [`crate::LowerError::MacroConflict`]
    #[default]
    Reject,
    /// Keep the definition inserted first (local declarations win)
    KeepFirst,
    /// Keep the definition inserted last (imports win)
    KeepLast,
}

/// Options for [`crate::lower_crate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LowerConfig {
    /// Crate-root marker for canonical paths; empty for the local crate
    pub crate_name: String,
    /// Macro table collision policy
    pub macro_conflicts: MacroConflictPolicy,
}

/// Configuration loading error
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    /// Malformed TOML or unknown values
    #[error("invalid lowering configuration: {0}")]
    #[diagnostic(code(lower::config))]
    Parse(#[from] toml::de::Error),
}

impl LowerConfig {
    /// Parse from TOML; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builder-style setter for the crate name
    #[must_use]
    pub fn with_crate_name(mut self, crate_name: impl Into<String>) -> Self {
        self.crate_name = crate_name.into();
        self
    }

    /// Builder-style setter for the macro policy
    #[must_use]
    pub fn with_macro_conflicts(mut self, policy: MacroConflictPolicy) -> Self {
        self.macro_conflicts = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LowerConfig::from_toml_str("").unwrap();
        assert_eq!(config, LowerConfig::default());
        assert_eq!(config.crate_name, "");
        assert_eq!(config.macro_conflicts, MacroConflictPolicy::Reject);
    }

    #[test]
    fn test_kebab_case_keys() {
        let config = LowerConfig::from_toml_str(
            r#"
crate-name = "demo"
macro-conflicts = "keep-last"
"#,
        )
        .unwrap();
        assert_eq!(config.crate_name, "demo");
        assert_eq!(config.macro_conflicts, MacroConflictPolicy::KeepLast);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let err = LowerConfig::from_toml_str(r#"macro-conflicts = "merge""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid lowering configuration"));
    }
}
