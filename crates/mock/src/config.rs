//! Mock backend configuration via `gantry-mock.toml`
//!
//! The only policy worth configuring is what happens when a caller creates
//! an entity under a name that is already taken. Both choices are
//! deterministic.

use gantry_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "gantry-mock.toml";

/// What a second `create_entity` with a taken name does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Refuse: the create returns an absent result
    #[default]
    Reject,

    /// Create a new, distinct entity; lookups by name return the newest
    Distinct,
}

impl DuplicatePolicy {
    /// Config spelling of this policy
    pub const fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Distinct => "distinct",
        }
    }
}

/// Mock backend configuration loaded from `gantry-mock.toml`.
///
/// # Example
///
/// ```toml
/// # Name reported in logs and by the engine
/// name = "mock"
///
/// # "reject" (default) or "distinct"
/// duplicate_names = "reject"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Backend name reported to the engine.
    #[serde(default = "default_name")]
    pub name: String,
    /// Duplicate-name policy: `"reject"` or `"distinct"`.
    #[serde(default = "default_duplicate_names")]
    pub duplicate_names: String,
}

fn default_name() -> String {
    "mock".to_string()
}

fn default_duplicate_names() -> String {
    DuplicatePolicy::Reject.as_str().to_string()
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            duplicate_names: default_duplicate_names(),
        }
    }
}

impl MockConfig {
    /// Default config with the given duplicate-name policy
    pub fn with_duplicate_policy(policy: DuplicatePolicy) -> Self {
        Self {
            duplicate_names: policy.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Parse the duplicate-name string into a [`DuplicatePolicy`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"reject"` or `"distinct"`.
    pub fn duplicate_policy(&self) -> Result<DuplicatePolicy> {
        match self.duplicate_names.as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "distinct" => Ok(DuplicatePolicy::Distinct),
            other => Err(Error::invalid_config(format!(
                "Invalid duplicate_names '{}' in {}. Expected \"reject\" or \"distinct\".",
                other, CONFIG_FILE_NAME
            ))),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Gantry mock backend configuration
#
# Name reported in logs and by the engine
name = "mock"

# What creating an entity under a taken name does:
#   "reject"   = the create returns no entity (default)
#   "distinct" = a new entity is created; lookups return the newest
duplicate_names = "reject"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or holds an unknown
    /// duplicate-name policy.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MockConfig = toml::from_str(content)?;
        // Validate the policy eagerly
        config.duplicate_policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| {
            Error::invalid_config(format!("Failed to load '{}': {}", path.display(), e))
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }
}
