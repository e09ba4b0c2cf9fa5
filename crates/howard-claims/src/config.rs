//! Configuration for the claims factory

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClaimsError, Result};

/// What to do when two source functions map to the same claim name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// The later registration replaces the earlier one
    Replace,
    /// Building the registry fails
    Reject,
}

/// Configuration for building a claims registry
///
/// # Examples
///
/// ```
/// use howard_claims::{ClaimsConfig, CollisionPolicy};
///
/// let config = ClaimsConfig::default();
/// assert_eq!(config.on_collision, CollisionPolicy::Replace);
///
/// let config = ClaimsConfig::strict();
/// assert_eq!(config.on_collision, CollisionPolicy::Reject);
/// ```
///
/// Loaded from TOML:
///
/// ```toml
/// [claims]
/// on_collision = "reject"
/// allow_empty_names = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimsConfig {
    /// Policy for claim-name collisions
    /// Default: replace (later wins)
    pub on_collision: CollisionPolicy,

    /// Accept empty source function names
    /// Default: false
    pub allow_empty_names: bool,
}

impl Default for ClaimsConfig {
    fn default() -> Self {
        Self {
            on_collision: CollisionPolicy::Replace,
            allow_empty_names: false,
        }
    }
}

/// On-disk layout: settings live under a `[claims]` table
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    claims: ClaimsConfig,
}

impl ClaimsConfig {
    /// Create a strict configuration (collisions are errors)
    pub fn strict() -> Self {
        Self {
            on_collision: CollisionPolicy::Reject,
            allow_empty_names: false,
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.claims)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Render configuration as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        let file = ConfigFile {
            claims: self.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| ClaimsError::Config(format!("Failed to serialize config: {}", e)))
    }
}
