//! Configuration file support for intact-curate.
//!
//! Loads `.intact-curate.toml` configuration files controlling the
//! ontology-derived settings of the short-label generator.
//!
//! # Example Configuration
//!
//! ```toml
//! [shortlabel]
//! mutation-term = "MI:0118"
//! ontology-depth = 10
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.intact-curate.toml` in current directory
//! 2. `~/.config/intact-curate/config.toml`

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Error loading or parsing a config file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
}

/// Parsed configuration from a .intact-curate.toml file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurateConfig {
    /// Ontology term identifier of the mutation root.
    pub mutation_root_term: String,
    /// Depth of the descendant traversal when resolving allowed feature
    /// types.
    pub ontology_depth: u32,
}

impl Default for CurateConfig {
    fn default() -> Self {
        Self {
            mutation_root_term: crate::ontology::MUTATION_MI_REF.to_string(),
            ontology_depth: 10,
        }
    }
}

impl CurateConfig {
    /// Load configuration from the default locations.
    ///
    /// Searches for config in:
    /// 1. `.intact-curate.toml` in current directory
    /// 2. `~/.config/intact-curate/config.toml`
    pub fn load() -> Option<Self> {
        let cwd_config = PathBuf::from(".intact-curate.toml");
        if cwd_config.exists() {
            if let Ok(config) = Self::load_from_path(&cwd_config) {
                return Some(config);
            }
        }

        if let Some(home) = dirs_home() {
            let home_config = home
                .join(".config")
                .join("intact-curate")
                .join("config.toml");
            if home_config.exists() {
                if let Ok(config) = Self::load_from_path(&home_config) {
                    return Some(config);
                }
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // Simple TOML parsing without external dependencies
        let mut config = CurateConfig::default();
        let mut in_shortlabel = false;

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            // Check for section headers
            if line.starts_with('[') && line.ends_with(']') {
                let section = &line[1..line.len() - 1];
                in_shortlabel = section == "shortlabel";
                continue;
            }

            if !in_shortlabel {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                match key {
                    "mutation-term" => {
                        let term = value.trim_matches('"').trim_matches('\'');
                        config.mutation_root_term = term.to_string();
                    }
                    "ontology-depth" => {
                        config.ontology_depth = value.parse().map_err(|_| {
                            ConfigError::Parse(format!("invalid ontology-depth: {}", value))
                        })?;
                    }
                    _ => {}
                }
            }
        }

        Ok(config)
    }
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
