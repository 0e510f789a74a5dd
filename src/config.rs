//! Projection configuration
//!
//! Loaded from YAML:
//!
//! ```yaml
//! base_uri: http://localhost:8080/rest
//! hash_segment: "#"
//! log_level: debug
//! namespaces:
//!   ex: http://example.org/vocab#
//! ```

use crate::rdf::NamespaceRegistry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Base IRI every resource identifier is minted under
    pub base_uri: String,

    /// Name of the reserved child holding fragment resources
    pub hash_segment: String,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Extra prefixes merged into the namespace registry
    pub namespaces: IndexMap<String, String>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            base_uri: "http://localhost:8080/rest".to_string(),
            hash_segment: "#".to_string(),
            log_level: "info".to_string(),
            namespaces: IndexMap::new(),
        }
    }
}

impl ProjectionConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        info!("Loaded projection config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let scheme_end = self.base_uri.find("://");
        if self.base_uri.is_empty() || scheme_end.map_or(true, |pos| pos == 0) {
            return Err(ConfigError::Invalid(format!(
                "base_uri must be an absolute IRI, got '{}'",
                self.base_uri
            )));
        }
        if self.hash_segment.is_empty() || self.hash_segment.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "hash_segment must be a single path segment, got '{}'",
                self.hash_segment
            )));
        }
        if let Some((prefix, _)) = self.namespaces.iter().find(|(p, iri)| p.is_empty() || iri.is_empty()) {
            return Err(ConfigError::Invalid(format!("empty namespace binding for '{}'", prefix)));
        }
        Ok(())
    }

    /// Standard registry extended with the configured prefixes
    pub fn namespace_registry(&self) -> NamespaceRegistry {
        let mut registry = NamespaceRegistry::new();
        for (prefix, iri) in &self.namespaces {
            registry.register(prefix.clone(), iri.clone());
        }
        registry
    }
}
