//! # Configuration
//!
//! The configuration file supplies three settings:
//!
//! ```yaml
//! defaultHost: github.com
//! defaultSchemes:
//!   github.com: "git@"
//!   default: "https://"
//! pathTemplates:
//!   go: "~/go/src/{host}/{owner}/{name}"
//!   default: "~/src/{host}/{owner}/{name}"
//! ```
//!
//! Files are parsed as YAML, which also accepts the JSON files written for
//! earlier versions of the tool (including their `defaultProtocals` key).
//! Keys that are left out take their built-in value from [`crate::defaults`].
//!
//! Configuration is optional. [`load`] never fails: a missing or broken file
//! is reported as a warning and the built-in defaults are used instead.

use crate::defaults::{default_path_templates, default_schemes, DEFAULT_HOST};
use crate::error::{Error, Result};
use crate::path::PathResolver;
use crate::repository::{RepositoryParser, Scheme};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Settings for identifier defaults and path templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Host used when an identifier does not name one.
    pub default_host: String,
    /// Scheme marker per host, with a `default` catch-all entry.
    #[serde(alias = "defaultProtocals")]
    pub default_schemes: HashMap<String, String>,
    /// Path template per language, with a `default` catch-all entry.
    pub path_templates: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_host: DEFAULT_HOST.to_string(),
            default_schemes: default_schemes(),
            path_templates: default_path_templates(),
        }
    }
}

impl Config {
    /// Builds an identifier parser from the host and scheme defaults.
    ///
    /// Empty scheme values are skipped so lookups fall through to the next
    /// entry. Fails if any other scheme is not a recognizable marker.
    pub fn repository_parser(&self) -> Result<RepositoryParser> {
        let schemes = self
            .default_schemes
            .iter()
            .filter(|(_, scheme)| !scheme.is_empty())
            .map(|(host, scheme)| Ok((host.clone(), scheme.parse::<Scheme>()?)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(RepositoryParser::new(self.default_host.clone(), schemes))
    }

    /// Compiles the path templates.
    pub fn path_resolver(&self) -> Result<PathResolver> {
        PathResolver::new(&self.path_templates)
    }
}

/// Parse a configuration from a YAML (or JSON) string.
///
/// An empty document yields the defaults.
pub fn parse(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        hint: Some("expected the keys defaultHost, defaultSchemes and pathTemplates".to_string()),
    })
}

/// Parse a configuration from a file.
pub fn from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("could not read '{}': {}", path.display(), e),
        hint: None,
    })?;
    parse(&content)
}

/// Loads the configuration at `path`, falling back to the built-in defaults.
pub fn load(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        log::debug!("No configuration file given, using built-in defaults");
        return Config::default();
    };

    match from_file(path) {
        Ok(config) => {
            log::debug!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{}; using built-in defaults", e);
            Config::default()
        }
    }
}
