//! Destination path resolution for repoclone
//!
//! [`PathResolver`] holds one compiled [`PathTemplate`] per language. A path is
//! resolved by picking a template with this fallback order:
//!
//! 1. the template for the (lower-cased) language
//! 2. the `default` template
//! 3. the built-in template, `~/src/{host}/{owner}/{name}`
//!
//! and then replacing a leading `~` with the current user's home directory.

use crate::defaults::{DEFAULT_KEY, FALLBACK_TEMPLATE};
use crate::error::{Error, Result};
use crate::repository::Repository;
use crate::template::PathTemplate;
use std::collections::HashMap;
use std::path::PathBuf;

/// An immutable registry of compiled path templates keyed by language.
#[derive(Debug, Clone)]
pub struct PathResolver {
    templates: HashMap<String, PathTemplate>,
    fallback: PathTemplate,
}

impl PathResolver {
    /// Compiles every template up front.
    ///
    /// The first template that fails to compile aborts construction. Keys are
    /// lower-cased, and two keys that only differ by case are rejected.
    pub fn new(templates: &HashMap<String, String>) -> Result<Self> {
        let mut compiled = HashMap::with_capacity(templates.len());
        for (language, template) in templates {
            let key = language.to_lowercase();
            if compiled.contains_key(&key) {
                return Err(Error::Config {
                    message: format!("path template for '{}' is defined more than once", key),
                    hint: Some("template keys are case-insensitive".to_string()),
                });
            }
            compiled.insert(key, PathTemplate::parse(template)?);
        }

        Ok(Self {
            templates: compiled,
            fallback: PathTemplate::parse(FALLBACK_TEMPLATE)?,
        })
    }

    /// Returns the template that would be used for `language`.
    pub fn template_for(&self, language: &str) -> &PathTemplate {
        self.templates
            .get(&language.to_lowercase())
            .or_else(|| self.templates.get(DEFAULT_KEY))
            .unwrap_or(&self.fallback)
    }

    /// Resolves the destination path for `repo`.
    pub fn resolve(&self, language: &str, repo: &Repository) -> Result<String> {
        let template = self.template_for(language);
        log::debug!(
            "Using path template '{}' for language '{}'",
            template.source(),
            language
        );
        let path = template.execute(language, repo)?;
        expand_home(path, dirs::home_dir)
    }
}

/// Replaces a single leading `~` with the home directory from `home_dir`.
///
/// `~` anywhere else in the path is left alone.
pub(crate) fn expand_home(
    path: String,
    home_dir: impl FnOnce() -> Option<PathBuf>,
) -> Result<String> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path);
    };

    let home = home_dir().ok_or_else(|| Error::HomeDirectory {
        message: "could not determine the current user's home directory".to_string(),
    })?;
    let home = home.to_str().ok_or_else(|| Error::HomeDirectory {
        message: format!("home directory '{}' is not valid UTF-8", home.display()),
    })?;

    Ok(format!("{}{}", home, rest))
}
