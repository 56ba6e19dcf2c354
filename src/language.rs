//! Main-language lookup.
//!
//! The language of a repository picks its path template. Providers return an
//! empty string when they cannot tell, which makes path resolution use the
//! `default` template.

use crate::error::{Error, Result};
use crate::repository::Repository;
use std::collections::HashMap;
use std::time::Duration;

const GITHUB_HOST: &str = "github.com";
const GITHUB_API_URL: &str = "https://api.github.com/repos";

/// Something that can tell the dominant language of a repository.
pub trait LanguageProvider {
    /// Returns the lower-cased language name, or `""` if unknown.
    fn main_language(&self, repo: &Repository) -> Result<String>;
}

/// A provider that never knows the language.
pub struct NoLanguage;

impl LanguageProvider for NoLanguage {
    fn main_language(&self, _repo: &Repository) -> Result<String> {
        Ok(String::new())
    }
}

/// Looks up languages through the GitHub REST API.
///
/// Only repositories hosted on `github.com` are looked up; any other host
/// yields `""` without a request.
pub struct GithubLanguages {
    client: reqwest::blocking::Client,
}

impl GithubLanguages {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("repoclone/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Language {
                url: GITHUB_API_URL.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl LanguageProvider for GithubLanguages {
    fn main_language(&self, repo: &Repository) -> Result<String> {
        if repo.host() != GITHUB_HOST {
            return Ok(String::new());
        }

        let url = format!("{}/{}/{}/languages", GITHUB_API_URL, repo.owner(), repo.name());
        let error = |message: String| Error::Language {
            url: url.clone(),
            message,
        };

        log::debug!("Fetching languages from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| error(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(error(format!("HTTP {}", status)));
        }
        let body = response.text().map_err(|e| error(e.to_string()))?;
        let languages = parse_languages(&body).map_err(|e| error(e.to_string()))?;

        Ok(dominant_language(&languages))
    }
}

/// Parses a `/languages` response body: an object of language name to bytes.
pub fn parse_languages(body: &str) -> serde_json::Result<HashMap<String, u64>> {
    serde_json::from_str(body)
}

/// Picks the language with the most bytes, lower-cased.
///
/// Ties go to the alphabetically first name. Returns `""` when nothing has a
/// positive byte count.
pub fn dominant_language(languages: &HashMap<String, u64>) -> String {
    languages
        .iter()
        .filter(|(_, bytes)| **bytes > 0)
        .max_by(|(a_name, a_bytes), (b_name, b_bytes)| {
            a_bytes.cmp(b_bytes).then_with(|| b_name.cmp(a_name))
        })
        .map(|(name, _)| name.to_lowercase())
        .unwrap_or_default()
}
