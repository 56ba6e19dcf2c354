//! # Repository Identifiers
//!
//! This module turns a free-form repository identifier into a structured
//! [`Repository`]. Three input shapes are understood:
//!
//! - **SSH shorthand**: `git@github.com:microhod/clone`
//! - **Scheme-prefixed URL**: `https://github.com/microhod/clone`
//! - **Bare path**: `github.com/microhod/clone` or `microhod/clone`
//!
//! Parsing happens in two steps:
//!
//! 1. [`parse_identifier`] segments the raw string. It only requires a
//!    non-empty owner and name; host and scheme may be missing.
//! 2. [`RepositoryParser::fill_defaults`] fills a missing host and scheme from
//!    configured defaults and derives the canonical clone URL.
//!
//! [`RepositoryParser::parse`] runs both steps.

use crate::defaults::{DEFAULT_KEY, FALLBACK_SCHEME};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The protocol marker at the front of a repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// SSH shorthand (`git@`), holding the user name.
    Ssh(String),
    /// A `word://` prefix, holding the word.
    Protocol(String),
}

impl Scheme {
    /// Returns the SSH user, if this is an SSH shorthand marker.
    pub fn user(&self) -> Option<&str> {
        match self {
            Scheme::Ssh(user) => Some(user),
            Scheme::Protocol(_) => None,
        }
    }

    pub fn is_ssh(&self) -> bool {
        matches!(self, Scheme::Ssh(_))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Ssh(user) => write!(f, "{}@", user),
            Scheme::Protocol(word) => write!(f, "{}://", word),
        }
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Parses a configured marker such as `git@` or `https://`.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(user) = s.strip_suffix('@') {
            if is_ssh_user(user) {
                return Ok(Scheme::Ssh(user.to_string()));
            }
        }
        if let Some(word) = s.strip_suffix("://") {
            if !word.is_empty() && !word.contains(&[':', '/'][..]) {
                return Ok(Scheme::Protocol(word.to_string()));
            }
        }
        Err(Error::Config {
            message: format!("invalid scheme marker '{}'", s),
            hint: Some(
                "use an SSH marker such as 'git@' or a prefix such as 'https://'".to_string(),
            ),
        })
    }
}

fn is_ssh_user(user: &str) -> bool {
    !user.is_empty()
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// A parsed repository identifier.
///
/// Fields are read-only: `url` is derived from the others and recomputed
/// whenever they change, so it can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    raw: String,
    scheme: Option<Scheme>,
    host: String,
    owner: String,
    name: String,
    url: String,
}

impl Repository {
    /// Builds a repository from its parts. Owner and name must be non-empty.
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let (host, owner, name) = (host.into(), owner.into(), name.into());
        let raw = if host.is_empty() {
            format!("{}/{}", owner, name)
        } else {
            format!("{}/{}/{}", host, owner, name)
        };
        Self::from_parts(raw, None, host, owner, name)
    }

    /// Returns a copy with the scheme replaced.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self.update_url();
        self
    }

    fn from_parts(
        raw: String,
        scheme: Option<Scheme>,
        host: String,
        owner: String,
        name: String,
    ) -> Result<Self> {
        if owner.is_empty() || name.is_empty() {
            return Err(Error::Parse { input: raw });
        }
        let mut repo = Repository {
            raw,
            scheme,
            host,
            owner,
            name,
            url: String::new(),
        };
        repo.update_url();
        Ok(repo)
    }

    /// The identifier exactly as the user supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_ref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The SSH user, or an empty string for non-SSH schemes.
    pub fn user(&self) -> &str {
        self.scheme.as_ref().and_then(Scheme::user).unwrap_or("")
    }

    /// The canonical clone URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Looks up a field by name for template substitution.
    ///
    /// Names are matched case-insensitively. `repo` is accepted as an alias
    /// of `name`. Returns `None` for anything else.
    pub fn field(&self, field: &str) -> Option<String> {
        let value = match field.to_ascii_lowercase().as_str() {
            "url" => self.url.clone(),
            "scheme" => self
                .scheme
                .as_ref()
                .map(Scheme::to_string)
                .unwrap_or_default(),
            "user" => self.user().to_string(),
            "host" => self.host.clone(),
            "owner" => self.owner.clone(),
            "name" | "repo" => self.name.clone(),
            _ => return None,
        };
        Some(value)
    }

    fn update_url(&mut self) {
        let scheme = self
            .scheme
            .as_ref()
            .map(Scheme::to_string)
            .unwrap_or_default();
        self.url = if self.scheme.as_ref().is_some_and(Scheme::is_ssh) {
            format!("{}{}:{}/{}", scheme, self.host, self.owner, self.name)
        } else {
            format!("{}{}/{}/{}", scheme, self.host, self.owner, self.name)
        };
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Segments a raw identifier without applying any defaults.
///
/// Fails with [`Error::Parse`] unless both an owner and a name are found.
/// Segments beyond the third are ignored.
pub fn parse_identifier(raw: &str) -> Result<Repository> {
    let (scheme, rest) = match split_ssh_user(raw) {
        // scp-like syntax: the first colon separates host from path
        Some((user, rest)) => (Some(Scheme::Ssh(user.to_string())), rest.replacen(':', "/", 1)),
        None => match raw.split_once("://") {
            Some((word, rest)) => (Some(Scheme::Protocol(word.to_string())), rest.to_string()),
            None => (None, raw.to_string()),
        },
    };

    let segments: Vec<&str> = rest.split('/').collect();
    let (host, owner, name) = match segments.as_slice() {
        [host, owner, name, ..] => (*host, *owner, *name),
        [owner, name] => ("", *owner, *name),
        [name] => ("", "", *name),
        [] => ("", "", ""),
    };

    Repository::from_parts(
        raw.to_string(),
        scheme,
        host.to_string(),
        owner.to_string(),
        name.to_string(),
    )
}

fn split_ssh_user(raw: &str) -> Option<(&str, &str)> {
    let (user, rest) = raw.split_once('@')?;
    is_ssh_user(user).then_some((user, rest))
}

/// Parses identifiers and fills in configured defaults.
#[derive(Debug, Clone)]
pub struct RepositoryParser {
    default_host: String,
    default_schemes: HashMap<String, Scheme>,
}

impl RepositoryParser {
    /// `default_schemes` is keyed by host, with [`DEFAULT_KEY`] as the
    /// catch-all entry.
    pub fn new(default_host: impl Into<String>, default_schemes: HashMap<String, Scheme>) -> Self {
        Self {
            default_host: default_host.into(),
            default_schemes,
        }
    }

    /// Parses `raw` and fills in any missing host and scheme.
    pub fn parse(&self, raw: &str) -> Result<Repository> {
        let repo = self.fill_defaults(parse_identifier(raw)?);
        log::debug!("Parsed '{}' as {}", raw, repo.url());
        Ok(repo)
    }

    /// Fills an empty host and a missing scheme, then recomputes the URL.
    ///
    /// Values that are already present are never overwritten, so applying
    /// this twice gives the same result as applying it once.
    pub fn fill_defaults(&self, mut repo: Repository) -> Repository {
        if repo.host.is_empty() {
            repo.host = self.default_host.clone();
        }
        if repo.scheme.is_none() {
            let scheme = self
                .default_schemes
                .get(&repo.host)
                .or_else(|| self.default_schemes.get(DEFAULT_KEY))
                .cloned()
                .unwrap_or_else(|| Scheme::Protocol(FALLBACK_SCHEME.to_string()));
            repo.scheme = Some(scheme);
        }
        repo.update_url();
        repo
    }
}
