//! Default values for repoclone configuration.
//!
//! This module provides the built-in defaults used when no configuration file
//! is available, and the constants the fallback chains bottom out in.

use std::collections::HashMap;

/// Reserved key naming the catch-all entry in both the scheme and the
/// template maps.
pub const DEFAULT_KEY: &str = "default";

/// Host used when an identifier does not name one.
pub const DEFAULT_HOST: &str = "github.com";

/// Scheme word used when neither the host nor the `default` entry has one.
pub const FALLBACK_SCHEME: &str = "https";

/// Template used when neither the language nor the `default` entry has one.
pub const FALLBACK_TEMPLATE: &str = "~/src/{host}/{owner}/{name}";

/// Returns the built-in host → scheme mapping.
///
/// GitHub is cloned over SSH; everything else over HTTPS.
pub fn default_schemes() -> HashMap<String, String> {
    HashMap::from([
        (DEFAULT_HOST.to_string(), "git@".to_string()),
        (DEFAULT_KEY.to_string(), "https://".to_string()),
    ])
}

/// Returns the built-in language → path template mapping.
pub fn default_path_templates() -> HashMap<String, String> {
    HashMap::from([
        ("go".to_string(), "~/go/src/{host}/{owner}/{name}".to_string()),
        (DEFAULT_KEY.to_string(), FALLBACK_TEMPLATE.to_string()),
    ])
}
