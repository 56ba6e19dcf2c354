//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().args(["-n", "-l", "go", "o/n"]).assert().success();
//! }
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Templates rooted in the fake home directory.
    pub const CUSTOM_TEMPLATES: &str = r#"
defaultHost: gitlab.com
defaultSchemes:
  default: "ssh://"
pathTemplates:
  rust: "~/rust/{owner}/{name}"
  default: "~/code/{host}/{owner}/{name}"
"#;

    /// A configuration in the JSON format of earlier versions.
    pub const LEGACY_JSON: &str = r#"{
  "defaultHost": "github.com",
  "pathTemplates": {
    "go": "~/go/src/${host}/${owner}/${repo}",
    "default": "~/legacy/${host}/${owner}/${repo}"
  },
  "defaultProtocals": {"github.com": "git@", "default": "https://"}
}"#;

    /// An empty scheme for GitHub, which falls through to the default entry.
    pub const EMPTY_SCHEME: &str = r#"
defaultSchemes:
  github.com: ""
  default: "ssh://"
"#;

    /// A template with a syntax error.
    pub const INVALID_TEMPLATE: &str = r#"
pathTemplates:
  default: "~/src/{host"
"#;

    /// A template referencing a field repositories do not have.
    pub const UNKNOWN_FIELD: &str = r#"
pathTemplates:
  default: "~/src/{branch}"
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "pathTemplates: [unclosed";
}

/// A temporary directory standing in for the user's home directory.
pub struct TestFixture {
    home: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with an empty home directory.
    pub fn new() -> Self {
        Self {
            home: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `clone.yaml` into the home directory.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.home
            .child("clone.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Get the path to the fake home directory.
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("clone.yaml")
    }

    /// A path under the fake home directory, as printed by the binary.
    pub fn expected_path(&self, relative: &str) -> String {
        format!("{}/{}\n", self.home.path().display(), relative)
    }

    /// The `clone` binary with HOME pointing at the fixture and no ambient
    /// configuration or log filter.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("clone");
        cmd.current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env_remove("CLONE_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
