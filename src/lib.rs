//! # repoclone
//!
//! This library turns a repository identifier such as `microhod/clone` or
//! `git@github.com:microhod/clone` into a clone URL and a destination
//! directory. It backs the `clone` command-line tool but has no dependency on
//! the CLI.
//!
//! ## Quick Example
//!
//! ```
//! use repoclone::config::Config;
//!
//! let config = Config::default();
//! let parser = config.repository_parser().unwrap();
//! let resolver = config.path_resolver().unwrap();
//!
//! let repo = parser.parse("microhod/clone").unwrap();
//! assert_eq!(repo.url(), "git@github.com:microhod/clone");
//!
//! let path = resolver.resolve("go", &repo).unwrap();
//! assert!(path.ends_with("/go/src/github.com/microhod/clone"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Repositories (`repository`)**: Parses identifiers into a `Repository`
//!   and fills in the default host and scheme.
//! - **Path templates (`template`, `path`)**: Compiles language-keyed path
//!   templates once and resolves a repository into a destination path, with
//!   `language → default → built-in` fallback and `~` expansion.
//! - **Configuration (`config`, `defaults`)**: Loads the optional
//!   configuration file, falling back to built-in defaults.
//! - **Collaborators (`language`, `git`)**: Looks up a repository's main
//!   language on GitHub and runs `git clone`.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod language;
pub mod path;
pub mod repository;
pub mod template;

#[cfg(test)]
mod repository_proptest;
