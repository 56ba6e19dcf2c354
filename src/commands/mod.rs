//! # CLI Command Implementations
//!
//! `clone` has a single command. It lives in its own module, following the
//! usual layout:
//! - An `Args` struct that defines the command's arguments and options,
//!   derived using `clap`.
//! - An `execute` function that wires in the real collaborators and prints
//!   the result.
//! - A `run` function holding the logic, with the collaborators injected so
//!   tests can replace them.

pub mod clone;
