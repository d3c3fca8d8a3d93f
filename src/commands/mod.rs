//! # CLI Command Implementations
//!
//! Each subcommand of the `notesite` tool lives in its own file and
//! typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `notesite` library, and prints the result for a human reader.

pub mod build;
pub mod validate;
