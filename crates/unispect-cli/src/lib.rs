#![forbid(unsafe_code)]

//! Command-line front end for the `unispect` engine.
//!
//! The engine itself is a pure library; this crate supplies the consumer
//! role — argument parsing, input resolution (literal text, file, stdin,
//! or a built-in example), and output selection (export report, one-line
//! summary, or the JSON result model).

pub mod cli;
pub mod error;
pub mod examples;
pub mod logging;

pub use cli::run_from_env;
pub use error::{CliError, Result};
