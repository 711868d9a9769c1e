//! Shared pieces of the tonecurve command line tool
//!
//! Argument definitions and the transform command live here so they can be
//! tested without spawning the binary.

pub mod args;
pub mod commands;

pub use args::{arg_error_message, exit_code_for, parse_args, Cli, USAGE};
pub use commands::{cmd_transform, configure_thread_pool, init_logging};
