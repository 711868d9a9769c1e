//! Command implementations for the tonecurve CLI.

mod transform;

pub use transform::{cmd_transform, configure_thread_pool, init_logging};
