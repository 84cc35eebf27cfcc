//! Configuration files of the command-line tools.

pub mod batch;

pub use batch::{load_config, BatchConfig, BatchOutputConfig, QuadEntry};
