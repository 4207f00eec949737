pub mod args;
pub mod commands;
pub mod completions;

pub use args::*;
pub use commands::*;
