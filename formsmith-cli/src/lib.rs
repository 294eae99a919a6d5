//! Command modules for the formsmith CLI.

pub mod check;
pub mod cli;
pub mod normalize;
pub mod preview;

pub use cli::{Cli, Commands};
