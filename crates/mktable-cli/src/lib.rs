mod args;
mod commands;
pub mod config;
mod handlers;
pub mod input;
mod logging;
pub mod types;

pub use args::{Cli, Commands, InputArgs, StyleArgs};
pub use commands::run;
