//! Testing infrastructure for mktable integration tests.
//!
//! - `fixtures`: sample datasets with their expected renderings, and input
//!   files written to temporary directories
//! - `assertions`: structural checks on rendered tables

pub mod assertions;
pub mod fixtures;

pub use fixtures::{Dataset, InputFiles};
