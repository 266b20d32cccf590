//! CLI command implementations.

mod display;

pub mod languages;
pub mod locate;
pub mod range;
pub mod tree;
