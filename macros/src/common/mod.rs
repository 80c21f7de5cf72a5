// Common utilities shared by the derive macros
//
// This module contains:
// - attrs: `#[cursor(...)]` argument parsing
// - tags: capability tag name resolution

mod attrs;
mod tags;

pub use attrs::*;
pub use tags::*;
