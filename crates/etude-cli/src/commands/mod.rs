//! CLI command implementations.

pub mod feed;
pub mod skip;
