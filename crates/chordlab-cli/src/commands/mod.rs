//! CLI command implementations

pub mod generate;
pub mod pools;
pub mod random;

mod reporting;
