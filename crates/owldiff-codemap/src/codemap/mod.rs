//! Code mapping: group target-model entities by their comparison code.

pub mod build;
pub mod mapper;
pub mod types;

pub use build::*;
pub use mapper::*;
pub use types::*;
