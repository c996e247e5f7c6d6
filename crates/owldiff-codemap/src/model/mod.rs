//! Model types and the accessor contract consumed by the code index.

pub mod memory;
pub mod types;
pub mod view;

pub use memory::*;
pub use types::*;
pub use view::*;
