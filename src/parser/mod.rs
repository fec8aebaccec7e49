pub mod clause_bounds;
pub use clause_bounds::*;

pub mod clause_error;
pub use clause_error::*;

pub mod list_splitter;
pub use list_splitter::*;

pub mod ast;
