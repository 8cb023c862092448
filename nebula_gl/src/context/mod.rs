/// Context module - the drawing-context interface and its vocabulary types

// Module declarations
pub mod context;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_context;
#[cfg(test)]
mod types_tests;

// Re-export everything from context.rs
pub use context::*;

// Re-export from types.rs
pub use types::*;
