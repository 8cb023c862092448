/// Renderer module - compilation, reflection, setters, facade, frame loop

// Module declarations
pub mod frame_loop;
pub mod reflection;
pub mod renderer;
pub mod shader;
pub mod variable;

#[cfg(test)]
mod variable_tests;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use frame_loop::*;
pub use reflection::*;
pub use variable::*;
