/*!
# Nebula GL

A minimal reflective renderer over a GL-style drawing context.

This crate turns two shader source strings into a linked program, discovers
every active uniform and attribute the program exposes, and synthesizes a
correctly typed setter for each one. The GPU itself stays behind the
[`DrawingContext`](context::DrawingContext) trait; backends (a real GL
context, the headless recording context, etc.) provide concrete
implementations.

## Architecture

- **DrawingContext**: trait modeling a browser-style 3D graphics API
- **Renderer**: facade composing compile → link → reflect → activate
- **UniformSetter / AttributeSetter**: per-variable typed write values
- **FrameScheduler / run_loop**: cancellable per-display-frame callback loop
- **Logger**: injected structured diagnostic sink
*/

// Internal modules
mod error;
pub mod context;
pub mod log;
pub mod renderer;


// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Drawing-context sub-module
    pub mod context {
        pub use crate::context::*;
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }
}

// Flat re-exports for the common path
pub use crate::error::{Error, Result};

// Re-export math library at crate root
pub use glam;
