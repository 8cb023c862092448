/*!
# Nebula GL Headless Context

A GPU-free [`DrawingContext`](nebula_gl::context::DrawingContext) backend.

Shader "compilation" is a declaration scan over GLSL-like source: `uniform`
and `attribute`/`in` declarations become the program's variable set, and a
variable is *active* only if its name is referenced beyond its declaration,
mirroring how real drivers optimize unused variables out. Every context call
is journaled as a [`CallRecord`], so tests can assert exact call sequences
and inspect uploaded data and uniform state.

Pairs with [`FixedFrameScheduler`] for deterministic frame-loop tests.
*/

mod glsl_scan;
mod headless_context;
mod scheduler;

pub use headless_context::{CallRecord, HeadlessContext};
pub use scheduler::FixedFrameScheduler;
