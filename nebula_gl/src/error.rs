//! Error types for Nebula GL
//!
//! Compile and link failures carry the host driver's diagnostic log verbatim;
//! reflection failures name the offending variable. All variants are
//! recoverable values, never panics.

use std::fmt;

use crate::context::{GlType, ShaderStage};
use crate::renderer::UniformKind;

/// Result type for Nebula GL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula GL errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Shader source rejected by the host compiler (driver log attached)
    CompileFailed {
        /// Stage whose source failed to compile
        stage: ShaderStage,
        /// Driver diagnostic log
        log: String,
    },

    /// Two valid stages failed to link (driver log attached)
    LinkFailed(String),

    /// A reflected uniform's type has no registered setter kind
    UnsupportedUniformType {
        /// Name of the uniform as reported by the program
        name: String,
        /// Its declared GPU type
        ty: GlType,
    },

    /// A setter was called with a value of the wrong shape
    UniformTypeMismatch {
        /// Name of the uniform
        name: String,
        /// Kind the setter was synthesized for
        expected: UniformKind,
        /// Kind of the value actually passed
        got: UniformKind,
    },

    /// No active variable with the given name exists on the program
    UnknownVariable(String),

    /// The drawing context reported inconsistent reflection data
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CompileFailed { stage, log } => {
                write!(f, "{} shader failed to compile: {}", stage, log)
            }
            Error::LinkFailed(log) => write!(f, "program failed to link: {}", log),
            Error::UnsupportedUniformType { name, ty } => {
                write!(f, "uniform '{}' has unsupported type {}", name, ty)
            }
            Error::UniformTypeMismatch { name, expected, got } => {
                write!(
                    f,
                    "uniform '{}' expects a {} value, got {}",
                    name, expected, got
                )
            }
            Error::UnknownVariable(name) => write!(f, "no active variable named '{}'", name),
            Error::InvalidResource(msg) => write!(f, "invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
