/// Vocabulary enums shared between the drawing context and the renderer

use std::fmt;

use bitflags::bitflags;

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Declared GPU type of a shader variable
///
/// Closed enumeration of the type tags a GL-style context reports for active
/// variables. Setter synthesis dispatches exhaustively over this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlType {
    /// `float`
    Float,
    /// `vec2`
    FloatVec2,
    /// `vec3`
    FloatVec3,
    /// `vec4`
    FloatVec4,
    /// `int`
    Int,
    /// `ivec2`
    IntVec2,
    /// `ivec3`
    IntVec3,
    /// `ivec4`
    IntVec4,
    /// `bool`
    Bool,
    /// `mat2`
    FloatMat2,
    /// `mat3`
    FloatMat3,
    /// `mat4`
    FloatMat4,
    /// `sampler2D`
    Sampler2D,
    /// `samplerCube`
    SamplerCube,
}

impl GlType {
    /// GLSL keyword for this type
    pub fn glsl_name(&self) -> &'static str {
        match self {
            GlType::Float => "float",
            GlType::FloatVec2 => "vec2",
            GlType::FloatVec3 => "vec3",
            GlType::FloatVec4 => "vec4",
            GlType::Int => "int",
            GlType::IntVec2 => "ivec2",
            GlType::IntVec3 => "ivec3",
            GlType::IntVec4 => "ivec4",
            GlType::Bool => "bool",
            GlType::FloatMat2 => "mat2",
            GlType::FloatMat3 => "mat3",
            GlType::FloatMat4 => "mat4",
            GlType::Sampler2D => "sampler2D",
            GlType::SamplerCube => "samplerCube",
        }
    }
}

impl fmt::Display for GlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glsl_name())
    }
}

/// Variable class reported by program reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableClass {
    /// Program-global input, set once per draw call
    Uniform,
    /// Per-vertex input sourced from a bound buffer
    Attribute,
}

/// Buffer binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attribute data
    Array,
    /// Index data
    ElementArray,
}

impl Default for BufferTarget {
    fn default() -> Self {
        BufferTarget::Array
    }
}

/// Buffer usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Written once, drawn many times
    StaticDraw,
    /// Rewritten frequently
    DynamicDraw,
    /// Written once, drawn a few times
    StreamDraw,
}

impl Default for BufferUsage {
    fn default() -> Self {
        BufferUsage::StaticDraw
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Individual points
    Points,
    /// Individual line segments
    Lines,
    /// Connected line segments
    LineStrip,
    /// Connected line segments, closed
    LineLoop,
    /// Individual triangles
    Triangles,
    /// Connected triangle strip
    TriangleStrip,
    /// Connected triangle fan
    TriangleFan,
}

/// Context capability toggled via `enable`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Depth testing
    DepthTest,
}

bitflags! {
    /// Framebuffer aspects addressed by `clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        /// Color buffer
        const COLOR = 1 << 0;
        /// Depth buffer
        const DEPTH = 1 << 1;
    }
}
