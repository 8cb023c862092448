/// Typed setter values synthesized per reflected variable
///
/// Each setter is a small value holding an explicit context reference and a
/// resolved location, replacing hidden closure capture: ownership of the
/// context is visible in the struct, and the single call operation is the
/// whole surface.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::context::{
    AttributeLocation, BufferHandle, BufferTarget, BufferUsage, DrawingContext, GlType,
    UniformLocation,
};
use crate::error::{Error, Result};

/// Setter kind a uniform's declared type maps to
///
/// This is the dispatch table of the reflection mechanism: each kind selects
/// a structurally different context write call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    /// Scalar float, written via `uniform_1f`
    Float,
    /// 2x2 float matrix, 4 elements column-major
    Mat2,
    /// 3x3 float matrix, 9 elements column-major
    Mat3,
    /// 4x4 float matrix, 16 elements column-major
    Mat4,
}

impl UniformKind {
    /// Map a declared GPU type to its setter kind
    ///
    /// Exhaustive over the closed [`GlType`] enumeration; types without a
    /// registered write call return `None` and reflection turns that into
    /// [`Error::UnsupportedUniformType`] rather than silently omitting the
    /// setter.
    pub fn from_gl_type(ty: GlType) -> Option<Self> {
        match ty {
            GlType::Float => Some(UniformKind::Float),
            GlType::FloatMat2 => Some(UniformKind::Mat2),
            GlType::FloatMat3 => Some(UniformKind::Mat3),
            GlType::FloatMat4 => Some(UniformKind::Mat4),
            GlType::FloatVec2
            | GlType::FloatVec3
            | GlType::FloatVec4
            | GlType::Int
            | GlType::IntVec2
            | GlType::IntVec3
            | GlType::IntVec4
            | GlType::Bool
            | GlType::Sampler2D
            | GlType::SamplerCube => None,
        }
    }
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformKind::Float => write!(f, "float"),
            UniformKind::Mat2 => write!(f, "mat2"),
            UniformKind::Mat3 => write!(f, "mat3"),
            UniformKind::Mat4 => write!(f, "mat4"),
        }
    }
}

/// Value accepted by a uniform setter
///
/// Matrices are column-major and are always written untransposed.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// Scalar float
    Float(f32),
    /// 2x2 matrix, column-major
    Mat2([f32; 4]),
    /// 3x3 matrix, column-major
    Mat3([f32; 9]),
    /// 4x4 matrix, column-major
    Mat4([f32; 16]),
}

impl UniformValue {
    /// Kind of this value, for mismatch reporting
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Mat2(_) => UniformKind::Mat2,
            UniformValue::Mat3(_) => UniformKind::Mat3,
            UniformValue::Mat4(_) => UniformKind::Mat4,
        }
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<glam::Mat2> for UniformValue {
    fn from(matrix: glam::Mat2) -> Self {
        UniformValue::Mat2(matrix.to_cols_array())
    }
}

impl From<glam::Mat3> for UniformValue {
    fn from(matrix: glam::Mat3) -> Self {
        UniformValue::Mat3(matrix.to_cols_array())
    }
}

impl From<glam::Mat4> for UniformValue {
    fn from(matrix: glam::Mat4) -> Self {
        UniformValue::Mat4(matrix.to_cols_array())
    }
}

/// Typed write handle for one active uniform
///
/// Holds a non-owning reference to the drawing context and the variable's
/// resolved location; it never destroys GPU resources.
pub struct UniformSetter {
    context: Arc<Mutex<dyn DrawingContext>>,
    name: String,
    kind: UniformKind,
    location: UniformLocation,
}

impl UniformSetter {
    pub(crate) fn new(
        context: Arc<Mutex<dyn DrawingContext>>,
        name: String,
        kind: UniformKind,
        location: UniformLocation,
    ) -> Self {
        Self {
            context,
            name,
            kind,
            location,
        }
    }

    /// Name of the uniform this setter writes
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Setter kind selected at reflection time
    pub fn kind(&self) -> UniformKind {
        self.kind
    }

    /// Resolved storage location
    pub fn location(&self) -> UniformLocation {
        self.location
    }

    /// Write a value to the uniform
    ///
    /// # Errors
    ///
    /// [`Error::UniformTypeMismatch`] if the value's shape does not match the
    /// uniform's declared type.
    pub fn set(&self, value: impl Into<UniformValue>) -> Result<()> {
        let value = value.into();
        let mut ctx = self.context.lock().unwrap();
        match (self.kind, &value) {
            (UniformKind::Float, UniformValue::Float(v)) => ctx.uniform_1f(self.location, *v),
            (UniformKind::Mat2, UniformValue::Mat2(m)) => {
                ctx.uniform_matrix_2fv(self.location, false, m)
            }
            (UniformKind::Mat3, UniformValue::Mat3(m)) => {
                ctx.uniform_matrix_3fv(self.location, false, m)
            }
            (UniformKind::Mat4, UniformValue::Mat4(m)) => {
                ctx.uniform_matrix_4fv(self.location, false, m)
            }
            (expected, got) => {
                return Err(Error::UniformTypeMismatch {
                    name: self.name.clone(),
                    expected,
                    got: got.kind(),
                })
            }
        }
        Ok(())
    }
}

impl fmt::Debug for UniformSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformSetter")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("location", &self.location)
            .finish()
    }
}

/// Info about a buffer created through the renderer
///
/// Immutable after creation; re-upload requires creating a new buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferInfo {
    /// Opaque GPU buffer handle
    pub handle: BufferHandle,
    /// Binding point the buffer was created against
    pub target: BufferTarget,
    /// Usage hint it was uploaded with
    pub usage: BufferUsage,
}

/// Read-layout configuration passed to an attribute setter at call time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeBinding {
    /// Buffer to source vertex data from
    pub buffer: BufferInfo,
    /// Components per vertex (1-4)
    pub component_count: i32,
    /// Component type (defaults to float)
    pub component_type: GlType,
    /// Byte offset of the first component
    pub byte_offset: i32,
    /// Byte stride between consecutive vertices (0 = tightly packed)
    pub byte_stride: i32,
}

impl AttributeBinding {
    /// Binding with the default layout: float components, offset 0, stride 0
    pub fn new(buffer: BufferInfo, component_count: i32) -> Self {
        Self {
            buffer,
            component_count,
            component_type: GlType::Float,
            byte_offset: 0,
            byte_stride: 0,
        }
    }
}

/// Write handle for one active vertex attribute
///
/// `bind` performs buffer-bind, attribute-enable, and pointer setup as one
/// atomic operation under a single context lock.
pub struct AttributeSetter {
    context: Arc<Mutex<dyn DrawingContext>>,
    name: String,
    location: AttributeLocation,
}

impl AttributeSetter {
    pub(crate) fn new(
        context: Arc<Mutex<dyn DrawingContext>>,
        name: String,
        location: AttributeLocation,
    ) -> Self {
        Self {
            context,
            name,
            location,
        }
    }

    /// Name of the attribute this setter configures
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved storage location
    pub fn location(&self) -> AttributeLocation {
        self.location
    }

    /// Point the attribute at a buffer with the given read layout
    pub fn bind(&self, binding: &AttributeBinding) {
        let mut ctx = self.context.lock().unwrap();
        ctx.bind_buffer(binding.buffer.target, binding.buffer.handle);
        ctx.enable_vertex_attrib_array(self.location);
        ctx.vertex_attrib_pointer(
            self.location,
            binding.component_count,
            binding.component_type,
            false,
            binding.byte_stride,
            binding.byte_offset,
        );
    }
}

impl fmt::Debug for AttributeSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSetter")
            .field("name", &self.name)
            .field("location", &self.location)
            .finish()
    }
}
