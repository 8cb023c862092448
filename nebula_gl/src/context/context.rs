/// DrawingContext trait - the GPU interface everything else is built on

use slotmap::new_key_type;

use crate::context::{
    BufferTarget, BufferUsage, Capability, ClearMask, DrawMode, GlType, ShaderStage,
    VariableClass,
};

new_key_type! {
    /// Opaque handle to a compiled shader stage
    pub struct ShaderHandle;

    /// Opaque handle to a linked program
    pub struct ProgramHandle;

    /// Opaque handle to a GPU data buffer
    pub struct BufferHandle;
}

/// Resolved storage location of a uniform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

/// Resolved storage location of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeLocation(pub u32);

/// One active variable as reported by program reflection
///
/// Array-typed variables are reported once with `size > 1`; there is no
/// per-element expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveVariable {
    /// Variable name, unique within its class on a given program
    pub name: String,
    /// Declared GPU type
    pub ty: GlType,
    /// Declared array size (1 for non-arrays)
    pub size: i32,
}

/// GPU drawing context trait
///
/// Models a browser-style 3D graphics API surface: shader compilation,
/// program linking, reflection queries, buffer objects, uniform writes,
/// attribute setup, and draw calls. Implemented by backends (a real GL
/// context, the headless recording context for tests, etc.)
///
/// Operations are infallible at this boundary, matching the modeled API:
/// compile and link outcomes are observed through the status and info-log
/// queries, never through return values. Binding calls overwrite the
/// context's per-target global state; sequencing is the caller's job.
pub trait DrawingContext: Send + Sync {
    // ------------------------------------------------------------------
    // Shaders
    // ------------------------------------------------------------------

    /// Allocate a shader object for the given stage
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle;

    /// Submit source text for a shader object
    fn shader_source(&mut self, shader: ShaderHandle, source: &str);

    /// Compile a shader object's submitted source
    fn compile_shader(&mut self, shader: ShaderHandle);

    /// Whether the last compilation of this shader succeeded
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;

    /// Driver diagnostic log for this shader (empty if compilation was clean)
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    /// Release a shader object
    fn delete_shader(&mut self, shader: ShaderHandle);

    // ------------------------------------------------------------------
    // Programs
    // ------------------------------------------------------------------

    /// Allocate a program object
    fn create_program(&mut self) -> ProgramHandle;

    /// Attach a compiled shader stage to a program
    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    /// Link the attached stages of a program
    fn link_program(&mut self, program: ProgramHandle);

    /// Whether the last link of this program succeeded
    fn program_link_status(&self, program: ProgramHandle) -> bool;

    /// Driver diagnostic log for this program (empty if linking was clean)
    fn program_info_log(&self, program: ProgramHandle) -> String;

    /// Release a program object
    fn delete_program(&mut self, program: ProgramHandle);

    /// Make a linked program the active program
    fn use_program(&mut self, program: ProgramHandle);

    // ------------------------------------------------------------------
    // Reflection queries
    // ------------------------------------------------------------------

    /// Number of active variables of the given class on a linked program
    fn active_variable_count(&self, program: ProgramHandle, class: VariableClass) -> u32;

    /// Info for the active variable at `index` (0..count)
    ///
    /// Returns `None` for an out-of-range index.
    fn active_variable(
        &self,
        program: ProgramHandle,
        class: VariableClass,
        index: u32,
    ) -> Option<ActiveVariable>;

    /// Resolve a uniform's storage location by name
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation>;

    /// Resolve a vertex attribute's storage location by name
    fn attribute_location(&self, program: ProgramHandle, name: &str)
        -> Option<AttributeLocation>;

    // ------------------------------------------------------------------
    // Buffers
    // ------------------------------------------------------------------

    /// Allocate a buffer object
    fn create_buffer(&mut self) -> BufferHandle;

    /// Bind a buffer to a binding point (overwrites the previous binding)
    fn bind_buffer(&mut self, target: BufferTarget, buffer: BufferHandle);

    /// Upload data to the buffer currently bound at `target`
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage);

    // ------------------------------------------------------------------
    // Uniform writes
    // ------------------------------------------------------------------

    /// Write a scalar float uniform
    fn uniform_1f(&mut self, location: UniformLocation, value: f32);

    /// Write a 2x2 float matrix uniform (column-major)
    fn uniform_matrix_2fv(&mut self, location: UniformLocation, transpose: bool, values: &[f32; 4]);

    /// Write a 3x3 float matrix uniform (column-major)
    fn uniform_matrix_3fv(&mut self, location: UniformLocation, transpose: bool, values: &[f32; 9]);

    /// Write a 4x4 float matrix uniform (column-major)
    fn uniform_matrix_4fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 16],
    );

    // ------------------------------------------------------------------
    // Attribute setup
    // ------------------------------------------------------------------

    /// Enable the vertex attribute array at `location`
    fn enable_vertex_attrib_array(&mut self, location: AttributeLocation);

    /// Configure how the attribute at `location` reads the bound array buffer
    #[allow(clippy::too_many_arguments)]
    fn vertex_attrib_pointer(
        &mut self,
        location: AttributeLocation,
        component_count: i32,
        component_type: GlType,
        normalized: bool,
        byte_stride: i32,
        byte_offset: i32,
    );

    // ------------------------------------------------------------------
    // Frame operations
    // ------------------------------------------------------------------

    /// Clear the selected framebuffer aspects
    fn clear(&mut self, mask: ClearMask);

    /// Enable a capability (idempotent)
    fn enable(&mut self, capability: Capability);

    /// Issue a non-indexed draw of `count` vertices starting at `first`
    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32);
}
