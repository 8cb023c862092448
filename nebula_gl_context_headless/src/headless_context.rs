/// HeadlessContext - recording DrawingContext backend without a GPU

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use nebula_gl::context::{
    ActiveVariable, AttributeLocation, BufferHandle, BufferTarget, BufferUsage, Capability,
    ClearMask, DrawMode, DrawingContext, GlType, ProgramHandle, ShaderHandle, ShaderStage,
    UniformLocation, VariableClass,
};

use crate::glsl_scan::{identifier_occurrences, scan, Declaration};

/// One journaled context call
#[derive(Debug, Clone, PartialEq)]
pub enum CallRecord {
    /// `use_program`
    UseProgram(ProgramHandle),
    /// `bind_buffer`
    BindBuffer(BufferTarget, BufferHandle),
    /// `buffer_data` (data length in bytes)
    BufferData {
        target: BufferTarget,
        byte_len: usize,
        usage: BufferUsage,
    },
    /// `uniform_1f`
    Uniform1f(UniformLocation, f32),
    /// Any `uniform_matrix_*fv` (element count distinguishes the shape)
    UniformMatrix {
        location: UniformLocation,
        transpose: bool,
        values: Vec<f32>,
    },
    /// `enable_vertex_attrib_array`
    EnableVertexAttribArray(AttributeLocation),
    /// `vertex_attrib_pointer`
    VertexAttribPointer {
        location: AttributeLocation,
        component_count: i32,
        component_type: GlType,
        normalized: bool,
        byte_stride: i32,
        byte_offset: i32,
    },
    /// `clear`
    Clear(ClearMask),
    /// `enable`
    Enable(Capability),
    /// `draw_arrays`
    DrawArrays {
        mode: DrawMode,
        first: i32,
        count: i32,
    },
}

struct HeadlessShader {
    stage: ShaderStage,
    source: String,
    status: bool,
    log: String,
    declarations: Vec<Declaration>,
}

struct HeadlessProgram {
    status: bool,
    log: String,
    attached: Vec<ShaderHandle>,
    uniforms: Vec<ActiveVariable>,
    attributes: Vec<ActiveVariable>,
}

/// GPU-free recording implementation of [`DrawingContext`]
///
/// Compilation scans declarations instead of compiling; a source fails when
/// it is empty or contains a `#error` directive, producing a driver-style
/// diagnostic log. Linking merges both stages' declarations and keeps only
/// variables referenced beyond their declaration (the active set).
pub struct HeadlessContext {
    shaders: SlotMap<ShaderHandle, HeadlessShader>,
    programs: SlotMap<ProgramHandle, HeadlessProgram>,
    buffers: SlotMap<BufferHandle, Vec<u8>>,
    bound: FxHashMap<BufferTarget, BufferHandle>,
    active_program: Option<ProgramHandle>,
    enabled: Vec<Capability>,
    uniform_scalars: FxHashMap<UniformLocation, f32>,
    uniform_matrices: FxHashMap<UniformLocation, Vec<f32>>,
    calls: Vec<CallRecord>,
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            buffers: SlotMap::with_key(),
            bound: FxHashMap::default(),
            active_program: None,
            enabled: Vec::new(),
            uniform_scalars: FxHashMap::default(),
            uniform_matrices: FxHashMap::default(),
            calls: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Inspection helpers for tests
    // ------------------------------------------------------------------

    /// Journal of every call so far, in order
    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    /// Drain the journal, returning the calls recorded so far
    pub fn take_calls(&mut self) -> Vec<CallRecord> {
        std::mem::take(&mut self.calls)
    }

    /// Bytes currently stored under a buffer handle
    pub fn buffer_bytes(&self, buffer: BufferHandle) -> Option<&[u8]> {
        self.buffers.get(buffer).map(Vec::as_slice)
    }

    /// Currently active program
    pub fn active_program(&self) -> Option<ProgramHandle> {
        self.active_program
    }

    /// Last scalar written to a uniform location
    pub fn uniform_scalar(&self, location: UniformLocation) -> Option<f32> {
        self.uniform_scalars.get(&location).copied()
    }

    /// Last matrix written to a uniform location
    pub fn uniform_matrix(&self, location: UniformLocation) -> Option<&[f32]> {
        self.uniform_matrices.get(&location).map(Vec::as_slice)
    }

    /// Whether a capability is currently enabled
    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    // ------------------------------------------------------------------
    // Fake compilation and linking
    // ------------------------------------------------------------------

    fn fake_compile(stage: ShaderStage, source: &str) -> (bool, String, Vec<Declaration>) {
        if source.trim().is_empty() {
            return (
                false,
                format!("ERROR: 0:0: empty {} shader source", stage),
                Vec::new(),
            );
        }
        if let Some(line) = source.lines().find(|line| line.trim_start().starts_with("#error")) {
            return (
                false,
                format!("ERROR: {} shader: {}", stage, line.trim()),
                Vec::new(),
            );
        }
        (true, String::new(), scan(stage, source))
    }

    /// Merge both stages' declarations into the program's active variable set
    fn fake_link(&self, attached: &[ShaderHandle]) -> (bool, String, Vec<ActiveVariable>, Vec<ActiveVariable>) {
        let mut vertex = None;
        let mut fragment = None;
        for &handle in attached {
            match self.shaders.get(handle) {
                Some(shader) if shader.status => match shader.stage {
                    ShaderStage::Vertex => vertex = Some(shader),
                    ShaderStage::Fragment => fragment = Some(shader),
                },
                _ => {
                    return (
                        false,
                        "ERROR: attached shader is not compiled".to_string(),
                        Vec::new(),
                        Vec::new(),
                    )
                }
            }
        }
        let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
            return (
                false,
                "ERROR: program needs a vertex and a fragment shader".to_string(),
                Vec::new(),
                Vec::new(),
            );
        };

        // Dedupe by (class, name): a uniform declared in both stages is one
        // program variable.
        let mut merged: Vec<&Declaration> = Vec::new();
        for declaration in vertex.declarations.iter().chain(&fragment.declarations) {
            let already = merged
                .iter()
                .any(|d| d.class == declaration.class && d.name == declaration.name);
            if !already {
                merged.push(declaration);
            }
        }

        let mut uniforms = Vec::new();
        let mut attributes = Vec::new();
        for declaration in merged {
            if !self.is_active(declaration, vertex, fragment) {
                continue;
            }
            let variable = ActiveVariable {
                name: declaration.name.clone(),
                ty: declaration.ty,
                size: declaration.size,
            };
            match declaration.class {
                VariableClass::Uniform => uniforms.push(variable),
                VariableClass::Attribute => attributes.push(variable),
            }
        }

        (true, String::new(), uniforms, attributes)
    }

    /// A variable is active when its name occurs beyond its declarations
    fn is_active(
        &self,
        declaration: &Declaration,
        vertex: &HeadlessShader,
        fragment: &HeadlessShader,
    ) -> bool {
        let occurrences = identifier_occurrences(&vertex.source, &declaration.name)
            + identifier_occurrences(&fragment.source, &declaration.name);
        let declaring_statements = [vertex, fragment]
            .iter()
            .filter(|shader| {
                shader
                    .declarations
                    .iter()
                    .any(|d| d.class == declaration.class && d.name == declaration.name)
            })
            .count();
        occurrences > declaring_statements
    }

    fn program_variables(&self, program: ProgramHandle, class: VariableClass) -> &[ActiveVariable] {
        let program = &self.programs[program];
        match class {
            VariableClass::Uniform => &program.uniforms,
            VariableClass::Attribute => &program.attributes,
        }
    }
}

impl Default for HeadlessContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingContext for HeadlessContext {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle {
        self.shaders.insert(HeadlessShader {
            stage,
            source: String::new(),
            status: false,
            log: String::new(),
            declarations: Vec::new(),
        })
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        self.shaders[shader].source = source.to_string();
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        let (status, log, declarations) =
            Self::fake_compile(self.shaders[shader].stage, &self.shaders[shader].source);
        let shader = &mut self.shaders[shader];
        shader.status = status;
        shader.log = log;
        shader.declarations = declarations;
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.shaders[shader].status
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        self.shaders[shader].log.clone()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.shaders.remove(shader);
    }

    fn create_program(&mut self) -> ProgramHandle {
        self.programs.insert(HeadlessProgram {
            status: false,
            log: String::new(),
            attached: Vec::new(),
            uniforms: Vec::new(),
            attributes: Vec::new(),
        })
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.programs[program].attached.push(shader);
    }

    fn link_program(&mut self, program: ProgramHandle) {
        let attached = self.programs[program].attached.clone();
        let (status, log, uniforms, attributes) = self.fake_link(&attached);
        let program = &mut self.programs[program];
        program.status = status;
        program.log = log;
        program.uniforms = uniforms;
        program.attributes = attributes;
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.programs[program].status
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        self.programs[program].log.clone()
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.programs.remove(program);
    }

    fn use_program(&mut self, program: ProgramHandle) {
        self.active_program = Some(program);
        self.calls.push(CallRecord::UseProgram(program));
    }

    fn active_variable_count(&self, program: ProgramHandle, class: VariableClass) -> u32 {
        self.program_variables(program, class).len() as u32
    }

    fn active_variable(
        &self,
        program: ProgramHandle,
        class: VariableClass,
        index: u32,
    ) -> Option<ActiveVariable> {
        self.program_variables(program, class)
            .get(index as usize)
            .cloned()
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        self.program_variables(program, VariableClass::Uniform)
            .iter()
            .position(|v| v.name == name)
            .map(|i| UniformLocation(i as i32))
    }

    fn attribute_location(
        &self,
        program: ProgramHandle,
        name: &str,
    ) -> Option<AttributeLocation> {
        self.program_variables(program, VariableClass::Attribute)
            .iter()
            .position(|v| v.name == name)
            .map(|i| AttributeLocation(i as u32))
    }

    fn create_buffer(&mut self) -> BufferHandle {
        self.buffers.insert(Vec::new())
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: BufferHandle) {
        // Single mutable binding per target: silently overwritten, like the
        // real context's global state.
        self.bound.insert(target, buffer);
        self.calls.push(CallRecord::BindBuffer(target, buffer));
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        if let Some(&handle) = self.bound.get(&target) {
            if let Some(stored) = self.buffers.get_mut(handle) {
                *stored = data.to_vec();
            }
        }
        self.calls.push(CallRecord::BufferData {
            target,
            byte_len: data.len(),
            usage,
        });
    }

    fn uniform_1f(&mut self, location: UniformLocation, value: f32) {
        self.uniform_scalars.insert(location, value);
        self.calls.push(CallRecord::Uniform1f(location, value));
    }

    fn uniform_matrix_2fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 4],
    ) {
        self.uniform_matrices.insert(location, values.to_vec());
        self.calls.push(CallRecord::UniformMatrix {
            location,
            transpose,
            values: values.to_vec(),
        });
    }

    fn uniform_matrix_3fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 9],
    ) {
        self.uniform_matrices.insert(location, values.to_vec());
        self.calls.push(CallRecord::UniformMatrix {
            location,
            transpose,
            values: values.to_vec(),
        });
    }

    fn uniform_matrix_4fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 16],
    ) {
        self.uniform_matrices.insert(location, values.to_vec());
        self.calls.push(CallRecord::UniformMatrix {
            location,
            transpose,
            values: values.to_vec(),
        });
    }

    fn enable_vertex_attrib_array(&mut self, location: AttributeLocation) {
        self.calls.push(CallRecord::EnableVertexAttribArray(location));
    }

    fn vertex_attrib_pointer(
        &mut self,
        location: AttributeLocation,
        component_count: i32,
        component_type: GlType,
        normalized: bool,
        byte_stride: i32,
        byte_offset: i32,
    ) {
        self.calls.push(CallRecord::VertexAttribPointer {
            location,
            component_count,
            component_type,
            normalized,
            byte_stride,
            byte_offset,
        });
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(CallRecord::Clear(mask));
    }

    fn enable(&mut self, capability: Capability) {
        // Idempotent: enabling an already-enabled capability is a no-op on
        // the state, though the call is still journaled.
        if !self.enabled.contains(&capability) {
            self.enabled.push(capability);
        }
        self.calls.push(CallRecord::Enable(capability));
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) {
        self.calls.push(CallRecord::DrawArrays { mode, first, count });
    }
}
