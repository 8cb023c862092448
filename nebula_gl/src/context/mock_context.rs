/// Mock DrawingContext for unit tests (no GPU required)
///
/// Active variables are preset on the mock before linking; every mutating
/// call is journaled as a formatted string so tests can assert exact call
/// sequences.

use slotmap::SlotMap;

use crate::context::{
    ActiveVariable, AttributeLocation, BufferHandle, BufferTarget, BufferUsage, Capability,
    ClearMask, DrawMode, DrawingContext, GlType, ProgramHandle, ShaderHandle, ShaderStage,
    UniformLocation, VariableClass,
};

#[derive(Debug)]
pub struct MockShader {
    pub stage: ShaderStage,
    pub source: String,
    pub compiled: bool,
}

#[derive(Debug)]
pub struct MockProgram {
    pub linked: bool,
    pub uniforms: Vec<ActiveVariable>,
    pub attributes: Vec<ActiveVariable>,
}

/// Recording mock implementation of [`DrawingContext`]
pub struct MockContext {
    shaders: SlotMap<ShaderHandle, MockShader>,
    programs: SlotMap<ProgramHandle, MockProgram>,
    buffers: SlotMap<BufferHandle, Vec<u8>>,
    bound_array_buffer: Option<BufferHandle>,
    bound_element_buffer: Option<BufferHandle>,

    /// Stage whose compilation should fail, if any
    pub fail_compile: Option<ShaderStage>,
    /// Whether linking should fail
    pub fail_link: bool,
    /// Active uniforms handed to every linked program
    pub uniforms: Vec<ActiveVariable>,
    /// Active attributes handed to every linked program
    pub attributes: Vec<ActiveVariable>,
    /// Journal of every mutating call, in order
    pub calls: Vec<String>,
}

impl MockContext {
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            buffers: SlotMap::with_key(),
            bound_array_buffer: None,
            bound_element_buffer: None,
            fail_compile: None,
            fail_link: false,
            uniforms: Vec::new(),
            attributes: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Mock with one active variable of each class, for facade tests
    pub fn with_basic_program() -> Self {
        let mut mock = Self::new();
        mock.uniforms = vec![
            ActiveVariable {
                name: "u_mvp".to_string(),
                ty: GlType::FloatMat4,
                size: 1,
            },
            ActiveVariable {
                name: "u_time".to_string(),
                ty: GlType::Float,
                size: 1,
            },
        ];
        mock.attributes = vec![ActiveVariable {
            name: "a_position".to_string(),
            ty: GlType::FloatVec2,
            size: 1,
        }];
        mock
    }

    pub fn shader_alive(&self, shader: ShaderHandle) -> bool {
        self.shaders.contains_key(shader)
    }

    pub fn program_alive(&self, program: ProgramHandle) -> bool {
        self.programs.contains_key(program)
    }

    pub fn buffer_bytes(&self, buffer: BufferHandle) -> Option<&[u8]> {
        self.buffers.get(buffer).map(Vec::as_slice)
    }

    fn variables(&self, program: ProgramHandle, class: VariableClass) -> &[ActiveVariable] {
        let program = &self.programs[program];
        match class {
            VariableClass::Uniform => &program.uniforms,
            VariableClass::Attribute => &program.attributes,
        }
    }
}

impl DrawingContext for MockContext {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle {
        self.shaders.insert(MockShader {
            stage,
            source: String::new(),
            compiled: false,
        })
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        self.shaders[shader].source = source.to_string();
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        let failed = self.fail_compile == Some(self.shaders[shader].stage);
        self.shaders[shader].compiled = !failed;
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.shaders[shader].compiled
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        if self.shaders[shader].compiled {
            String::new()
        } else {
            format!("mock: {} shader rejected", self.shaders[shader].stage)
        }
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.calls.push("delete_shader".to_string());
        self.shaders.remove(shader);
    }

    fn create_program(&mut self) -> ProgramHandle {
        self.programs.insert(MockProgram {
            linked: false,
            uniforms: Vec::new(),
            attributes: Vec::new(),
        })
    }

    fn attach_shader(&mut self, _program: ProgramHandle, _shader: ShaderHandle) {
        self.calls.push("attach_shader".to_string());
    }

    fn link_program(&mut self, program: ProgramHandle) {
        if self.fail_link {
            return;
        }
        let uniforms = self.uniforms.clone();
        let attributes = self.attributes.clone();
        let program = &mut self.programs[program];
        program.linked = true;
        program.uniforms = uniforms;
        program.attributes = attributes;
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.programs[program].linked
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        if self.programs[program].linked {
            String::new()
        } else {
            "mock: link rejected".to_string()
        }
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.calls.push("delete_program".to_string());
        self.programs.remove(program);
    }

    fn use_program(&mut self, _program: ProgramHandle) {
        self.calls.push("use_program".to_string());
    }

    fn active_variable_count(&self, program: ProgramHandle, class: VariableClass) -> u32 {
        self.variables(program, class).len() as u32
    }

    fn active_variable(
        &self,
        program: ProgramHandle,
        class: VariableClass,
        index: u32,
    ) -> Option<ActiveVariable> {
        self.variables(program, class).get(index as usize).cloned()
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        self.variables(program, VariableClass::Uniform)
            .iter()
            .position(|v| v.name == name)
            .map(|i| UniformLocation(i as i32))
    }

    fn attribute_location(
        &self,
        program: ProgramHandle,
        name: &str,
    ) -> Option<AttributeLocation> {
        self.variables(program, VariableClass::Attribute)
            .iter()
            .position(|v| v.name == name)
            .map(|i| AttributeLocation(i as u32))
    }

    fn create_buffer(&mut self) -> BufferHandle {
        self.buffers.insert(Vec::new())
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: BufferHandle) {
        self.calls.push(format!("bind_buffer({:?})", target));
        match target {
            BufferTarget::Array => self.bound_array_buffer = Some(buffer),
            BufferTarget::ElementArray => self.bound_element_buffer = Some(buffer),
        }
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.calls
            .push(format!("buffer_data({:?}, {} bytes, {:?})", target, data.len(), usage));
        let bound = match target {
            BufferTarget::Array => self.bound_array_buffer,
            BufferTarget::ElementArray => self.bound_element_buffer,
        };
        if let Some(handle) = bound {
            self.buffers[handle] = data.to_vec();
        }
    }

    fn uniform_1f(&mut self, location: UniformLocation, value: f32) {
        self.calls.push(format!("uniform_1f({}, {})", location.0, value));
    }

    fn uniform_matrix_2fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 4],
    ) {
        self.calls.push(format!(
            "uniform_matrix_2fv({}, {}, {:?})",
            location.0, transpose, values
        ));
    }

    fn uniform_matrix_3fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 9],
    ) {
        self.calls.push(format!(
            "uniform_matrix_3fv({}, {}, {:?})",
            location.0, transpose, values
        ));
    }

    fn uniform_matrix_4fv(
        &mut self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32; 16],
    ) {
        self.calls.push(format!(
            "uniform_matrix_4fv({}, {}, {:?})",
            location.0, transpose, values
        ));
    }

    fn enable_vertex_attrib_array(&mut self, location: AttributeLocation) {
        self.calls
            .push(format!("enable_vertex_attrib_array({})", location.0));
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
        self.calls.push(format!(
            "vertex_attrib_pointer({}, {}, {}, {}, {}, {})",
            location.0, component_count, component_type, normalized, byte_stride, byte_offset
        ));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.calls.push(format!("clear({:?})", mask));
    }

    fn enable(&mut self, capability: Capability) {
        self.calls.push(format!("enable({:?})", capability));
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) {
        self.calls
            .push(format!("draw_arrays({:?}, {}, {})", mode, first, count));
    }
}
