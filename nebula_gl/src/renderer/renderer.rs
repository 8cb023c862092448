/// Renderer facade - compile, link, reflect, activate, then draw
///
/// Composition order matters: the program must be active before attribute
/// setters run, so construction ends with `use_program`.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::context::{
    BufferTarget, BufferUsage, Capability, ClearMask, DrawMode, DrawingContext, ProgramHandle,
    ShaderStage,
};
use crate::error::{Error, Result};
use crate::log::Logger;
use crate::renderer::frame_loop::{run_loop, CancellationToken, FrameScheduler};
use crate::renderer::reflection::{
    reflect_attributes, reflect_uniforms, AttributeVariable, UniformVariable,
};
use crate::renderer::shader;
use crate::renderer::variable::{AttributeBinding, AttributeSetter, BufferInfo, UniformSetter, UniformValue};
use crate::nebula_debug;

const SOURCE: &str = "nebula::Renderer";

/// Shader sources for renderer construction
#[derive(Debug, Clone)]
pub struct RendererDesc {
    /// Vertex stage source text
    pub vertex_source: String,
    /// Fragment stage source text
    pub fragment_source: String,
}

/// Buffer creation config
///
/// `target` and `usage` default to `Array` / `StaticDraw`, matching the
/// common vertex-data case.
#[derive(Debug, Clone, Copy)]
pub struct BufferDesc<'a> {
    /// Binding point
    pub target: BufferTarget,
    /// Usage hint
    pub usage: BufferUsage,
    /// Data to upload (passed through unvalidated, empty included)
    pub data: &'a [f32],
}

impl<'a> BufferDesc<'a> {
    /// Descriptor with default target and usage
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            target: BufferTarget::default(),
            usage: BufferUsage::default(),
            data,
        }
    }
}

/// One frame's draw config
#[derive(Debug, Clone, Copy)]
pub struct DrawDesc {
    /// Primitive topology
    pub mode: DrawMode,
    /// Number of vertices to draw, starting at offset 0
    pub count: i32,
}

/// Reflective single-program renderer over a [`DrawingContext`]
///
/// Owns the linked program and every descriptor reflection produced.
/// Setters hold non-owning context references; the renderer never destroys
/// GPU resources behind the caller's back.
pub struct Renderer {
    context: Arc<Mutex<dyn DrawingContext>>,
    logger: Arc<dyn Logger>,
    program: ProgramHandle,
    uniforms: FxHashMap<String, UniformVariable>,
    attributes: FxHashMap<String, AttributeVariable>,
}

impl Renderer {
    /// Build a renderer from two shader sources
    ///
    /// Performs, in order: compile vertex → compile fragment → link →
    /// reflect uniforms → reflect attributes → activate program. Any failing
    /// step aborts construction; diagnostics go through `logger`.
    ///
    /// # Errors
    ///
    /// [`Error::CompileFailed`], [`Error::LinkFailed`],
    /// [`Error::UnsupportedUniformType`], or [`Error::InvalidResource`].
    pub fn new(
        context: Arc<Mutex<dyn DrawingContext>>,
        desc: RendererDesc,
        logger: Arc<dyn Logger>,
    ) -> Result<Self> {
        let vertex = shader::compile(
            &context,
            logger.as_ref(),
            ShaderStage::Vertex,
            &desc.vertex_source,
        )?;
        let fragment = shader::compile(
            &context,
            logger.as_ref(),
            ShaderStage::Fragment,
            &desc.fragment_source,
        )?;
        let program = shader::link(&context, logger.as_ref(), vertex, fragment)?;

        let uniforms = reflect_uniforms(&context, logger.as_ref(), program)?;
        let attributes = reflect_attributes(&context, logger.as_ref(), program)?;

        // Attribute binds only take effect on the active program.
        context.lock().unwrap().use_program(program);

        nebula_debug!(
            logger,
            SOURCE,
            "program ready: {} uniform(s), {} attribute(s)",
            uniforms.len(),
            attributes.len()
        );

        Ok(Self {
            context,
            logger,
            program,
            uniforms,
            attributes,
        })
    }

    /// Handle of the linked, active program
    pub fn program(&self) -> ProgramHandle {
        self.program
    }

    /// All reflected uniform descriptors, keyed by name
    pub fn uniforms(&self) -> &FxHashMap<String, UniformVariable> {
        &self.uniforms
    }

    /// All reflected attribute descriptors, keyed by name
    pub fn attributes(&self) -> &FxHashMap<String, AttributeVariable> {
        &self.attributes
    }

    /// Setter for the named uniform, if it is active on the program
    pub fn uniform(&self, name: &str) -> Option<&UniformSetter> {
        self.uniforms.get(name).map(|v| &v.setter)
    }

    /// Setter for the named attribute, if it is active on the program
    pub fn attribute(&self, name: &str) -> Option<&AttributeSetter> {
        self.attributes.get(name).map(|v| &v.setter)
    }

    /// Write a uniform by name
    ///
    /// # Errors
    ///
    /// [`Error::UnknownVariable`] for absent names,
    /// [`Error::UniformTypeMismatch`] for a wrongly shaped value.
    pub fn set_uniform(&self, name: &str, value: impl Into<UniformValue>) -> Result<()> {
        self.uniform(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))?
            .set(value)
    }

    /// Bind a buffer to a named attribute with the given read layout
    ///
    /// # Errors
    ///
    /// [`Error::UnknownVariable`] for absent names.
    pub fn bind_attribute(&self, name: &str, binding: &AttributeBinding) -> Result<()> {
        self.attribute(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))?
            .bind(binding);
        Ok(())
    }

    /// Create a buffer, bind it to its target, and upload `desc.data`
    ///
    /// The returned info is immutable and caller-owned; the renderer does not
    /// track it beyond what attribute setters need at call time.
    pub fn create_buffer(&self, desc: BufferDesc<'_>) -> BufferInfo {
        let mut ctx = self.context.lock().unwrap();
        let handle = ctx.create_buffer();
        ctx.bind_buffer(desc.target, handle);
        ctx.buffer_data(desc.target, bytemuck::cast_slice(desc.data), desc.usage);
        BufferInfo {
            handle,
            target: desc.target,
            usage: desc.usage,
        }
    }

    /// Clear the color buffer, enable depth testing, and draw one frame
    pub fn draw(&self, desc: DrawDesc) {
        let mut ctx = self.context.lock().unwrap();
        ctx.clear(ClearMask::COLOR);
        ctx.enable(Capability::DepthTest);
        ctx.draw_arrays(desc.mode, 0, desc.count);
    }

    /// Run `callback` once per display frame until the token is cancelled
    ///
    /// Convenience over [`run_loop`]; the scheduler is the host's
    /// frame-scheduling primitive.
    pub fn animate<S, F>(&self, scheduler: &mut S, token: &CancellationToken, callback: F)
    where
        S: FrameScheduler + ?Sized,
        F: FnMut(f64),
    {
        nebula_debug!(self.logger, SOURCE, "entering frame loop");
        run_loop(scheduler, token, callback);
        nebula_debug!(self.logger, SOURCE, "frame loop stopped");
    }
}
