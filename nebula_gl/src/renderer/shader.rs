/// Shader compilation and program linking

use std::sync::{Arc, Mutex};

use crate::context::{DrawingContext, ProgramHandle, ShaderHandle, ShaderStage};
use crate::error::{Error, Result};
use crate::log::Logger;
use crate::nebula_error;

const SOURCE: &str = "nebula::Shader";

/// Compile one shader stage from source text
///
/// Exactly one attempt per call. On failure the driver's diagnostic log is
/// reported through `logger`, the shader object is released, and
/// [`Error::CompileFailed`] carries the same log back to the caller.
pub fn compile(
    context: &Arc<Mutex<dyn DrawingContext>>,
    logger: &dyn Logger,
    stage: ShaderStage,
    source: &str,
) -> Result<ShaderHandle> {
    let mut ctx = context.lock().unwrap();

    let shader = ctx.create_shader(stage);
    ctx.shader_source(shader, source);
    ctx.compile_shader(shader);

    if !ctx.shader_compile_status(shader) {
        let log = ctx.shader_info_log(shader);
        nebula_error!(logger, SOURCE, "{} shader failed to compile: {}", stage, log);
        ctx.delete_shader(shader);
        return Err(Error::CompileFailed { stage, log });
    }

    Ok(shader)
}

/// Link a vertex and a fragment stage into one program
///
/// Both stages stay attached for the program's lifetime; there is no detach
/// step. On failure the program object is released and the driver log is
/// reported and returned. The stage handles are not released here — their
/// ownership was already resolved by [`compile`].
pub fn link(
    context: &Arc<Mutex<dyn DrawingContext>>,
    logger: &dyn Logger,
    vertex: ShaderHandle,
    fragment: ShaderHandle,
) -> Result<ProgramHandle> {
    let mut ctx = context.lock().unwrap();

    let program = ctx.create_program();
    ctx.attach_shader(program, vertex);
    ctx.attach_shader(program, fragment);
    ctx.link_program(program);

    if !ctx.program_link_status(program) {
        let log = ctx.program_info_log(program);
        nebula_error!(logger, SOURCE, "program failed to link: {}", log);
        ctx.delete_program(program);
        return Err(Error::LinkFailed(log));
    }

    Ok(program)
}
