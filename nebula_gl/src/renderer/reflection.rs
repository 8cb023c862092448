/// Program variable reflection
///
/// Walks a linked program's active variables, resolves each one's storage
/// location, and synthesizes a typed setter per variable. Only *active*
/// variables are surfaced: the descriptor count always equals the count the
/// context itself reports for the class.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::context::{
    AttributeLocation, DrawingContext, GlType, ProgramHandle, UniformLocation, VariableClass,
};
use crate::error::{Error, Result};
use crate::log::Logger;
use crate::renderer::variable::{AttributeSetter, UniformKind, UniformSetter};
use crate::nebula_error;

const SOURCE: &str = "nebula::Reflection";

/// Descriptor for one active uniform, setter included
#[derive(Debug)]
pub struct UniformVariable {
    /// Variable name as reported by the program
    pub name: String,
    /// Declared GPU type
    pub ty: GlType,
    /// Declared array size (1 for non-arrays); arrays reflect as a single
    /// descriptor, never per-element
    pub size: i32,
    /// Resolved storage location
    pub location: UniformLocation,
    /// Typed write handle
    pub setter: UniformSetter,
}

/// Descriptor for one active vertex attribute, setter included
#[derive(Debug)]
pub struct AttributeVariable {
    /// Variable name as reported by the program
    pub name: String,
    /// Declared GPU type
    pub ty: GlType,
    /// Declared array size (1 for non-arrays)
    pub size: i32,
    /// Resolved storage location
    pub location: AttributeLocation,
    /// Write handle (one setter shape regardless of declared type)
    pub setter: AttributeSetter,
}

/// Reflect every active uniform of a linked program
///
/// # Errors
///
/// [`Error::UnsupportedUniformType`] if an active uniform's declared type has
/// no entry in the setter dispatch table; [`Error::InvalidResource`] if the
/// context's reflection answers are inconsistent (a reported variable with no
/// resolvable location).
pub fn reflect_uniforms(
    context: &Arc<Mutex<dyn DrawingContext>>,
    logger: &dyn Logger,
    program: ProgramHandle,
) -> Result<FxHashMap<String, UniformVariable>> {
    let count;
    let mut reflected = Vec::new();
    {
        let ctx = context.lock().unwrap();
        count = ctx.active_variable_count(program, VariableClass::Uniform);
        for index in 0..count {
            let info = ctx
                .active_variable(program, VariableClass::Uniform, index)
                .ok_or_else(|| {
                    Error::InvalidResource(format!("no active uniform at index {}", index))
                })?;
            let location = ctx.uniform_location(program, &info.name).ok_or_else(|| {
                Error::InvalidResource(format!("no location for active uniform '{}'", info.name))
            })?;
            reflected.push((info, location));
        }
    }

    let mut variables = FxHashMap::default();
    for (info, location) in reflected {
        let kind = match UniformKind::from_gl_type(info.ty) {
            Some(kind) => kind,
            None => {
                nebula_error!(
                    logger,
                    SOURCE,
                    "uniform '{}' has unsupported type {}",
                    info.name,
                    info.ty
                );
                return Err(Error::UnsupportedUniformType {
                    name: info.name,
                    ty: info.ty,
                });
            }
        };
        let setter = UniformSetter::new(Arc::clone(context), info.name.clone(), kind, location);
        variables.insert(
            info.name.clone(),
            UniformVariable {
                name: info.name,
                ty: info.ty,
                size: info.size,
                location,
                setter,
            },
        );
    }

    debug_assert_eq!(variables.len() as u32, count);
    Ok(variables)
}

/// Reflect every active vertex attribute of a linked program
///
/// Attributes need no kind dispatch: whatever the declared type, the setter
/// binds a buffer and configures the read layout given at call time.
pub fn reflect_attributes(
    context: &Arc<Mutex<dyn DrawingContext>>,
    _logger: &dyn Logger,
    program: ProgramHandle,
) -> Result<FxHashMap<String, AttributeVariable>> {
    let mut reflected = Vec::new();
    {
        let ctx = context.lock().unwrap();
        let count = ctx.active_variable_count(program, VariableClass::Attribute);
        for index in 0..count {
            let info = ctx
                .active_variable(program, VariableClass::Attribute, index)
                .ok_or_else(|| {
                    Error::InvalidResource(format!("no active attribute at index {}", index))
                })?;
            let location = ctx.attribute_location(program, &info.name).ok_or_else(|| {
                Error::InvalidResource(format!(
                    "no location for active attribute '{}'",
                    info.name
                ))
            })?;
            reflected.push((info, location));
        }
    }

    let mut variables = FxHashMap::default();
    for (info, location) in reflected {
        let setter = AttributeSetter::new(Arc::clone(context), info.name.clone(), location);
        variables.insert(
            info.name.clone(),
            AttributeVariable {
                name: info.name,
                ty: info.ty,
                size: info.size,
                location,
                setter,
            },
        );
    }

    Ok(variables)
}
