//! Unit tests for the context vocabulary types

use crate::context::{BufferTarget, BufferUsage, ClearMask, GlType};

#[test]
fn test_buffer_defaults() {
    assert_eq!(BufferTarget::default(), BufferTarget::Array);
    assert_eq!(BufferUsage::default(), BufferUsage::StaticDraw);
}

#[test]
fn test_clear_mask_flags_are_distinct() {
    assert!(!ClearMask::COLOR.intersects(ClearMask::DEPTH));
    assert_eq!(ClearMask::COLOR | ClearMask::DEPTH, ClearMask::all());
}

#[test]
fn test_gl_type_glsl_names() {
    assert_eq!(GlType::Float.glsl_name(), "float");
    assert_eq!(GlType::FloatVec3.glsl_name(), "vec3");
    assert_eq!(GlType::FloatMat4.glsl_name(), "mat4");
    assert_eq!(GlType::Sampler2D.glsl_name(), "sampler2D");
    assert_eq!(format!("{}", GlType::IntVec2), "ivec2");
}
