//! Unit tests for setter values and the type dispatch table

use std::sync::{Arc, Mutex};

use crate::context::mock_context::MockContext;
use crate::context::{DrawingContext, GlType, UniformLocation};
use crate::error::Error;
use crate::renderer::variable::{UniformKind, UniformSetter, UniformValue};

fn mock() -> Arc<Mutex<MockContext>> {
    Arc::new(Mutex::new(MockContext::new()))
}

// ============================================================================
// DISPATCH TABLE
// ============================================================================

#[test]
fn test_dispatch_table_supported_types() {
    assert_eq!(UniformKind::from_gl_type(GlType::Float), Some(UniformKind::Float));
    assert_eq!(UniformKind::from_gl_type(GlType::FloatMat2), Some(UniformKind::Mat2));
    assert_eq!(UniformKind::from_gl_type(GlType::FloatMat3), Some(UniformKind::Mat3));
    assert_eq!(UniformKind::from_gl_type(GlType::FloatMat4), Some(UniformKind::Mat4));
}

#[test]
fn test_dispatch_table_unsupported_types() {
    // Every other tag of the closed enumeration has no registered setter
    let unsupported = [
        GlType::FloatVec2,
        GlType::FloatVec3,
        GlType::FloatVec4,
        GlType::Int,
        GlType::IntVec2,
        GlType::IntVec3,
        GlType::IntVec4,
        GlType::Bool,
        GlType::Sampler2D,
        GlType::SamplerCube,
    ];
    for ty in unsupported {
        assert_eq!(UniformKind::from_gl_type(ty), None, "expected no setter for {}", ty);
    }
}

#[test]
fn test_uniform_value_kind() {
    assert_eq!(UniformValue::Float(1.0).kind(), UniformKind::Float);
    assert_eq!(UniformValue::Mat2([0.0; 4]).kind(), UniformKind::Mat2);
    assert_eq!(UniformValue::Mat3([0.0; 9]).kind(), UniformKind::Mat3);
    assert_eq!(UniformValue::Mat4([0.0; 16]).kind(), UniformKind::Mat4);
}

// ============================================================================
// GLAM CONVERSIONS
// ============================================================================

#[test]
fn test_uniform_value_from_glam_is_column_major() {
    let matrix = glam::Mat4::from_cols_array(&[
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ]);
    let value = UniformValue::from(matrix);
    assert_eq!(
        value,
        UniformValue::Mat4([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
            16.0
        ])
    );
}

#[test]
fn test_uniform_value_from_f32() {
    assert_eq!(UniformValue::from(0.5), UniformValue::Float(0.5));
}

// ============================================================================
// UNIFORM SETTER
// ============================================================================

#[test]
fn test_mat4_setter_forwards_exact_array_untransposed() {
    let context = mock();
    let shared: Arc<Mutex<dyn DrawingContext>> = context.clone();
    let setter = UniformSetter::new(
        shared,
        "u_mvp".to_string(),
        UniformKind::Mat4,
        UniformLocation(3),
    );

    // Accessors expose what the setter was synthesized with
    assert_eq!(setter.name(), "u_mvp");
    assert_eq!(setter.kind(), UniformKind::Mat4);
    assert_eq!(setter.location(), UniformLocation(3));

    let values: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 3.0, 4.0, 1.0,
    ];
    setter.set(UniformValue::Mat4(values)).unwrap();

    let ctx = context.lock().unwrap();
    let calls = &ctx.calls;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], format!("uniform_matrix_4fv(3, false, {:?})", values));
}

#[test]
fn test_float_setter_idempotent() {
    let context = mock();
    let shared: Arc<Mutex<dyn DrawingContext>> = context.clone();
    let setter = UniformSetter::new(
        shared,
        "u_time".to_string(),
        UniformKind::Float,
        UniformLocation(0),
    );

    setter.set(42.0).unwrap();
    setter.set(42.0).unwrap();

    // Last-write-wins: both calls forward the same value, no accumulation
    let ctx = context.lock().unwrap();
    let calls = &ctx.calls;
    assert_eq!(calls.as_slice(), ["uniform_1f(0, 42)", "uniform_1f(0, 42)"]);
}

#[test]
fn test_setter_rejects_mismatched_value() {
    let context = mock();
    let shared: Arc<Mutex<dyn DrawingContext>> = context.clone();
    let setter = UniformSetter::new(
        shared,
        "u_mvp".to_string(),
        UniformKind::Mat4,
        UniformLocation(1),
    );

    let result = setter.set(1.0);
    assert_eq!(
        result,
        Err(Error::UniformTypeMismatch {
            name: "u_mvp".to_string(),
            expected: UniformKind::Mat4,
            got: UniformKind::Float,
        })
    );

    // Nothing reached the context
    assert!(context.lock().unwrap().calls.is_empty());
}
