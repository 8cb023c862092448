/// Declaration scanner for GLSL-like shader source
///
/// Not a validator: statements that do not look like variable declarations
/// are skipped, unknown type keywords are skipped. The scanner only needs to
/// answer what a real driver answers through program reflection.

use nebula_gl::context::{GlType, ShaderStage, VariableClass};

/// One scanned variable declaration
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Declaration {
    pub class: VariableClass,
    pub ty: GlType,
    pub name: String,
    pub size: i32,
}

/// Collect the variable declarations of one shader stage
///
/// `attribute` (and GLSL 3-style `in`) declarations only count as attributes
/// in the vertex stage; in the fragment stage `in` is a varying.
pub(crate) fn scan(stage: ShaderStage, source: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for statement in source.split(';') {
        let mut words = statement
            .split_whitespace()
            .filter(|word| !is_precision_qualifier(word));

        let Some(qualifier) = words.next() else {
            continue;
        };
        let class = match (qualifier, stage) {
            ("uniform", _) => VariableClass::Uniform,
            ("attribute", ShaderStage::Vertex) | ("in", ShaderStage::Vertex) => {
                VariableClass::Attribute
            }
            _ => continue,
        };

        let Some(ty) = words.next().and_then(gl_type_from_keyword) else {
            continue;
        };
        let Some(token) = words.next() else {
            continue;
        };

        let (name, size) = split_array_suffix(token);
        declarations.push(Declaration {
            class,
            ty,
            name: name.to_string(),
            size,
        });
    }

    declarations
}

/// Count whole-identifier occurrences of `name` in `source`
///
/// Used to decide activity: a variable mentioned only in its declaration is
/// optimized out.
pub(crate) fn identifier_occurrences(source: &str, name: &str) -> usize {
    if name.is_empty() {
        return 0;
    }
    let bytes = source.as_bytes();
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = source[from..].find(name) {
        let begin = from + pos;
        let end = begin + name.len();
        let boundary_before = begin == 0 || !is_identifier_byte(bytes[begin - 1]);
        let boundary_after = end == bytes.len() || !is_identifier_byte(bytes[end]);
        if boundary_before && boundary_after {
            count += 1;
        }
        from = end;
    }
    count
}

fn is_identifier_byte(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

fn is_precision_qualifier(word: &str) -> bool {
    matches!(word, "highp" | "mediump" | "lowp")
}

fn gl_type_from_keyword(keyword: &str) -> Option<GlType> {
    match keyword {
        "float" => Some(GlType::Float),
        "vec2" => Some(GlType::FloatVec2),
        "vec3" => Some(GlType::FloatVec3),
        "vec4" => Some(GlType::FloatVec4),
        "int" => Some(GlType::Int),
        "ivec2" => Some(GlType::IntVec2),
        "ivec3" => Some(GlType::IntVec3),
        "ivec4" => Some(GlType::IntVec4),
        "bool" => Some(GlType::Bool),
        "mat2" => Some(GlType::FloatMat2),
        "mat3" => Some(GlType::FloatMat3),
        "mat4" => Some(GlType::FloatMat4),
        "sampler2D" => Some(GlType::Sampler2D),
        "samplerCube" => Some(GlType::SamplerCube),
        _ => None,
    }
}

fn split_array_suffix(token: &str) -> (&str, i32) {
    match token.split_once('[') {
        Some((name, rest)) => {
            let size = rest.trim_end_matches(']').trim().parse().unwrap_or(1);
            (name, size)
        }
        None => (token, 1),
    }
}
