//! Godot NavigationMesh resource text parsing and writing
//!
//! The resource grammar is a text scene file with a `[gd_resource ...]`
//! header and a `[resource]` section holding `vertices = PackedVector3Array(...)`,
//! `polygons = [PackedInt32Array(...), ...]`, and zero or more tuning
//! property assignments. Field extraction scans for the assignment and
//! captures the balanced delimiter span rather than pattern-matching a
//! substring, so embedded newlines and reordered fields are handled.

use std::io::Write;

use crate::error::{NavMeshError, Result};
use crate::properties::{DEFAULT_PROPERTIES, PropertyKind, PropertySet, PropertyValue};
use crate::types::{NavMesh, Polygon, Vertex, format_scalar};

/// Header line written at the top of every NavigationMesh resource
pub const RESOURCE_HEADER: &str = "[gd_resource type=\"NavigationMesh\" format=3]";

/// Parses the vertex and polygon fields of a NavigationMesh resource
///
/// Both fields are required. Tuning properties are extracted separately via
/// [`parse_properties`], which does not need the mesh fields to be present.
///
/// # Examples
///
/// ```
/// use godot_navmesh::resource::parse_resource;
///
/// let text = r#"[gd_resource type="NavigationMesh" format=3]
///
/// [resource]
/// vertices = PackedVector3Array(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
/// polygons = [PackedInt32Array(0, 1, 2)]
/// "#;
///
/// let mesh = parse_resource(text).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.polygon_count(), 1);
/// ```
pub fn parse_resource(text: &str) -> Result<NavMesh> {
    let vertices = parse_vertices(text)?;
    let polygons = parse_polygons(text)?;
    log::debug!(
        "parsed resource: {} vertices, {} polygons",
        vertices.len(),
        polygons.len()
    );
    Ok(NavMesh { vertices, polygons })
}

/// Extracts tuning properties from any resource text
///
/// Scans each line for a `key = value` assignment whose key is in the
/// property catalog and coerces the value per its kind. Unknown keys and
/// uncoercible values are skipped. The mesh fields need not be present, so
/// this can harvest properties from a donor resource on its own.
pub fn parse_properties(text: &str) -> PropertySet {
    let mut set = PropertySet::new();
    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        let Some(kind) = PropertyKind::of(key) else {
            continue;
        };
        let parsed = match kind {
            PropertyKind::Float => value.parse::<f32>().ok().map(PropertyValue::Float),
            PropertyKind::Bool => match value {
                "true" => Some(PropertyValue::Bool(true)),
                "false" => Some(PropertyValue::Bool(false)),
                _ => None,
            },
        };
        match parsed {
            Some(value) => {
                set.insert(key, value);
            }
            None => log::debug!("ignoring unparseable value for {key}: `{value}`"),
        }
    }
    set
}

/// Writes a NavigationMesh resource
///
/// Vertices are emitted as one flat comma-joined coordinate list, polygons
/// as nested integer-array literals with their stored 0-based indices. A
/// supplied non-empty property set is written verbatim in its iteration
/// order; otherwise the fixed default block is written.
pub fn write_resource<W: Write>(
    writer: &mut W,
    mesh: &NavMesh,
    properties: Option<&PropertySet>,
) -> Result<()> {
    writeln!(writer, "{RESOURCE_HEADER}")?;
    writeln!(writer)?;
    writeln!(writer, "[resource]")?;

    let coordinates: Vec<String> = mesh
        .vertices
        .iter()
        .flat_map(|v| [format_scalar(v.x), format_scalar(v.y), format_scalar(v.z)])
        .collect();
    writeln!(writer, "vertices = PackedVector3Array({})", coordinates.join(", "))?;

    let arrays: Vec<String> = mesh
        .polygons
        .iter()
        .map(|polygon| {
            let indices: Vec<String> = polygon.indices.iter().map(u32::to_string).collect();
            format!("PackedInt32Array({})", indices.join(", "))
        })
        .collect();
    writeln!(writer, "polygons = [{}]", arrays.join(", "))?;

    match properties {
        Some(set) if !set.is_empty() => {
            for (key, value) in set.iter() {
                writeln!(writer, "{key} = {value}")?;
            }
        }
        _ => {
            for (key, value) in DEFAULT_PROPERTIES {
                writeln!(writer, "{key} = {value}")?;
            }
        }
    }

    Ok(())
}

fn parse_vertices(text: &str) -> Result<Vec<Vertex>> {
    let args = call_argument(text, "vertices", "PackedVector3Array")
        .ok_or(NavMeshError::MissingField("vertices"))?;

    let mut floats = Vec::new();
    if !args.trim().is_empty() {
        for token in args.split(',') {
            let token = token.trim();
            let value: f32 = token.parse().map_err(|_| NavMeshError::MalformedNumeric {
                field: "vertices",
                message: format!("invalid float literal `{token}`"),
            })?;
            floats.push(value);
        }
    }

    if floats.len() % 3 != 0 {
        return Err(NavMeshError::MalformedNumeric {
            field: "vertices",
            message: format!("{} coordinates do not form whole (x, y, z) triples", floats.len()),
        });
    }

    Ok(floats
        .chunks_exact(3)
        .map(|triple| Vertex::new(triple[0], triple[1], triple[2]))
        .collect())
}

fn parse_polygons(text: &str) -> Result<Vec<Polygon>> {
    let list = bracket_argument(text, "polygons").ok_or(NavMeshError::MissingField("polygons"))?;

    let mut polygons = Vec::new();
    let mut rest = list;
    while let Some(found) = rest.find("PackedInt32Array") {
        let after_name = rest[found + "PackedInt32Array".len()..].trim_start();
        let Some(after_paren) = after_name.strip_prefix('(') else {
            return Err(NavMeshError::MalformedNumeric {
                field: "polygons",
                message: "PackedInt32Array without an argument list".to_string(),
            });
        };
        let end = balanced_end(after_paren, '(', ')').ok_or_else(|| {
            NavMeshError::MalformedNumeric {
                field: "polygons",
                message: "unterminated PackedInt32Array literal".to_string(),
            }
        })?;

        polygons.push(parse_index_array(&after_paren[..end])?);
        rest = &after_paren[end + 1..];
    }

    Ok(polygons)
}

fn parse_index_array(args: &str) -> Result<Polygon> {
    let mut indices = Vec::new();
    if !args.trim().is_empty() {
        for token in args.split(',') {
            let token = token.trim();
            let index: u32 = token.parse().map_err(|_| NavMeshError::MalformedNumeric {
                field: "polygons",
                message: format!("invalid index literal `{token}`"),
            })?;
            indices.push(index);
        }
    }
    Ok(Polygon::new(indices))
}

/// Finds `field = wrapper(...)` and returns the argument span
fn call_argument<'a>(text: &'a str, field: &str, wrapper: &str) -> Option<&'a str> {
    let value = assignment_value(text, field)?;
    let after_name = value.strip_prefix(wrapper)?.trim_start();
    let after_paren = after_name.strip_prefix('(')?;
    let end = balanced_end(after_paren, '(', ')')?;
    Some(&after_paren[..end])
}

/// Finds `field = [...]` and returns the bracketed span
fn bracket_argument<'a>(text: &'a str, field: &str) -> Option<&'a str> {
    let value = assignment_value(text, field)?;
    let after_bracket = value.strip_prefix('[')?;
    let end = balanced_end(after_bracket, '[', ']')?;
    Some(&after_bracket[..end])
}

/// Locates `field` as a whole identifier followed by `=` and returns the
/// text after the equals sign
fn assignment_value<'a>(text: &'a str, field: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(found) = text[start..].find(field) {
        let at = start + found;
        let end = at + field.len();
        let boundary_before = at == 0 || !is_ident_byte(bytes[at - 1]);
        let boundary_after = end == text.len() || !is_ident_byte(bytes[end]);
        if boundary_before && boundary_after {
            if let Some(value) = text[end..].trim_start().strip_prefix('=') {
                return Some(value.trim_start());
            }
        }
        start = end;
    }
    None
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Index of the delimiter closing the span that starts just after an opener
fn balanced_end(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
    }
    None
}
