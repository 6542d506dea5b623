//! Wavefront OBJ parsing and writing
//!
//! The interchange side of the converter. Parsing is line-based and
//! lenient: malformed `v`/`f` lines are skipped with a warning so one bad
//! record does not abort the whole conversion. Face indices are 1-based in
//! OBJ text and stored 0-based in memory.

use std::io::Write;

use crate::error::Result;
use crate::types::{NavMesh, Polygon, Vertex, format_scalar};

/// Comment written at the top of exported OBJ files
pub const HEADER_COMMENT: &str = "# Converted from Godot NavigationMesh";
/// Material library reference line (placeholder, no material file is written)
pub const MATERIAL_LINE: &str = "mtllib navmesh.mtl";
/// Object name line
pub const OBJECT_LINE: &str = "o navmesh";
/// Placeholder normal shared by every face
pub const NORMAL_LINE: &str = "vn -0.0000 -1.0000 -0.0000";
/// Smoothing group line
pub const SMOOTHING_LINE: &str = "s 0";

/// Parses OBJ text into a navigation mesh
///
/// Only `v` and `f` records contribute; blank lines and any other marker
/// (`vn`, `vt`, `s`, comments) are ignored. Face tokens may be bare indices
/// or `v/vt/vn` composites, of which only the vertex component is used. No
/// geometry validation happens here; see [`crate::validation::validate_mesh`].
///
/// # Examples
///
/// ```
/// use godot_navmesh::wavefront::parse_obj;
///
/// let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 0 1\nf 1 2 3\n");
/// assert_eq!(mesh.polygons[0].indices, vec![0, 1, 2]);
/// ```
pub fn parse_obj(text: &str) -> NavMesh {
    let mut mesh = NavMesh::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => match parse_vertex_record(tokens) {
                Some(vertex) => mesh.vertices.push(vertex),
                None => log::warn!("skipping malformed vertex line: {line}"),
            },
            Some("f") => match parse_face_record(tokens) {
                Some(polygon) => mesh.polygons.push(polygon),
                None => log::warn!("skipping malformed face line: {line}"),
            },
            _ => {}
        }
    }
    log::debug!(
        "parsed OBJ: {} vertices, {} faces",
        mesh.vertices.len(),
        mesh.polygons.len()
    );
    mesh
}

/// Writes a navigation mesh as OBJ text
///
/// The output structure is fixed: header comment, material library
/// reference, object name, vertex lines, one placeholder normal, smoothing
/// group, then face lines. Face tokens are emitted as `index//1` with
/// 1-based indices, leaving the texture slot empty and pointing every
/// corner at the placeholder normal.
pub fn write_obj<W: Write>(writer: &mut W, mesh: &NavMesh) -> Result<()> {
    writeln!(writer, "{HEADER_COMMENT}")?;
    writeln!(writer, "{MATERIAL_LINE}")?;
    writeln!(writer, "{OBJECT_LINE}")?;

    for vertex in &mesh.vertices {
        writeln!(
            writer,
            "v {} {} {}",
            format_scalar(vertex.x),
            format_scalar(vertex.y),
            format_scalar(vertex.z)
        )?;
    }

    writeln!(writer, "{NORMAL_LINE}")?;
    writeln!(writer, "{SMOOTHING_LINE}")?;

    for polygon in &mesh.polygons {
        let tokens: Vec<String> = polygon
            .indices
            .iter()
            .map(|index| format!("{}//1", index + 1))
            .collect();
        writeln!(writer, "f {}", tokens.join(" "))?;
    }

    Ok(())
}

fn parse_vertex_record<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Vertex> {
    let x: f32 = tokens.next()?.parse().ok()?;
    let y: f32 = tokens.next()?.parse().ok()?;
    let z: f32 = tokens.next()?.parse().ok()?;
    Some(Vertex::new(x, y, z))
}

fn parse_face_record<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<Polygon> {
    let mut indices = Vec::new();
    for token in tokens {
        // `2/5/9` carries texture and normal indices; only the vertex
        // component matters here
        let vertex_component = token.split('/').next()?;
        let index: u32 = vertex_component.parse().ok()?;
        // OBJ indices start at 1
        indices.push(index.checked_sub(1)?);
    }
    if indices.is_empty() {
        return None;
    }
    Some(Polygon::new(indices))
}
