//! Conversion between the resource and interchange representations
//!
//! The orchestration layer: parse one grammar, validate, write the other.
//! Direction is chosen by the caller (the CLI dispatches on file
//! extension); nothing here sniffs content. Each conversion is a
//! self-contained unit of work with no state shared across invocations.

use std::io;

use crate::error::{NavMeshError, Result};
use crate::resource;
use crate::types::NavMesh;
use crate::validation::validate_mesh;
use crate::wavefront;

/// The outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The complete output text
    pub text: String,
    /// Number of vertices carried across
    pub vertex_count: usize,
    /// Number of polygons carried across
    pub polygon_count: usize,
}

/// Converts NavigationMesh resource text to OBJ text
///
/// Fails if the resource fields are missing or malformed, if the parsed
/// mesh has no vertices or no polygons, or if a polygon index is out of
/// bounds. Tuning properties have no OBJ representation and are dropped;
/// use a donor resource with [`obj_to_resource`] to carry them back.
pub fn resource_to_obj(input: &str) -> Result<Conversion> {
    let mesh = resource::parse_resource(input)?;
    render(&mesh, |writer, mesh| wavefront::write_obj(writer, mesh))
}

/// Converts OBJ text to NavigationMesh resource text
///
/// When donor resource text is supplied, its tuning properties are
/// harvested and written into the output; otherwise the writer falls back
/// to the fixed default block. Fails if the parsed mesh has no vertices or
/// no faces, or if a face index is out of bounds.
pub fn obj_to_resource(input: &str, donor: Option<&str>) -> Result<Conversion> {
    let mesh = wavefront::parse_obj(input);
    let properties = donor.map(resource::parse_properties);
    render(&mesh, |writer, mesh| {
        resource::write_resource(writer, mesh, properties.as_ref())
    })
}

fn render(
    mesh: &NavMesh,
    write: impl FnOnce(&mut Vec<u8>, &NavMesh) -> Result<()>,
) -> Result<Conversion> {
    if mesh.vertices.is_empty() {
        return Err(NavMeshError::EmptyMesh("no vertices parsed"));
    }
    if mesh.polygons.is_empty() {
        return Err(NavMeshError::EmptyMesh("no polygons parsed"));
    }
    validate_mesh(mesh)?;

    let mut buffer = Vec::new();
    write(&mut buffer, mesh)?;
    let text = String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(Conversion {
        text,
        vertex_count: mesh.vertex_count(),
        polygon_count: mesh.polygon_count(),
    })
}
