//! Validation functions for navigation meshes

use crate::error::{NavMeshError, Result};
use crate::types::NavMesh;

/// Validates that every polygon index stays within the vertex array
///
/// Parsers deliberately skip this check so that property harvesting and
/// partial recovery keep working on damaged inputs; conversion runs it
/// before any output is written.
pub fn validate_mesh(mesh: &NavMesh) -> Result<()> {
    for (polygon_index, polygon) in mesh.polygons.iter().enumerate() {
        for &index in &polygon.indices {
            if index as usize >= mesh.vertices.len() {
                return Err(NavMeshError::IndexOutOfBounds {
                    polygon: polygon_index,
                    index,
                    vertex_count: mesh.vertices.len(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Polygon, Vertex};

    fn unit_triangle() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_valid_mesh_passes() {
        let mesh = NavMesh {
            vertices: unit_triangle(),
            polygons: vec![Polygon::new(vec![0, 1, 2]), Polygon::new(vec![2, 1, 0])],
        };
        assert!(validate_mesh(&mesh).is_ok());
    }

    #[test]
    fn test_out_of_bounds_index_is_reported() {
        let mesh = NavMesh {
            vertices: unit_triangle(),
            polygons: vec![Polygon::new(vec![0, 1, 2]), Polygon::new(vec![1, 2, 3])],
        };
        match validate_mesh(&mesh) {
            Err(NavMeshError::IndexOutOfBounds {
                polygon,
                index,
                vertex_count,
            }) => {
                assert_eq!(polygon, 1);
                assert_eq!(index, 3);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("expected IndexOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_mesh_is_trivially_valid() {
        assert!(validate_mesh(&NavMesh::new()).is_ok());
    }
}
