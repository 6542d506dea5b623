//! Core types for navigation mesh data

use std::fmt;

/// A single mesh vertex position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vertex {
    /// Creates a new vertex
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A navigation polygon: an ordered list of 0-based vertex indices
///
/// Arity is unconstrained; navigation meshes commonly mix triangles with
/// larger convex polygons. Index order defines the winding and is preserved
/// exactly through parsing and writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    /// Ordered 0-based indices into the vertex array
    pub indices: Vec<u32>,
}

impl Polygon {
    /// Creates a polygon from a list of vertex indices
    pub fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Number of vertices in this polygon
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether this polygon has no indices
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl From<Vec<u32>> for Polygon {
    fn from(indices: Vec<u32>) -> Self {
        Self::new(indices)
    }
}

/// An in-memory navigation mesh: vertices plus the polygons indexing them
///
/// Constructed fresh by one of the parsers, consumed once by a writer. There
/// is no shared state between conversions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavMesh {
    /// Vertex positions in encounter order
    pub vertices: Vec<Vertex>,
    /// Polygons in encounter order
    pub polygons: Vec<Polygon>,
}

impl NavMesh {
    /// Creates an empty navigation mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of polygons in the mesh
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the mesh is missing vertices or polygons
    ///
    /// A mesh with vertices but no polygons (or the reverse) is still
    /// considered empty for conversion purposes.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.polygons.is_empty()
    }
}

impl fmt::Display for NavMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NavigationMesh ({} vertices, {} polygons)",
            self.vertices.len(),
            self.polygons.len()
        )
    }
}

/// Formats a float the way the engine serializes it: integral values keep a
/// trailing `.0` so they stay float-typed on re-import.
pub(crate) fn format_scalar(value: f32) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
