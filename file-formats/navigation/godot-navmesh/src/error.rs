//! Error handling for navigation mesh parsing and conversion

use std::io;
use thiserror::Error;

/// Errors that can occur when working with navigation mesh files
#[derive(Debug, Error)]
pub enum NavMeshError {
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required field is absent from the resource text
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A token expected to parse as a number did not
    #[error("Malformed numeric data in {field}: {message}")]
    MalformedNumeric {
        /// The field being parsed when the error occurred
        field: &'static str,
        /// Description of the offending data
        message: String,
    },

    /// A parser produced zero vertices or zero polygons
    #[error("Parsed mesh is empty: {0}")]
    EmptyMesh(&'static str),

    /// A polygon references a vertex index outside the vertex array
    #[error("Polygon {polygon} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Index of the offending polygon
        polygon: usize,
        /// The out-of-range vertex index
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

/// Type alias for Results from navigation mesh operations
pub type Result<T> = std::result::Result<T, NavMeshError>;
