//! Parser and writer for Godot NavigationMesh resources.
//!
//! This crate converts navigation mesh data between Godot's text resource
//! grammar (`.tres` with `PackedVector3Array` vertices and
//! `PackedInt32Array` polygons) and Wavefront OBJ. Polygons keep their
//! variable arity and winding order through the round trip, and the named
//! agent/region tuning properties survive the lossy OBJ detour via a donor
//! resource.
//!
//! # Examples
//!
//! ```
//! use godot_navmesh::conversion::obj_to_resource;
//!
//! let obj = "v 0 0 0\nv 1 0 0\nv 0 0 1\nf 1 2 3\n";
//! let result = obj_to_resource(obj, None).unwrap();
//! assert_eq!(result.vertex_count, 3);
//! assert!(result.text.starts_with("[gd_resource"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod conversion;
pub mod error;
pub mod properties;
pub mod resource;
pub mod types;
pub mod validation;
pub mod wavefront;

pub use conversion::Conversion;
pub use error::{NavMeshError, Result};
pub use properties::{PropertyKind, PropertySet, PropertyValue};
pub use types::{NavMesh, Polygon, Vertex};
