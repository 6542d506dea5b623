//! Navmesh-RS library
//!
//! This library backs the navmesh-rs CLI for converting Godot NavigationMesh
//! resources to and from Wavefront OBJ.

pub mod cli;
pub mod commands;
pub mod utils;
