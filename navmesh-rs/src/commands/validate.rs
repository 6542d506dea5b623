//! Validate command implementation

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use godot_navmesh::resource::parse_resource;
use godot_navmesh::validation::validate_mesh;
use godot_navmesh::wavefront::parse_obj;

use crate::utils::io::is_resource_path;

pub fn execute(file: PathBuf) -> Result<()> {
    use console::style;

    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let mesh = if is_resource_path(&file) {
        parse_resource(&text)
            .with_context(|| format!("Failed to parse resource file: {}", file.display()))?
    } else {
        parse_obj(&text)
    };

    if mesh.is_empty() {
        anyhow::bail!(
            "Validation failed: mesh has {} vertices and {} polygons",
            mesh.vertex_count(),
            mesh.polygon_count()
        );
    }

    match validate_mesh(&mesh) {
        Ok(()) => {
            println!(
                "✓ Navigation mesh '{}' is valid ({} vertices, {} polygons)",
                style(file.display()).cyan(),
                style(mesh.vertex_count()).green(),
                style(mesh.polygon_count()).green()
            );
        }
        Err(err) => {
            anyhow::bail!("Validation failed: {}", err);
        }
    }

    Ok(())
}
