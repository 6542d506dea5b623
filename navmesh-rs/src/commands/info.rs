//! Info command implementation

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use godot_navmesh::NavMesh;
use godot_navmesh::resource::{parse_properties, parse_resource};
use godot_navmesh::wavefront::parse_obj;

use crate::utils::format::format_bytes;
use crate::utils::io::is_resource_path;
use crate::utils::table::create_table;

pub fn execute(file: PathBuf) -> Result<()> {
    use console::style;
    use prettytable::row;

    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let is_resource = is_resource_path(&file);
    let mesh = if is_resource {
        parse_resource(&text)
            .with_context(|| format!("Failed to parse resource file: {}", file.display()))?
    } else {
        parse_obj(&text)
    };

    println!("\n{}", style("Navigation Mesh Information").bold().underlined());
    println!("File: {}", style(file.display()).cyan());
    println!(
        "Format: {}",
        style(if is_resource { "Godot resource" } else { "Wavefront OBJ" }).yellow()
    );
    println!("Size: {}", style(format_bytes(text.len() as u64)).yellow());
    println!("Vertices: {}", style(mesh.vertex_count()).green());
    println!("Polygons: {}", style(mesh.polygon_count()).green());

    if let Some((min, max)) = arity_range(&mesh) {
        if min == max {
            println!("Polygon arity: {}", style(min).green());
        } else {
            println!(
                "Polygon arity: {} to {}",
                style(min).green(),
                style(max).green()
            );
        }
    }

    if is_resource {
        let properties = parse_properties(&text);
        if !properties.is_empty() {
            println!("\n{}", style("Tuning Properties").bold());
            let mut table = create_table(vec!["Property", "Value"]);
            for (key, value) in properties.iter() {
                table.add_row(row![style(key).cyan(), value]);
            }
            table.printstd();
        }
    }

    Ok(())
}

/// Smallest and largest polygon arity in the mesh
fn arity_range(mesh: &NavMesh) -> Option<(usize, usize)> {
    let min = mesh.polygons.iter().map(|p| p.len()).min()?;
    let max = mesh.polygons.iter().map(|p| p.len()).max()?;
    Some((min, max))
}
