//! Convert command implementation

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use godot_navmesh::conversion;

use crate::utils::io::{default_output_path, is_resource_path};
use crate::utils::progress::create_progress_bar;

pub fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    properties_from: Option<PathBuf>,
) -> Result<()> {
    use console::style;

    // Direction is decided by the input extension, never by content
    let to_obj = is_resource_path(&input);
    let output = output.unwrap_or_else(|| default_output_path(&input));

    let text = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let donor = match properties_from {
        Some(ref path) if to_obj => {
            log::warn!(
                "--properties-from is only consulted when converting OBJ input, ignoring {}",
                path.display()
            );
            None
        }
        Some(ref path) => Some(fs::read_to_string(path).with_context(|| {
            format!("Failed to read properties donor file: {}", path.display())
        })?),
        None => None,
    };

    let pb = create_progress_bar(100, "Converting navigation mesh");
    pb.set_position(25);

    let result = if to_obj {
        conversion::resource_to_obj(&text)
    } else {
        conversion::obj_to_resource(&text, donor.as_deref())
    }
    .with_context(|| format!("Failed to convert {}", input.display()))?;

    pb.set_position(75);

    fs::write(&output, &result.text)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    pb.finish_and_clear();

    println!(
        "✓ Converted {} vertices and {} polygons to {}",
        style(result.vertex_count).green(),
        style(result.polygon_count).green(),
        style(output.display()).cyan()
    );

    Ok(())
}
