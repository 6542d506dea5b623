//! I/O and path utilities

use std::path::{Path, PathBuf};

/// Whether a path carries the Godot text resource extension
pub fn is_resource_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tres"))
}

/// Default output path for a conversion: the input with its extension
/// swapped between the two grammars
pub fn default_output_path(input: &Path) -> PathBuf {
    if is_resource_path(input) {
        input.with_extension("obj")
    } else {
        input.with_extension("tres")
    }
}
