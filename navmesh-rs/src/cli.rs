//! Root CLI structure for navmesh-rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navmesh-rs")]
#[command(about = "Convert Godot NavigationMesh resources to and from Wavefront OBJ", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert between resource and OBJ representations
    Convert {
        /// Path to the input file (.tres converts to OBJ, anything else to .tres)
        input: PathBuf,

        /// Path to write the converted file (defaults to the input with its extension swapped)
        output: Option<PathBuf>,

        /// Resource file to harvest tuning properties from (OBJ input only)
        #[arg(long, value_name = "RESOURCE")]
        properties_from: Option<PathBuf>,
    },

    /// Display information about a navigation mesh file
    Info {
        /// Path to the resource or OBJ file
        file: PathBuf,
    },

    /// Validate a navigation mesh file
    Validate {
        /// Path to the resource or OBJ file
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
