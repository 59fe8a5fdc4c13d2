//! Command-line argument definitions for the Arbor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each subcommand covers one workflow; configuration file
//! selection and logging verbosity apply to all of them.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Arbor mind-map tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lay out a mind-map tree and render it to SVG
    Layout {
        /// Path to a tree JSON file, or a model response with --response
        input: String,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,

        /// Also save the laid out map to this path
        #[arg(long)]
        save: Option<String>,

        /// Treat the input as a model response containing a ```json block
        #[arg(long)]
        response: bool,
    },

    /// Render a saved map to SVG
    Render {
        /// Path to the saved map
        map: String,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,
    },

    /// Print the prompt used to generate a mind map for a topic
    Prompt {
        /// Topic of the mind map
        topic: String,
    },
}
