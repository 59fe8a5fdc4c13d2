//! Arbor CLI library
//!
//! This module contains the core CLI logic for the Arbor mind-map tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};
pub use error_adapter::{Reportable, to_reportable};

use std::fs;

use log::info;

use arbor::{ArborError, MindMapBuilder, generate};

/// Run the Arbor CLI application
///
/// Dispatches on the subcommand in `args`: laying out a tree or model
/// response into SVG, re-rendering a saved map, or printing the generation
/// prompt for a topic.
///
/// # Errors
///
/// Returns `ArborError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Saved-map errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ArborError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = MindMapBuilder::new(app_config);

    match &args.command {
        Command::Layout {
            input,
            output,
            save,
            response,
        } => {
            info!(input_path = input.as_str(), output_path = output.as_str(); "Laying out mind map");

            let source = fs::read_to_string(input)?;
            let tree = if *response {
                builder.parse_response(&source)?
            } else {
                builder.parse(&source)?
            };
            let scene = builder.layout(&tree)?;

            fs::write(output, builder.render_svg(&scene)?)?;
            info!(output_file = output.as_str(); "SVG exported successfully");

            if let Some(path) = save {
                fs::write(path, builder.save(&scene)?)?;
                info!(map_file = path.as_str(); "Map saved");
            }
        }
        Command::Render { map, output } => {
            info!(map_path = map.as_str(), output_path = output.as_str(); "Rendering saved map");

            let source = fs::read_to_string(map)?;
            let scene = builder.load(&source)?;

            fs::write(output, builder.render_svg(&scene)?)?;
            info!(output_file = output.as_str(); "SVG exported successfully");
        }
        Command::Prompt { topic } => {
            println!("{}", generate::mindmap_prompt(topic));
        }
    }

    Ok(())
}
