//! CLI logic for the Swimset practice tool.
//!
//! This module contains the core CLI logic for the Swimset practice tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use swimset::{PracticeBuilder, SwimsetError};

/// Run the Swimset CLI application
///
/// This function reads the input practice, parses it, and writes the
/// rendered workout sheets to the output file or to stdout.
///
/// # Errors
///
/// Returns `SwimsetError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - A requested group the practice does not have
pub fn run(args: &Args) -> Result<(), SwimsetError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing practice"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = PracticeBuilder::new(app_config);
    let practice = builder.parse(&source)?;
    if practice.is_empty() {
        warn!(input_path = args.input; "Practice has no sets");
    }
    let text = builder.render_text(&practice, args.group)?;

    match &args.output {
        Some(output) => {
            fs::write(output, text)?;
            info!(output_file = output; "Practice exported successfully");
        }
        None => print!("{text}"),
    }

    Ok(())
}
