use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_info, settings::Settings};
use std::path::PathBuf;

pub fn execute_status(settings: &Settings, path: Option<PathBuf>) -> Result<()> {
    let context = CommandContext::new(settings, path)?;

    match context.client.status(Some(&context.target))? {
        Some(report) => println!("{report}"),
        None => print_info("No status information available"),
    }

    Ok(())
}
