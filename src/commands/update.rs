use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_success, settings::Settings};
use std::path::PathBuf;

pub fn execute_update(settings: &Settings, path: Option<PathBuf>) -> Result<()> {
    let context = CommandContext::new(settings, path)?;

    if let Some(report) = context.client.update(Some(&context.target))? {
        println!("{report}");
    }
    print_success("Update complete");

    Ok(())
}
