use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_success, settings::Settings};
use std::path::PathBuf;

pub fn execute_add(settings: &Settings, path: PathBuf) -> Result<()> {
    let context = CommandContext::new(settings, Some(path))?;

    if let Some(report) = context.client.add(&context.target)? {
        println!("{report}");
    }
    print_success(&format!("Scheduled {} for addition", context.target_name()));

    Ok(())
}
