use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_success, settings::Settings};
use std::path::PathBuf;

pub fn execute_commit(settings: &Settings, path: Option<PathBuf>, message: &str) -> Result<()> {
    let context = CommandContext::new(settings, path)?;

    if let Some(report) = context.client.commit(Some(&context.target), message)? {
        println!("{report}");
    }
    print_success("Commit finished");

    Ok(())
}
