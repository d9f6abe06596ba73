use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_info, settings::Settings};
use std::path::PathBuf;

pub fn execute_diff(settings: &Settings, path: Option<PathBuf>, unified: bool) -> Result<()> {
    let context = CommandContext::new(settings, path)?;

    // The flag forces unified output for this invocation; otherwise the
    // diff_unified setting decides
    let unified = unified || settings.diff_unified;

    match context.client.diff(Some(&context.target), unified)? {
        Some(diff) => println!("{diff}"),
        None => print_info("No differences found"),
    }

    Ok(())
}
