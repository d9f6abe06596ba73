use crate::commands::context::CommandContext;
use crate::core::{client::Revision, error::Result, print_info, settings::Settings};
use std::path::PathBuf;

pub fn execute_annotate(
    settings: &Settings,
    path: PathBuf,
    revision: Option<String>,
    working: bool,
    repository: bool,
) -> Result<()> {
    // The symbolic selectors resolve through the file's status report; a
    // literal revision passes straight through. No selector at all lets the
    // client annotate its default head revision.
    let selector = if working {
        Some(Revision::Working)
    } else if repository {
        Some(Revision::Repository)
    } else {
        revision.map(Revision::Literal)
    };

    let context = CommandContext::new(settings, Some(path))?;

    match context.client.annotate(&context.target, selector.as_ref())? {
        Some(annotations) => println!("{annotations}"),
        None => print_info("No annotations available"),
    }

    Ok(())
}
