use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_info, settings::Settings};
use std::path::PathBuf;

pub fn execute_log(settings: &Settings, path: Option<PathBuf>, no_tags: bool) -> Result<()> {
    let context = CommandContext::new(settings, path)?;

    // Tag lists appear unless the flag or the log_show_tags setting
    // suppresses them
    let show_tags = settings.log_show_tags && !no_tags;

    match context.client.log(Some(&context.target), show_tags)? {
        Some(history) => println!("{history}"),
        None => print_info("No log information available"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CvsScoutError;
    use tempfile::TempDir;

    #[test]
    fn test_execute_log_outside_a_working_copy() {
        let temp = TempDir::new().unwrap();
        let result = execute_log(&Settings::default(), Some(temp.path().join("file.c")), false);
        assert!(matches!(
            result,
            Err(CvsScoutError::RepositoryNotFound { .. })
        ));
    }
}
