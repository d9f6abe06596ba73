use crate::commands::context::CommandContext;
use crate::core::{
    cache::StatusCache,
    error::{CvsScoutError, Result},
    settings::Settings,
    status,
    status::FileStatus,
};
use std::path::PathBuf;

/// Print the classified status label for one or more paths.
///
/// A single path prints only the label, which keeps the output trivial to
/// consume from editor glue. Several paths print one `label<TAB>path` line
/// each. Paths outside any working copy read as `Unknown`.
pub fn execute_check(settings: &Settings, paths: Vec<PathBuf>) -> Result<()> {
    let cache = StatusCache::new(settings.cache_ttl());
    let single = paths.len() <= 1;
    let targets: Vec<Option<PathBuf>> = if paths.is_empty() {
        vec![None]
    } else {
        paths.into_iter().map(Some).collect()
    };

    for path in targets {
        let (status, shown) = check_one(settings, &cache, path)?;
        if single {
            println!("{}", status.label());
        } else {
            println!("{}\t{}", status.label(), shown.display());
        }
    }

    Ok(())
}

fn check_one(
    settings: &Settings,
    cache: &StatusCache,
    path: Option<PathBuf>,
) -> Result<(FileStatus, PathBuf)> {
    let context = match CommandContext::new(settings, path) {
        Ok(context) => context,
        Err(CvsScoutError::RepositoryNotFound { start, .. }) => {
            log::debug!("{} is not inside a working copy", start.display());
            return Ok((FileStatus::Unknown, start));
        }
        Err(error) => return Err(error),
    };

    let status = cache.get_or_classify(&context.target, || {
        status::classify(context.client.as_ref(), &context.target)
    })?;
    Ok((status, context.target))
}
