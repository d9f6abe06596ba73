//! Shared setup for path-scoped commands.
//!
//! Every command starts the same way: figure out which absolute path the
//! invocation refers to, locate the working copy containing it, and build
//! the configured client flavor bound to that copy. [`CommandContext`] does
//! that once so the commands stay small.

use crate::core::{client, client::CvsClient, error::Result, settings::Settings};
use std::env;
use std::path::PathBuf;

pub struct CommandContext {
    pub client: Box<dyn CvsClient>,
    pub target: PathBuf,
}

impl CommandContext {
    /// Resolve the target path and open the configured client for it.
    ///
    /// A relative `path` is resolved against the current directory; no
    /// `path` at all means the current directory itself.
    pub fn new(settings: &Settings, path: Option<PathBuf>) -> Result<Self> {
        let target = resolve_target(path)?;
        let client = client::open(settings, Some(&target))?;
        Ok(Self { client, target })
    }

    /// Short name of the target for user-facing messages.
    pub fn target_name(&self) -> String {
        self.target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target.display().to_string())
    }
}

fn resolve_target(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => Ok(env::current_dir()?.join(path)),
        None => Ok(env::current_dir()?),
    }
}
