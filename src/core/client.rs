//! Path-scoped CVS operations through a pluggable client binary.
//!
//! This module provides the command façade used by every user-facing
//! operation. A client is bound to one located [`WorkingCopy`]; each
//! operation builds an argument vector of the form `binary subcommand
//! [flags] [relative-path]`, runs it with the working-copy root as the
//! working directory, and hands back the captured text.
//!
//! # Public API
//! - [`CvsClient`]: Capability set shared by all client flavors
//! - [`Cvs`]: The classic command-line client
//! - [`CvsNt`]: A CVSNT installation, driven through its bundled cvs executable
//! - [`Revision`]: Revision selector accepted by `annotate`
//! - [`open`]: Construct the configured flavor for a path
//!
//! # Key Features
//! - **Root-relative paths**: Callers pass absolute paths; the façade
//!   relativizes them against the working-copy root
//! - **Distinct no-output**: Operations return `Ok(None)` when the client
//!   printed nothing, so hosts can skip opening an empty result view
//! - **Revision resolution**: Symbolic revision selectors are resolved by
//!   parsing the client's own status output

use crate::core::error::{CvsScoutError, Result};
use crate::core::process;
use crate::core::settings::{ClientFlavor, Settings};
use crate::core::status;
use crate::core::workdir::WorkingCopy;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Revision selector for [`CvsClient::annotate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// The revision the working file is based on.
    Working,
    /// The newest revision stored in the repository.
    Repository,
    /// A literal revision number or tag, passed through unchanged.
    Literal(String),
}

/// Operations every supported client flavor provides.
///
/// All paths are absolute; operations taking `Option<&Path>` treat `None`
/// as "the whole working copy". Captured text follows the normalization
/// rules of [`process::run`], with `Ok(None)` standing for empty output.
pub trait CvsClient: Send + Sync {
    /// Raw `status` report for a path.
    fn status(&self, path: Option<&Path>) -> Result<Option<String>>;

    /// Differences between working files and their base revisions.
    fn diff(&self, path: Option<&Path>, unified: bool) -> Result<Option<String>>;

    /// Commit history. `show_tags` controls whether per-file tag lists are
    /// included.
    fn log(&self, path: Option<&Path>, show_tags: bool) -> Result<Option<String>>;

    /// Per-line authorship for one file, optionally at a selected revision.
    fn annotate(&self, path: &Path, revision: Option<&Revision>) -> Result<Option<String>>;

    /// Bring working files up to date with the repository.
    fn update(&self, path: Option<&Path>) -> Result<Option<String>>;

    /// Schedule a file for addition.
    fn add(&self, path: &Path) -> Result<Option<String>>;

    /// Schedule a file for removal.
    fn remove(&self, path: &Path) -> Result<Option<String>>;

    /// Discard local modifications and restore the repository revision.
    fn revert(&self, path: &Path) -> Result<Option<String>>;

    /// Commit local changes with `message`.
    fn commit(&self, path: Option<&Path>, message: &str) -> Result<Option<String>>;

    /// Status probe for a single file, scoped to exactly that file. Raw text
    /// for the classifier; never `None` because empty output is meaningful.
    fn probe_file(&self, path: &Path) -> Result<String>;

    /// Status probe for a directory, limited to its immediate entries.
    fn probe_dir(&self, path: &Path) -> Result<String>;

    /// The working copy this client is bound to.
    fn working_copy(&self) -> &WorkingCopy;
}

/// Construct the client flavor selected by `settings` for `path`.
///
/// `path` is the file or directory an editor event refers to; `None` means
/// the event has no saved path yet and no client can be built for it.
pub fn open(settings: &Settings, path: Option<&Path>) -> Result<Box<dyn CvsClient>> {
    let path = path.ok_or(CvsScoutError::PathUnavailable)?;
    let workdir = WorkingCopy::locate(path)?;
    let binary = settings.binary_path.clone();

    match settings.flavor {
        ClientFlavor::Cvs => Ok(Box::new(Cvs::new(binary, workdir)?)),
        ClientFlavor::CvsNt => Ok(Box::new(CvsNt::new(binary, workdir)?)),
    }
}

/// The classic command-line cvs client.
pub struct Cvs {
    binary: PathBuf,
    workdir: WorkingCopy,
}

impl Cvs {
    pub fn new(binary: PathBuf, workdir: WorkingCopy) -> Result<Self> {
        let binary = resolve_binary(binary, workdir.root());
        ensure_binary_exists(&binary)?;
        Ok(Self { binary, workdir })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn driver(&self) -> Driver<'_> {
        Driver {
            binary: &self.binary,
            workdir: &self.workdir,
        }
    }
}

impl CvsClient for Cvs {
    fn status(&self, path: Option<&Path>) -> Result<Option<String>> {
        self.driver().capture("status", &[], path)
    }

    fn diff(&self, path: Option<&Path>, unified: bool) -> Result<Option<String>> {
        self.driver().diff(path, unified)
    }

    fn log(&self, path: Option<&Path>, show_tags: bool) -> Result<Option<String>> {
        self.driver().log(path, show_tags)
    }

    fn annotate(&self, path: &Path, revision: Option<&Revision>) -> Result<Option<String>> {
        self.driver().annotate(path, revision)
    }

    fn update(&self, path: Option<&Path>) -> Result<Option<String>> {
        self.driver().capture("update", &[], path)
    }

    fn add(&self, path: &Path) -> Result<Option<String>> {
        self.driver().capture("add", &[], Some(path))
    }

    fn remove(&self, path: &Path) -> Result<Option<String>> {
        self.driver().capture("remove", &[], Some(path))
    }

    fn revert(&self, path: &Path) -> Result<Option<String>> {
        self.driver().revert(path)
    }

    fn commit(&self, path: Option<&Path>, message: &str) -> Result<Option<String>> {
        self.driver().commit(path, message)
    }

    fn probe_file(&self, path: &Path) -> Result<String> {
        self.driver().probe_file(path)
    }

    fn probe_dir(&self, path: &Path) -> Result<String> {
        self.driver().probe_dir(path)
    }

    fn working_copy(&self) -> &WorkingCopy {
        &self.workdir
    }
}

/// A CVSNT installation.
///
/// CVSNT ships a graphical front-end next to a regular command-line `cvs`
/// executable. Whatever binary the user points at, captured output must come
/// from that sibling executable, so the configured path is only used to find
/// the directory it lives in.
pub struct CvsNt {
    binary: PathBuf,
    workdir: WorkingCopy,
}

impl CvsNt {
    pub fn new(configured: PathBuf, workdir: WorkingCopy) -> Result<Self> {
        let binary = resolve_binary(sibling_cvs_binary(&configured), workdir.root());
        ensure_binary_exists(&binary)?;
        Ok(Self { binary, workdir })
    }

    /// The command-line executable actually invoked.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn driver(&self) -> Driver<'_> {
        Driver {
            binary: &self.binary,
            workdir: &self.workdir,
        }
    }
}

impl CvsClient for CvsNt {
    fn status(&self, path: Option<&Path>) -> Result<Option<String>> {
        self.driver().capture("status", &[], path)
    }

    fn diff(&self, path: Option<&Path>, unified: bool) -> Result<Option<String>> {
        self.driver().diff(path, unified)
    }

    fn log(&self, path: Option<&Path>, show_tags: bool) -> Result<Option<String>> {
        self.driver().log(path, show_tags)
    }

    fn annotate(&self, path: &Path, revision: Option<&Revision>) -> Result<Option<String>> {
        self.driver().annotate(path, revision)
    }

    fn update(&self, path: Option<&Path>) -> Result<Option<String>> {
        self.driver().capture("update", &[], path)
    }

    fn add(&self, path: &Path) -> Result<Option<String>> {
        self.driver().capture("add", &[], Some(path))
    }

    fn remove(&self, path: &Path) -> Result<Option<String>> {
        self.driver().capture("remove", &[], Some(path))
    }

    fn revert(&self, path: &Path) -> Result<Option<String>> {
        self.driver().revert(path)
    }

    fn commit(&self, path: Option<&Path>, message: &str) -> Result<Option<String>> {
        self.driver().commit(path, message)
    }

    fn probe_file(&self, path: &Path) -> Result<String> {
        self.driver().probe_file(path)
    }

    fn probe_dir(&self, path: &Path) -> Result<String> {
        self.driver().probe_dir(path)
    }

    fn working_copy(&self) -> &WorkingCopy {
        &self.workdir
    }
}

/// Shared command construction and execution for all flavors.
struct Driver<'a> {
    binary: &'a Path,
    workdir: &'a WorkingCopy,
}

impl Driver<'_> {
    /// Run `binary subcommand [flags] [relative-path]` from the root and
    /// capture the output, mapping empty output to `None`.
    fn capture(
        &self,
        subcommand: &str,
        flags: &[&str],
        path: Option<&Path>,
    ) -> Result<Option<String>> {
        let text = self.capture_raw(subcommand, flags, path)?;
        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn capture_raw(&self, subcommand: &str, flags: &[&str], path: Option<&Path>) -> Result<String> {
        let mut argv: Vec<OsString> = Vec::with_capacity(3 + flags.len());
        argv.push(self.binary.into());
        argv.push(subcommand.into());
        for flag in flags {
            argv.push(flag.into());
        }
        if let Some(path) = path {
            argv.push(self.workdir.relativize(path)?.into());
        }
        process::run(&argv, self.workdir.root())
    }

    fn diff(&self, path: Option<&Path>, unified: bool) -> Result<Option<String>> {
        let flags: &[&str] = if unified { &["-u"] } else { &[] };
        self.capture("diff", flags, path)
    }

    fn log(&self, path: Option<&Path>, show_tags: bool) -> Result<Option<String>> {
        let flags: &[&str] = if show_tags { &[] } else { &["-N"] };
        self.capture("log", flags, path)
    }

    fn annotate(&self, path: &Path, revision: Option<&Revision>) -> Result<Option<String>> {
        match revision {
            Some(selector) => {
                let resolved = self.resolve_revision(path, selector)?;
                self.capture("annotate", &["-r", &resolved], Some(path))
            }
            None => self.capture("annotate", &[], Some(path)),
        }
    }

    fn revert(&self, path: &Path) -> Result<Option<String>> {
        // No revert subcommand exists; update -C fetches a clean copy over
        // the local modifications.
        self.capture("update", &["-C"], Some(path))
    }

    fn commit(&self, path: Option<&Path>, message: &str) -> Result<Option<String>> {
        self.capture("commit", &["-m", message], path)
    }

    fn probe_file(&self, path: &Path) -> Result<String> {
        self.capture_raw("status", &[], Some(path))
    }

    fn probe_dir(&self, path: &Path) -> Result<String> {
        // -l keeps the probe to the directory's immediate entries.
        self.capture_raw("status", &["-l"], Some(path))
    }

    /// Turn a symbolic revision selector into a literal revision by asking
    /// the client for the file's status and reading the matching field.
    fn resolve_revision(&self, path: &Path, selector: &Revision) -> Result<String> {
        let field = match selector {
            Revision::Working => "Working revision:",
            Revision::Repository => "Repository revision:",
            Revision::Literal(revision) => return Ok(revision.clone()),
        };

        let report = self.capture_raw("status", &[], Some(path))?;
        status::revision_field(&report, field)
            .ok_or_else(|| CvsScoutError::revision_not_found(field, path))
    }
}

/// Anchor a relative multi-component binary path at the working-copy root.
///
/// Commands are spawned from the root, so a relative path in the settings
/// is taken relative to it. Bare names pass through unchanged for PATH
/// lookup at spawn time.
fn resolve_binary(binary: PathBuf, root: &Path) -> PathBuf {
    if binary.is_relative() && binary.components().count() > 1 {
        root.join(binary)
    } else {
        binary
    }
}

/// Reject configured paths that point at nothing.
///
/// A bare command name carries no directory and is resolved through PATH at
/// spawn time instead, so only multi-component paths are checked here.
fn ensure_binary_exists(binary: &Path) -> Result<()> {
    if binary.components().count() > 1 && !binary.is_file() {
        return Err(CvsScoutError::binary_not_found(binary));
    }
    Ok(())
}

/// Derive the command-line executable bundled with a CVSNT installation.
fn sibling_cvs_binary(configured: &Path) -> PathBuf {
    let name = if cfg!(windows) { "cvs.exe" } else { "cvs" };
    match configured.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}
