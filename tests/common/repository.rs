//! Checkout management and setup utilities
//!
//! Provides functions for creating throwaway CVS working copies and fake
//! client executables with various behaviors for comprehensive testing
//! scenarios.

#![allow(dead_code)]

use cvs_scout::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test checkout setup result containing both the temporary directory
/// and the working-copy path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestCheckout {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestCheckout {
    /// Get the working-copy root as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding fake client executables, next to the checkout
    pub fn bin_dir(&self) -> PathBuf {
        self.temp_dir.path().join("bin")
    }
}

/// Sets up a fresh CVS checkout for testing
///
/// Creates a temporary directory holding a working copy with `CVS/`
/// metadata at the root and in a nested `sub/` directory, plus source
/// files. `src/` deliberately carries no metadata of its own, so
/// `src/lib.c` belongs to the root while `sub/util.c` belongs to the
/// nested copy. No client is involved; the metadata directories alone are
/// enough for working-copy discovery.
///
/// # Returns
///
/// A `TestCheckout` containing both the temporary directory (which must be
/// kept alive) and the working-copy path.
pub fn setup_checkout() -> Result<TestCheckout> {
    let temp_dir = TempDir::new()?;
    // Symlinked temp locations would otherwise disagree with the spawned
    // process's view of its own working directory.
    let base = fs::canonicalize(temp_dir.path())?;
    let path = base.join("checkout");

    fs::create_dir_all(path.join("CVS"))?;
    fs::create_dir_all(path.join("sub").join("CVS"))?;
    create_file(&path, "main.c", "int main(void) { return 0; }\n")?;
    create_file(&path, "src/lib.c", "int lib(void) { return 1; }\n")?;
    create_file(&path, "sub/util.c", "void util(void) {}\n")?;

    Ok(TestCheckout { temp_dir, path })
}

/// Creates a file with specified content in the working copy
///
/// # Arguments
///
/// * `root` - Working-copy root
/// * `filename` - Relative path of the file to create
/// * `content` - Content to write to the file
pub fn create_file(root: &Path, filename: &str, content: &str) -> Result<()> {
    let file = root.join(filename);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file, content)?;
    Ok(())
}

/// Writes an executable shell script standing in for the cvs client
///
/// The script body runs under `/bin/sh` with the working-copy root as its
/// working directory and the subcommand as `$1`. Returns the path to pass
/// via `--binary`.
#[cfg(unix)]
pub fn write_stub_client(checkout: &TestCheckout, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let dir = checkout.bin_dir();
    fs::create_dir_all(&dir)?;
    let stub = dir.join("cvs");
    fs::write(&stub, format!("#!/bin/sh\n{body}\n"))?;

    let mut perms = fs::metadata(&stub)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub, perms)?;
    Ok(stub)
}

/// Stub client that answers every invocation with a fixed report line
#[cfg(unix)]
pub fn stub_with_report(checkout: &TestCheckout, report: &str) -> Result<PathBuf> {
    write_stub_client(checkout, &format!(r#"echo "{report}""#))
}

/// Stub client that prints the argument vector it was invoked with
#[cfg(unix)]
pub fn stub_echoing_argv(checkout: &TestCheckout) -> Result<PathBuf> {
    write_stub_client(checkout, r#"echo "argv: $@""#)
}

/// Stub client that stays silent and exits successfully
#[cfg(unix)]
pub fn stub_silent(checkout: &TestCheckout) -> Result<PathBuf> {
    write_stub_client(checkout, "exit 0")
}
