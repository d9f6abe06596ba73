//! Non-interactive execution of external CVS client processes.
//!
//! This module runs one command at a time, blocks until it exits, and returns
//! a single normalized text capture. CVS clients interleave meaningful output
//! across stdout and stderr (`cvs status` of an unregistered file reports on
//! stderr, `cvs diff` exits nonzero when files differ), so both streams are
//! captured together and exit codes are not treated as failures.
//!
//! # Public API
//! - [`run`]: Execute an argument vector in a working directory and capture its output
//!
//! # Capture contract
//! - stdout and stderr are merged into one text, stdout first
//! - CRLF line endings are normalized to LF
//! - trailing spaces, newlines and carriage returns are stripped
//! - stdin is closed so the client can never block on a prompt

use crate::core::error::{CvsScoutError, Result};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Run `argv` with `cwd` as the working directory and capture its output.
///
/// The first element of `argv` is the program, the rest are its arguments.
/// Returns the merged, normalized text produced by the process. A nonzero
/// exit code is not an error; the captured text is still returned so callers
/// can interpret what the client reported.
///
/// # Errors
/// - [`CvsScoutError::EmptyCommandLine`] if `argv` is empty
/// - [`CvsScoutError::BinaryNotFound`] if the program does not exist
/// - [`CvsScoutError::SpawnFailed`] if the process cannot be started
/// - [`CvsScoutError::Terminated`] if the process was killed by a signal
pub fn run<S: AsRef<OsStr>>(argv: &[S], cwd: &Path) -> Result<String> {
    let (program, args) = argv.split_first().ok_or(CvsScoutError::EmptyCommandLine)?;

    log::debug!(
        "Running {} in {}",
        display_argv(argv),
        cwd.display()
    );

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| {
            // Spawning also reports NotFound for a missing working directory;
            // only blame the binary when the directory is there.
            if source.kind() == ErrorKind::NotFound && cwd.is_dir() {
                CvsScoutError::binary_not_found(PathBuf::from(program.as_ref()))
            } else {
                CvsScoutError::spawn_failed(PathBuf::from(program.as_ref()), source)
            }
        })?;

    if output.status.code().is_none() {
        return Err(CvsScoutError::terminated(PathBuf::from(program.as_ref())));
    }

    log::debug!("Process exited with {}", output.status);

    let mut captured = Vec::with_capacity(output.stdout.len() + output.stderr.len());
    captured.extend_from_slice(&output.stdout);
    captured.extend_from_slice(&output.stderr);

    Ok(normalize(&captured))
}

/// Normalize raw captured bytes into the text handed to parsers.
fn normalize(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw).replace("\r\n", "\n");
    text.trim_end_matches([' ', '\n', '\r']).to_string()
}

fn display_argv<S: AsRef<OsStr>>(argv: &[S]) -> String {
    argv.iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_empty_argv_is_rejected() {
        let argv: [&str; 0] = [];
        let result = run(&argv, Path::new("."));
        assert!(matches!(result, Err(CvsScoutError::EmptyCommandLine)));
    }

    #[test]
    fn test_missing_binary_reported_as_binary_not_found() {
        let result = run(&["/nonexistent/path/to/cvs-client"], Path::new("."));
        match result {
            Err(CvsScoutError::BinaryNotFound { binary }) => {
                assert_eq!(binary, PathBuf::from("/nonexistent/path/to/cvs-client"));
            }
            other => panic!("expected BinaryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_converts_crlf_to_lf() {
        assert_eq!(normalize(b"one\r\ntwo\r\nthree"), "one\ntwo\nthree");
    }

    #[test]
    fn test_normalize_strips_trailing_whitespace_only() {
        assert_eq!(normalize(b"  indented stays \n\r\n"), "  indented stays");
        assert_eq!(normalize(b"text   "), "text");
        assert_eq!(normalize(b""), "");
    }

    #[cfg(unix)]
    mod unix {
        use super::*;

        #[test]
        fn test_captures_stdout() {
            let output = run(&["echo", "hello"], Path::new(".")).unwrap();
            assert_eq!(output, "hello");
        }

        #[test]
        fn test_merges_stdout_and_stderr() {
            let output = run(
                &["sh", "-c", "echo visible; echo also-visible 1>&2"],
                Path::new("."),
            )
            .unwrap();
            assert_eq!(output, "visible\nalso-visible");
        }

        #[test]
        fn test_nonzero_exit_still_returns_output() {
            let output = run(&["sh", "-c", "echo partial; exit 3"], Path::new(".")).unwrap();
            assert_eq!(output, "partial");
        }

        #[test]
        fn test_crlf_output_is_normalized() {
            let output = run(
                &["sh", "-c", "printf 'first\\r\\nsecond\\r\\n'"],
                Path::new("."),
            )
            .unwrap();
            assert_eq!(output, "first\nsecond");
        }

        #[test]
        fn test_signal_termination_is_an_error() {
            let result = run(&["sh", "-c", "kill -KILL $$"], Path::new("."));
            assert!(matches!(result, Err(CvsScoutError::Terminated { .. })));
        }

        #[test]
        fn test_runs_in_given_working_directory() {
            let dir = tempfile::tempdir().unwrap();
            let output = run(&["pwd"], dir.path()).unwrap();
            // Canonicalize both sides; on macOS the tempdir is behind a symlink.
            let reported = std::fs::canonicalize(output).unwrap();
            let expected = std::fs::canonicalize(dir.path()).unwrap();
            assert_eq!(reported, expected);
        }
    }
}
