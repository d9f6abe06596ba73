//! Type-safe CVS file status classification.
//!
//! This module defines [`FileStatus`] which replaces raw client output with a
//! proper enumeration, plus the classification routines that map captured
//! `cvs status` text onto it. CVS clients never promise machine-readable
//! output, so classification is substring matching against the small set of
//! phrases every CVS and CVSNT release has printed for decades.
//!
//! # Public API
//! - [`FileStatus`]: Main enumeration for all CVS file status types
//! - [`classify`]: Probe a path through a client and classify the output
//! - [`revision_field`]: Extract a revision number from status output
//!
//! # Key Features
//! - **Ordered matching**: The phrase table is scanned in a fixed order and
//!   the first match wins
//! - **Directory collapsing**: Directory probes only distinguish states that
//!   require contacting the repository; everything else reads as up to date
//! - **Display formatting**: Short codes for status bars, full labels for
//!   humans

use crate::core::client::CvsClient;
use crate::core::error::Result;
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// CVS file status enum to replace raw status-output strings
///
/// Each variant corresponds to one phrase a CVS client prints in the
/// `Status:` line of its status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    /// File is not registered in the repository
    Unknown,
    /// File matches the latest repository revision
    UpToDate,
    /// File has uncommitted local edits
    LocallyModified,
    /// File is scheduled for addition but not committed
    LocallyAdded,
    /// File is scheduled for removal but not committed
    LocallyRemoved,
    /// File is missing locally and must be checked out
    NeedsCheckout,
    /// Repository has a newer revision with no local edits
    NeedsPatch,
    /// Repository has a newer revision and the file has local edits
    NeedsMerge,
    /// A merge produced conflict markers that are not resolved
    UnresolvedConflict,
}

/// Phrase table scanned in order during classification. First match wins.
const STATUS_PHRASES: [(&str, FileStatus); 9] = [
    ("Unknown", FileStatus::Unknown),
    ("Up-to-date", FileStatus::UpToDate),
    ("Locally Modified", FileStatus::LocallyModified),
    ("Locally Added", FileStatus::LocallyAdded),
    ("Locally Removed", FileStatus::LocallyRemoved),
    ("Needs Checkout", FileStatus::NeedsCheckout),
    ("Needs Patch", FileStatus::NeedsPatch),
    ("Needs Merge", FileStatus::NeedsMerge),
    ("Unresolved Conflict", FileStatus::UnresolvedConflict),
];

impl FileStatus {
    /// Classify the captured output of a status probe for a single file.
    ///
    /// Matching is case-sensitive and independent of where in the text the
    /// phrase appears. Output that matches no phrase in the table, including
    /// empty output, classifies as [`FileStatus::Unknown`].
    pub fn from_file_output(output: &str) -> FileStatus {
        for (phrase, status) in STATUS_PHRASES {
            if output.contains(phrase) {
                return status;
            }
        }
        FileStatus::Unknown
    }

    /// Classify the captured output of a status probe for a directory.
    ///
    /// Only the states that require contacting the repository are meaningful
    /// for a directory as a whole; any other output collapses to
    /// [`FileStatus::UpToDate`].
    pub fn from_dir_output(output: &str) -> FileStatus {
        for (phrase, status) in STATUS_PHRASES {
            if status.requires_update() && output.contains(phrase) {
                return status;
            }
        }
        FileStatus::UpToDate
    }

    /// Get the single-character code for status bars and compact listings
    ///
    /// `Unknown` intentionally maps to the empty string so unregistered files
    /// show no marker at all.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Unknown => "",
            FileStatus::UpToDate => "U",
            FileStatus::LocallyModified => "M",
            FileStatus::LocallyAdded => "A",
            FileStatus::LocallyRemoved => "R",
            FileStatus::NeedsCheckout => "C",
            FileStatus::NeedsPatch => "P",
            FileStatus::NeedsMerge => "G",
            FileStatus::UnresolvedConflict => "F",
        }
    }

    /// Get the human-readable label matching the client's own vocabulary
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Unknown => "Unknown",
            FileStatus::UpToDate => "Up-to-date",
            FileStatus::LocallyModified => "Locally Modified",
            FileStatus::LocallyAdded => "Locally Added",
            FileStatus::LocallyRemoved => "Locally Removed",
            FileStatus::NeedsCheckout => "Needs Checkout",
            FileStatus::NeedsPatch => "Needs Patch",
            FileStatus::NeedsMerge => "Needs Merge",
            FileStatus::UnresolvedConflict => "Unresolved Conflict",
        }
    }

    /// Check if this status means the path is registered with the repository
    pub fn is_tracked(&self) -> bool {
        !matches!(self, FileStatus::Unknown)
    }

    /// Check if this status means an update from the repository is pending
    pub fn requires_update(&self) -> bool {
        matches!(
            self,
            FileStatus::NeedsCheckout | FileStatus::NeedsPatch | FileStatus::NeedsMerge
        )
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Probe `path` through `client` and classify the resulting output.
///
/// Directories get the collapsed directory classification; everything else,
/// including paths that do not exist locally, is probed as a single file.
pub fn classify(client: &dyn CvsClient, path: &Path) -> Result<FileStatus> {
    let started = Instant::now();
    let status = if path.is_dir() {
        FileStatus::from_dir_output(&client.probe_dir(path)?)
    } else {
        FileStatus::from_file_output(&client.probe_file(path)?)
    };
    log::debug!(
        "Classified {} as {} in {:.3}s",
        path.display(),
        status.label(),
        started.elapsed().as_secs_f64()
    );
    Ok(status)
}

/// Extract the revision that follows `field` in status output.
///
/// The revision is the first whitespace-delimited token after the field
/// label, so both tab-aligned CVS output and space-separated CVSNT output
/// parse the same way. Returns `None` when the field is absent or has no
/// token after it.
pub fn revision_field(output: &str, field: &str) -> Option<String> {
    let start = output.find(field)? + field.len();
    output[start..]
        .split_whitespace()
        .next()
        .map(str::to_string)
}
