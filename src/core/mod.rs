//! Core functionality for the cvs-scout tool.
//!
//! This module provides the fundamental building blocks for driving CVS
//! clients: process execution, status classification, caching, working-copy
//! discovery, settings and error handling.

pub mod cache;
pub mod client;
pub mod error;
pub mod output;
pub mod process;
pub mod settings;
pub mod status;
pub mod workdir;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{CvsScoutError, Result};

// === Client façade ===
// Path-scoped CVS operations through a pluggable client binary
pub use client::{open, Cvs, CvsClient, CvsNt, Revision};

// === Status classification ===
// Type-safe status enumeration plus the probe-output classifier
pub use status::{classify, revision_field, FileStatus};

// === Status caching ===
// Time-bounded memoization of classified statuses
pub use cache::{StatusCache, DEFAULT_TTL};

// === Working-copy discovery ===
// Metadata-directory walk and root-relative path arithmetic
pub use workdir::{WorkingCopy, CVS_METADATA_DIR};

// === Settings ===
// JSON-backed user settings with overridable defaults
pub use settings::{ClientFlavor, Settings};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_success};
