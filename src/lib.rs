//! CVS Scout - A repository status service and command front-end for CVS and CVSNT.
//!
//! This library provides the core functionality for cvs-scout: running CVS
//! client processes, classifying their status output, caching classifications,
//! locating working copies and exposing path-scoped client operations. It is
//! designed to be embedded by editor integrations as well as driven from the
//! bundled command-line interface.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Client façade operations (status, diff, log, annotate, update, add,
//!   remove, revert, commit)
//! - Status classification and time-bounded caching
//! - Working-copy discovery
//! - Settings and error handling

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Status classification
    classify,
    // Client façade
    open,
    print_error,
    print_info,

    // Output formatting
    print_success,
    revision_field,

    ClientFlavor,
    Cvs,
    CvsClient,
    CvsNt,
    // Error handling
    CvsScoutError,

    FileStatus,
    Result,
    Revision,
    // Settings
    Settings,

    // Status caching
    StatusCache,
    // Working-copy discovery
    WorkingCopy,
    CVS_METADATA_DIR,
    DEFAULT_TTL,
};
