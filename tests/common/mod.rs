//! Consolidated test utilities for cvs-scout
//!
//! This module provides unified testing utilities for integration tests,
//! built around throwaway checkouts and fake client executables so tests
//! run without a CVS installation.

pub mod assertions;
pub mod fixtures;
pub mod repository;
