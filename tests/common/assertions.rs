//! Common assertion helpers for test output validation
//!
//! Provides predicates and assertion utilities for validating cvs-scout
//! command output, error messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for working-copy discovery errors
pub fn not_in_working_copy() -> impl Predicate<str> {
    predicates::str::contains("Unable to find a 'CVS' directory")
}

/// Creates a predicate that checks for the missing-binary guidance
pub fn binary_not_found() -> impl Predicate<str> {
    predicates::str::contains("CVS client not found").and(predicates::str::contains("binary_path"))
}

/// Creates a predicate that checks for a recorded client invocation
pub fn invoked_with(argv: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("argv: {argv}"))
}
