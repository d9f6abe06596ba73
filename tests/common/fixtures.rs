//! Test data generation utilities and predefined scenarios
//!
//! Provides canned status report lines and checkout scenarios so tests
//! exercise classification against realistic client output.

#![allow(dead_code)]

use super::repository::*;
#[cfg(unix)]
use cvs_scout::core::error::Result;
#[cfg(unix)]
use std::path::PathBuf;

/// Single-line status report naming the given classification
pub fn status_report(status: &str) -> String {
    format!("File: main.c            Status: {status}")
}

/// Scenario: checkout whose client answers every probe with `report`
#[cfg(unix)]
pub fn checkout_with_report(report: &str) -> Result<(TestCheckout, PathBuf)> {
    let checkout = setup_checkout()?;
    let stub = stub_with_report(&checkout, report)?;
    Ok((checkout, stub))
}

/// Scenario: checkout whose client echoes back its argument vector
#[cfg(unix)]
pub fn checkout_with_argv_echo() -> Result<(TestCheckout, PathBuf)> {
    let checkout = setup_checkout()?;
    let stub = stub_echoing_argv(&checkout)?;
    Ok((checkout, stub))
}
