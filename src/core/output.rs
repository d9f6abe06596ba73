//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all cvs-scout
//! output, ensuring consistent colors, spacing, and message structure across
//! commands. Raw client output is always printed untouched; these helpers
//! only dress up the messages cvs-scout itself adds around it.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
///
/// # Colors
/// - Checkmark in green, message in white
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
///
/// # Format
/// ```text
///
/// <message>
///
/// ```
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}
