//! Constants used throughout the mappath library.
//!
//! This module provides central definitions for the path syntax and the
//! fixed strings and widths used by value coercion.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Number of fractional digits used when a float is rendered as a string.
pub const FLOAT_STRING_PRECISION: usize = 9;

/// Strings that coerce to `true`.
pub const TRUE_WORDS: &[&str] = &["true", "yes"];

/// Strings that coerce to `false`.
pub const FALSE_WORDS: &[&str] = &["false", "no"];
