//! `unpin` is a small utility that removes version pins from import statements.
//!
//! It scans the directory containing the tool itself for JavaScript/TypeScript
//! sources (`.ts`, `.tsx`, `.js`, `.jsx`), inspects the first ten lines of
//! each file, and strips version-specifier substrings such as `@1.2.3` from
//! import-like lines, rewriting the file in place when anything changed.
//! The main components are:
//!
//! - `discovery`: Enumerates candidate files by extension allowlist,
//!   non-recursively, excluding the tool's own executable.
//! - `Stripper`: Applies the version-pin removal to the leading lines of a
//!   single file and reports every edit it made.
//!
//! Processing is strictly sequential; each file is fully read, transformed in
//! memory, and conditionally rewritten before the next one is touched.

pub mod cli;
pub mod discovery;
pub mod errors;
pub mod stripper;

// Re-export main types for easier access by library users.
pub use errors::{Error, Result};
pub use stripper::{RunSummary, Stripper};
