//! Scour - Comment-Stripping Tree Mirror
//!
//! Scour copies a source directory tree into a destination tree, stripping
//! comments from recognized markup, style, and script files and copying every
//! other file through byte-for-byte. Stripping is lexical, not syntactic:
//! there is no tokenizer, and comment-like text inside string literals is
//! removed too.
//!
//! ## Architecture
//!
//! - `rules` maps file extensions to comment syntaxes and owns the fixed
//!   removal patterns
//! - `clean` applies the patterns and normalizes whitespace (pure functions,
//!   no I/O)
//! - `walker` drives the sequential recursive mirror walk and accumulates
//!   per-run counters

pub mod clean;
pub mod rules;
pub mod walker;

// Re-export commonly used items
pub use clean::{clean_content, normalize_content};
pub use rules::{extension_of, is_recognized, FileCategory, DEFAULT_EXTENSIONS};
pub use walker::{ensure_dir, process_directory, process_file, RunResult};
