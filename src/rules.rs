//! File categorization and the fixed comment-removal rule set.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions subjected to comment stripping by default.
/// Files with any other extension are copied through byte-for-byte.
pub const DEFAULT_EXTENSIONS: &[&str] =
    &[".html", ".ejs", ".css", ".js", ".jsx", ".ts", ".tsx"];

/// Which family of comment syntax a file uses, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Markup, // .html, .ejs
    Style,  // .css
    Script, // .js, .jsx, .ts, .tsx
    Unknown,
}

impl FileCategory {
    /// Categorize a dot-prefixed extension (e.g. ".html"). Matching is
    /// case-insensitive.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            ".html" | ".ejs" => FileCategory::Markup,
            ".css" => FileCategory::Style,
            ".js" | ".jsx" | ".ts" | ".tsx" => FileCategory::Script,
            _ => FileCategory::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        match extension_of(path) {
            Some(ext) => Self::from_extension(&ext),
            None => FileCategory::Unknown,
        }
    }
}

/// Lowercased, dot-prefixed extension of a path ("Main.JS" -> ".js").
/// Returns None for files without an extension, including dotfiles.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Check whether a path's extension is in the recognized set.
pub fn is_recognized(path: &Path, extensions: &[String]) -> bool {
    match extension_of(path) {
        Some(ext) => extensions.iter().any(|e| e == &ext),
        None => false,
    }
}

// The removal patterns are fixed and compiled once. None of them is aware of
// string or regex literal boundaries; removal is purely lexical.

/// `<!-- ... -->` and `<%-- ... --%>`, non-greedy, may span lines.
pub(crate) static MARKUP_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<%--.*?--%>").expect("Invalid markup block pattern"));

/// `/* ... */`, non-greedy, may span lines. Used for both styles and scripts.
pub(crate) static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid block comment pattern"));

/// `//` through end of line.
pub(crate) static SCRIPT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*?$").expect("Invalid line comment pattern"));

/// Optional horizontal whitespace, then `//` or `#`, through end of line.
pub(crate) static TRAILING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[\t ]*(?://|#).*$").expect("Invalid trailing comment pattern"));
