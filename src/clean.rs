//! Comment stripping and whitespace normalization.
//!
//! Both passes are pure text transformations with no I/O and no failure path.
//! Stripping is lexical substring matching: a `//` inside a string literal is
//! treated as a comment and removed. That is a known limitation of a
//! heuristic cleaner, not a bug to fix with a real lexer.

use crate::rules::{FileCategory, BLOCK_COMMENT, MARKUP_BLOCK, SCRIPT_LINE, TRAILING_LINE};
use regex::Regex;
use std::sync::LazyLock;

/// Lines containing only whitespace, carriage returns included.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t\r]*\n").expect("Invalid blank line pattern"));

/// Two or more consecutive line-ending characters.
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]{2,}").expect("Invalid newline run pattern"));

/// Horizontal whitespace at the end of a line.
static TRAILING_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("Invalid trailing whitespace pattern"));

/// Remove comments from `content` according to its category.
///
/// Each category applies its removal rules in a fixed order. Script files
/// strip line comments before block comments, so `/* a */ // b` loses both
/// spans even though the line rule fires first.
pub fn clean_content(content: &str, category: FileCategory) -> String {
    match category {
        FileCategory::Markup => {
            let out = MARKUP_BLOCK.replace_all(content, "");
            TRAILING_LINE.replace_all(&out, "").into_owned()
        }
        FileCategory::Style => {
            let out = BLOCK_COMMENT.replace_all(content, "");
            TRAILING_LINE.replace_all(&out, "").into_owned()
        }
        FileCategory::Script => {
            let out = SCRIPT_LINE.replace_all(content, "");
            BLOCK_COMMENT.replace_all(&out, "").into_owned()
        }
        FileCategory::Unknown => {
            // Every rule in sequence. The block pattern runs a second time
            // after line removal, once for style comments and once for script
            // comments.
            let out = MARKUP_BLOCK.replace_all(content, "");
            let out = BLOCK_COMMENT.replace_all(&out, "");
            let out = SCRIPT_LINE.replace_all(&out, "");
            let out = BLOCK_COMMENT.replace_all(&out, "");
            TRAILING_LINE.replace_all(&out, "").into_owned()
        }
    }
}

/// Normalize whitespace after comment removal.
///
/// Removes whitespace-only lines, collapses newline runs, strips trailing
/// horizontal whitespace from each line, trims the whole text, and appends
/// exactly one trailing newline. Runs identically for every category.
pub fn normalize_content(content: &str) -> String {
    let out = BLANK_LINE.replace_all(content, "");
    let out = NEWLINE_RUN.replace_all(&out, "\n");
    let out = TRAILING_WS.replace_all(&out, "");
    let mut out = out.trim().to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ normalize_content tests ============

    #[test]
    fn test_normalize_removes_blank_lines() {
        let out = normalize_content("a\n\n\nb\n   \nc\n");
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn test_normalize_strips_trailing_whitespace() {
        let out = normalize_content("a  \t\nb \n");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_normalize_single_trailing_newline() {
        assert_eq!(normalize_content("a"), "a\n");
        assert_eq!(normalize_content("a\n\n\n"), "a\n");
    }

    #[test]
    fn test_normalize_trims_leading_whitespace() {
        assert_eq!(normalize_content("\n\n  a\n"), "a\n");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_content(""), "\n");
        assert_eq!(normalize_content("   \n \t \n"), "\n");
    }

    #[test]
    fn test_normalize_crlf_input() {
        let out = normalize_content("a\r\n\r\nb\r\n");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "a\n\n\nb  \n\n  c\n\n",
            "",
            "single line",
            "x\r\ny\r\n\r\nz",
        ];
        for input in inputs {
            let once = normalize_content(input);
            assert_eq!(normalize_content(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_normalize_output_properties() {
        let out = normalize_content("  a \n\n\n b\t\n\r\nc  ");
        assert!(out.ends_with('\n'));
        assert!(!out.ends_with("\n\n"));
        for line in out.lines() {
            assert!(!line.trim().is_empty(), "blank line in output: {:?}", out);
            assert!(
                !line.ends_with(' ') && !line.ends_with('\t'),
                "trailing whitespace in output: {:?}",
                out
            );
        }
    }

    // ============ clean_content tests ============

    #[test]
    fn test_script_removes_line_and_block_comments() {
        let out = clean_content("/* a */ // b\ncode();", FileCategory::Script);
        assert_eq!(normalize_content(&out), "code();\n");
    }

    #[test]
    fn test_script_multiline_block_comment() {
        let out = clean_content("/*\n * docs\n */\nlet x = 1;\n", FileCategory::Script);
        assert_eq!(normalize_content(&out), "let x = 1;\n");
    }

    #[test]
    fn test_script_line_comment_inside_string_is_stripped() {
        // Lexical stripping has no literal awareness: the URL loses its
        // path. Locked in as intended behavior.
        let out = clean_content("let u = \"http://example.com\";\n", FileCategory::Script);
        assert_eq!(normalize_content(&out), "let u = \"http:\n");
    }

    #[test]
    fn test_markup_block_and_trailing_comments() {
        let out = clean_content(
            "<!-- c -->\n<div>ok</div> // trailing\n",
            FileCategory::Markup,
        );
        assert_eq!(normalize_content(&out), "<div>ok</div>\n");
    }

    #[test]
    fn test_markup_ejs_block_comment() {
        let out = clean_content("<%-- note --%><p>kept</p>", FileCategory::Markup);
        assert_eq!(normalize_content(&out), "<p>kept</p>\n");
    }

    #[test]
    fn test_markup_multiline_block_comment() {
        let out = clean_content("<!--\nmulti\nline\n-->\n<b>x</b>\n", FileCategory::Markup);
        assert_eq!(normalize_content(&out), "<b>x</b>\n");
    }

    #[test]
    fn test_style_block_comment() {
        let out = clean_content("/* reset */\nbody { margin: 0; }\n", FileCategory::Style);
        assert_eq!(normalize_content(&out), "body { margin: 0; }\n");
    }

    #[test]
    fn test_style_trailing_rule_strips_protocol_urls() {
        // The trailing rule matches any `//` to end of line, so a url()
        // mid-declaration loses its tail. Same literal-unaware limitation
        // as the script rules.
        let out = clean_content(
            "a { background: url(http://x/y.png); }\n",
            FileCategory::Style,
        );
        assert_eq!(normalize_content(&out), "a { background: url(http:\n");
    }

    #[test]
    fn test_unknown_applies_all_rules() {
        let input = "<!-- m -->\n/* b */\nvalue = 1 # note\ncode(); // eol\n";
        let out = clean_content(input, FileCategory::Unknown);
        assert_eq!(normalize_content(&out), "value = 1\ncode();\n");
    }

    #[test]
    fn test_comment_only_input_normalizes_to_single_newline() {
        let out = clean_content("// one\n/* two */\n// three\n", FileCategory::Script);
        assert_eq!(normalize_content(&out), "\n");
    }
}
