//! Display-name validation and cleanup
//!
//! Accessory display names are restricted to letters, digits, spaces and
//! apostrophes, and must start and end with a letter or digit. Names outside
//! that set are rewritten here; the caller decides how to report the rewrite.

use std::sync::LazyLock;

use regex::Regex;

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ']*[\p{L}\p{N}]$").expect("valid-name pattern compiles")
});

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N} ']").expect("invalid-chars pattern compiles"));

static INVALID_BOUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\p{L}\p{N}]+|[^\p{L}\p{N}]+$").expect("invalid-bounds pattern compiles")
});

/// Why a cleanup step rewrote the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteReason {
    /// Characters outside letters, digits, space, apostrophe were removed
    InvalidCharacters,
    /// Non-alphanumeric leading or trailing characters were removed
    InvalidBounds,
}

/// One cleanup step, with the value before and after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRewrite {
    pub reason: RewriteReason,
    pub before: String,
    pub after: String,
}

/// Result of cleaning a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedName {
    /// The value to use as the accessory display name
    pub value: String,
    /// Whether the input already satisfied the constrained character set
    pub was_valid: bool,
    /// Cleanup steps applied, in order
    pub rewrites: Vec<NameRewrite>,
}

/// Normalize a free-text name into the constrained accessory character set.
///
/// A valid input is returned untouched. An invalid input first has
/// disallowed characters removed, then non-alphanumeric leading/trailing
/// runs stripped. Interior spacing is preserved as-is.
pub fn clean_display_name(value: &str) -> CleanedName {
    if VALID_NAME.is_match(value) {
        return CleanedName {
            value: value.to_string(),
            was_valid: true,
            rewrites: Vec::new(),
        };
    }

    let mut current = value.to_string();
    let mut rewrites = Vec::new();

    if INVALID_CHARS.is_match(&current) {
        let before = current.clone();
        current = INVALID_CHARS.replace_all(&current, "").into_owned();
        rewrites.push(NameRewrite {
            reason: RewriteReason::InvalidCharacters,
            before,
            after: current.clone(),
        });
    }

    if INVALID_BOUNDS.is_match(&current) {
        let before = current.clone();
        current = INVALID_BOUNDS.replace_all(&current, "").into_owned();
        rewrites.push(NameRewrite {
            reason: RewriteReason::InvalidBounds,
            before,
            after: current.clone(),
        });
    }

    CleanedName {
        value: current,
        was_valid: false,
        rewrites,
    }
}
