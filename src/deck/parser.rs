//! Deck list line parsing.
//!
//! Turns one free-form deck list line into a card name and quantity.
//!
//! Recognised forms, tried in order against the trimmed line:
//!
//! 1. `<integer>[ ][x|X] <name>` — `4 Forest`, `2x Sol Ring`, `-1x Sol Ring`
//! 2. `<name>` — quantity defaults to 1
//!
//! Negative and zero quantities parse successfully; rejecting them is left to
//! the aggregator so that malformed lines and semantically invalid ones are
//! reported differently.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Default maximum card name length, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 200;

/// Characters of an over-long name shown in diagnostics.
const NAME_PREVIEW_CHARS: usize = 50;

/// Leading tokens treated as a mistyped quantity rather than part of a name.
///
/// This is a narrow compatibility list, not general token classification.
/// Any other alphabetic leading word (`the`, `of`, `sol`, ...) belongs to the
/// card name.
const SUSPECT_QUANTITY_TOKENS: &[&str] = &["abc", "xyz", "def", "test"];

fn quantity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(-?\d+)\s*x?\s+(.+)$").unwrap_or_else(|e| {
            unreachable!("quantity pattern is a valid regex: {e}");
        })
    })
}

/// A successfully parsed deck list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Trimmed, non-empty card name.
    pub name: String,
    /// Quantity as written. May be zero or negative.
    pub quantity: i64,
    /// 1-based position of the line in the input.
    pub position: usize,
}

/// Why a line could not be interpreted as a card entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// The card name exceeds the configured maximum length.
    #[error("Card name too long at position {position}: '{preview}...' (max {max} characters)")]
    NameTooLong {
        /// 1-based line position.
        position: usize,
        /// First characters of the offending name.
        preview: String,
        /// Configured maximum.
        max: usize,
    },

    /// The line starts with a token that looks like a failed quantity.
    #[error(
        "Invalid quantity format at position {position}: '{line}' (quantity must be a number)"
    )]
    AmbiguousQuantityPrefix {
        /// 1-based line position.
        position: usize,
        /// The trimmed line.
        line: String,
    },

    /// The numeric prefix cannot be represented.
    #[error("Invalid quantity format at position {position}: '{line}'")]
    InvalidQuantity {
        /// 1-based line position.
        position: usize,
        /// The trimmed line.
        line: String,
    },

    /// Nothing remained for the card name.
    #[error("Empty card name at position {position}")]
    EmptyName {
        /// 1-based line position.
        position: usize,
    },
}

impl ParseIssue {
    /// Returns the 1-based line position the issue refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NameTooLong { position, .. }
            | Self::AmbiguousQuantityPrefix { position, .. }
            | Self::InvalidQuantity { position, .. }
            | Self::EmptyName { position } => *position,
        }
    }
}

/// Parses one deck list line.
///
/// Returns `Ok(None)` for a blank line, which callers skip with a warning.
///
/// # Errors
///
/// Returns a [`ParseIssue`] when the line cannot be interpreted as a card
/// entry.
pub fn parse_line(
    line: &str,
    position: usize,
    max_name_length: usize,
) -> Result<Option<ParsedEntry>, ParseIssue> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (name, quantity) = if let Some(caps) = quantity_pattern().captures(trimmed) {
        // matches borrow from `trimmed`, not from `caps`
        let group = |index| caps.get(index).map_or("", |m| m.as_str());
        let quantity = group(1)
            .parse::<i64>()
            .map_err(|_| ParseIssue::InvalidQuantity {
                position,
                line: trimmed.to_string(),
            })?;
        (group(2).trim(), quantity)
    } else {
        if has_suspect_prefix(trimmed) {
            return Err(ParseIssue::AmbiguousQuantityPrefix {
                position,
                line: trimmed.to_string(),
            });
        }
        (trimmed, 1)
    };

    if name.is_empty() {
        return Err(ParseIssue::EmptyName { position });
    }

    if name.chars().count() > max_name_length {
        return Err(ParseIssue::NameTooLong {
            position,
            preview: name.chars().take(NAME_PREVIEW_CHARS).collect(),
            max: max_name_length,
        });
    }

    Ok(Some(ParsedEntry {
        name: name.to_string(),
        quantity,
        position,
    }))
}

fn has_suspect_prefix(line: &str) -> bool {
    let mut parts = line.splitn(2, char::is_whitespace);
    let (Some(first), Some(rest)) = (parts.next(), parts.next()) else {
        return false;
    };
    if rest.trim().is_empty() {
        return false;
    }
    let first = first.to_ascii_lowercase();
    SUSPECT_QUANTITY_TOKENS.contains(&first.as_str())
}
