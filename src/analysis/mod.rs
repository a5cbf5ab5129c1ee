//! Deck and card-list analysis.
//!
//! Every tool takes a [`CardDatabase`](crate::scryfall::CardDatabase) handle
//! plus raw card names and renders a report for the MCP client. Rendering is
//! split from lookup so each report can be built from a fixed
//! [`LookupOutcome`](crate::scryfall::LookupOutcome) in tests.
//!
//! | Tool | Output |
//! |------|--------|
//! | [`curve`] | Markdown mana curve |
//! | [`lands`] | Markdown land and color source count |
//! | [`types`] | Markdown type distribution with Commander guidelines |
//! | [`color`] | JSON color identity and mana requirement reports |
//! | [`commander`] | JSON Command Zone evaluation with validation |

pub mod categorize;
pub mod color;
pub mod commander;
pub mod curve;
pub mod lands;
pub mod types;

pub use categorize::{Categorizer, Category, CategoryRule};
pub use color::{analyze_color_identity, analyze_mana_requirements};
pub use commander::{CommanderAnalysisError, CommanderAnalyzer, CommanderReport, ValidationReport};
pub use curve::calculate_mana_curve;
pub use lands::analyze_lands;
pub use types::analyze_card_types;

use serde_json::Value;

/// Reply for a tool called with an empty name list.
pub const NO_CARD_NAMES: &str = "No card names provided.";

/// Trailing Markdown section listing unresolved names.
fn not_found_section(not_found: &[String]) -> Option<String> {
    (!not_found.is_empty()).then(|| format!("\n**Cards Not Found:** {}", not_found.join(", ")))
}

/// Percentage of `part` in `whole`, rounded to one decimal place.
#[allow(clippy::cast_precision_loss)] // Card counts are far below 2^52
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

/// `numerator / denominator`, or `None` for a zero denominator.
#[allow(clippy::cast_precision_loss)] // Card counts are far below 2^52
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// Pretty-prints a JSON report.
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
