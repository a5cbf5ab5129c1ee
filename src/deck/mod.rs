//! Deck list parsing and validation.
//!
//! Free-form deck list text goes through four stages:
//!
//! ```text
//! lines ──▶ parser ──▶ aggregate ──┬──▶ structure ──┐
//!                                  └──▶ format ─────┴──▶ ValidationResult
//! ```
//!
//! - [`parser`] — one line to a name and quantity, or a [`ParseIssue`]
//! - [`aggregate`](mod@aggregate) — lines to a [`CardQuantityMap`], collecting problems
//! - [`structure`] — format-independent sanity checks
//! - [`format`] — format legality behind the [`FormatRules`] trait
//! - [`validator`] — runs every stage and merges the results
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod aggregate;
pub mod format;
pub mod parser;
pub mod result;
pub mod settings;
pub mod structure;
pub mod validator;

pub use aggregate::{total_quantity, CardQuantityMap};
pub use format::{is_basic_land, CommanderRules, FormatRules, BASIC_LANDS};
pub use parser::{parse_line, ParseIssue, ParsedEntry};
pub use result::{ValidationPolicy, ValidationResult};
pub use settings::ValidationSettings;
pub use structure::validate_structure;
pub use validator::DeckValidator;
