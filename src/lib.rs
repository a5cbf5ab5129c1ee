//! mtg-deck-mcp: MCP server for Magic: The Gathering card lookup and deck analysis
//!
//! This library parses and validates Commander deck lists, looks cards up on
//! Scryfall, and exposes both as tools to AI assistants over MCP.
//!
//! # Architecture
//!
//! - **Deck validation**: free-form deck list text to a quantity map and a
//!   complete list of errors and warnings, with no I/O
//! - **Card data**: Scryfall lookups behind the [`scryfall::CardDatabase`]
//!   trait, with an owned TTL cache
//! - **Analysis**: mana curve, mana base, color identity, card types and the
//!   Command Zone template
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`deck`] — Deck list parsing and validation
//! - [`scryfall`] — Card records and the Scryfall client
//! - [`analysis`] — Card statistics and Commander deck analysis
//! - [`mcp`] — MCP protocol implementation

pub mod analysis;
pub mod config;
pub mod deck;
pub mod error;
pub mod mcp;
pub mod scryfall;
