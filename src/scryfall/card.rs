//! Card records as returned by the Scryfall API.
//!
//! Only the fields the analysis tools read are modelled. Unknown fields in
//! API responses are ignored.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Color symbols in WUBRG order with their display names.
pub const COLORS: [(&str, &str); 5] = [
    ("W", "White"),
    ("U", "Blue"),
    ("B", "Black"),
    ("R", "Red"),
    ("G", "Green"),
];

/// Returns the display name for a color symbol.
#[must_use]
pub fn color_name(code: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(symbol, _)| *symbol == code)
        .map(|(_, name)| *name)
}

/// Market prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    /// Non-foil USD price as a decimal string.
    #[serde(default)]
    pub usd: Option<String>,
}

/// One face of a multi-faced card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    /// Face name.
    pub name: String,
    /// Face mana cost.
    #[serde(default)]
    pub mana_cost: Option<String>,
    /// Face type line.
    #[serde(default)]
    pub type_line: Option<String>,
    /// Face rules text.
    #[serde(default)]
    pub oracle_text: Option<String>,
    /// Face power.
    #[serde(default)]
    pub power: Option<String>,
    /// Face toughness.
    #[serde(default)]
    pub toughness: Option<String>,
}

/// A single card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Canonical card name. Multi-faced cards use `Front // Back`.
    pub name: String,
    /// Mana cost in brace notation, e.g. `{2}{G}`.
    #[serde(default)]
    pub mana_cost: Option<String>,
    /// Full type line, e.g. `Legendary Creature — Elf Druid`.
    #[serde(default)]
    pub type_line: String,
    /// Rules text.
    #[serde(default)]
    pub oracle_text: Option<String>,
    /// Mana value.
    #[serde(default)]
    pub cmc: Option<f64>,
    /// Color symbols of the card.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Color identity symbols.
    #[serde(default)]
    pub color_identity: Vec<String>,
    /// Creature power.
    #[serde(default)]
    pub power: Option<String>,
    /// Creature toughness.
    #[serde(default)]
    pub toughness: Option<String>,
    /// Market prices.
    #[serde(default)]
    pub prices: Prices,
    /// Faces of a multi-faced card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub card_faces: Vec<CardFace>,
}

impl CardRecord {
    /// Returns `true` if the type line names a land.
    #[must_use]
    pub fn is_land(&self) -> bool {
        self.type_line.to_lowercase().contains("land")
    }

    /// Returns `true` if `name` is this card's name or one of its face
    /// names, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }
        self.name.to_lowercase() == wanted
            || self
                .card_faces
                .iter()
                .any(|face| face.name.to_lowercase() == wanted)
    }

    /// Mana cost, falling back to the front face.
    #[must_use]
    pub fn mana_cost(&self) -> Option<&str> {
        self.mana_cost
            .as_deref()
            .filter(|cost| !cost.is_empty())
            .or_else(|| {
                self.card_faces
                    .first()
                    .and_then(|face| face.mana_cost.as_deref())
                    .filter(|cost| !cost.is_empty())
            })
    }

    /// Rules text, joining every face for multi-faced cards.
    #[must_use]
    pub fn oracle_text(&self) -> Cow<'_, str> {
        if let Some(text) = &self.oracle_text {
            return Cow::Borrowed(text);
        }
        let faces: Vec<&str> = self
            .card_faces
            .iter()
            .filter_map(|face| face.oracle_text.as_deref())
            .collect();
        Cow::Owned(faces.join("\n//\n"))
    }

    /// Renders a short Markdown summary.
    #[must_use]
    pub fn format_info(&self) -> String {
        let mut out = format!("**{}**", self.name);
        if let Some(cost) = self.mana_cost() {
            out.push(' ');
            out.push_str(cost);
        }
        out.push('\n');
        out.push_str(&self.type_line);
        if let (Some(power), Some(toughness)) = (&self.power, &self.toughness) {
            out.push_str(&format!(" {power}/{toughness}"));
        }
        let oracle = self.oracle_text();
        if !oracle.is_empty() {
            out.push_str("\n\n");
            out.push_str(&oracle);
        }
        if let Some(usd) = self.prices.usd.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&format!("\n\nPrice (USD): ${usd}"));
        }
        out
    }
}
