//! Command Zone card categories.
//!
//! Cards are sorted by an ordered rule table: the first rule whose predicate
//! matches decides the category, and unmatched cards fall through to
//! [`Category::PlanCards`]. Rules can be replaced or extended without
//! touching the analysis flow.

use serde::Serialize;

use crate::scryfall::CardRecord;

/// Command Zone template category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Mana acceleration beyond land drops.
    Ramp,
    /// Card draw and other card advantage.
    CardAdvantage,
    /// One-for-one interaction.
    TargetedDisruption,
    /// Board wipes and mass effects.
    MassDisruption,
    /// Lands.
    Lands,
    /// Win conditions and synergy pieces.
    PlanCards,
}

impl Category {
    /// Every category in report order.
    pub const ALL: [Self; 6] = [
        Self::Ramp,
        Self::CardAdvantage,
        Self::TargetedDisruption,
        Self::MassDisruption,
        Self::Lands,
        Self::PlanCards,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ramp => "Ramp",
            Self::CardAdvantage => "Card Advantage",
            Self::TargetedDisruption => "Targeted Disruption",
            Self::MassDisruption => "Mass Disruption",
            Self::Lands => "Lands",
            Self::PlanCards => "Plan Cards",
        }
    }

    /// Snake-case key used in JSON maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ramp => "ramp",
            Self::CardAdvantage => "card_advantage",
            Self::TargetedDisruption => "targeted_disruption",
            Self::MassDisruption => "mass_disruption",
            Self::Lands => "lands",
            Self::PlanCards => "plan_cards",
        }
    }

    /// One-line description from the Command Zone template.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ramp => "Mana acceleration beyond land drops",
            Self::CardAdvantage => "True card draw, impulse draw and exile-to-play effects",
            Self::TargetedDisruption => "Removal, counterspells, bounce and graveyard hate",
            Self::MassDisruption => "Board wipes, fogs and stax pieces",
            Self::Lands => "Includes MDFCs, utility lands and land cyclers",
            Self::PlanCards => "Win conditions, synergy pieces and combos",
        }
    }
}

type Predicate = Box<dyn Fn(&CardRecord) -> bool + Send + Sync>;

/// One row of the rule table.
pub struct CategoryRule {
    category: Category,
    predicate: Predicate,
}

impl std::fmt::Debug for CategoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryRule")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl CategoryRule {
    /// Creates a rule from an arbitrary predicate.
    pub fn new(
        category: Category,
        predicate: impl Fn(&CardRecord) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            predicate: Box::new(predicate),
        }
    }

    /// Matches when the lowercased rules text contains any `include` keyword
    /// and no `exclude` keyword.
    #[must_use]
    pub fn oracle_keywords(
        category: Category,
        include: &'static [&'static str],
        exclude: &'static [&'static str],
    ) -> Self {
        Self::new(category, move |card| {
            let oracle = card.oracle_text().to_lowercase();
            include.iter().any(|word| oracle.contains(word))
                && !exclude.iter().any(|word| oracle.contains(word))
        })
    }

    /// The category this rule assigns.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` if the rule applies to `card`.
    #[must_use]
    pub fn matches(&self, card: &CardRecord) -> bool {
        (self.predicate)(card)
    }
}

const RAMP_KEYWORDS: &[&str] = &[
    "add",
    "mana",
    "search",
    "basic land",
    "rampant growth",
    "cultivate",
    "sol ring",
    "signet",
    "talisman",
    "arcane signet",
    "chromatic lantern",
];
const RAMP_EXCLUDES: &[&str] = &["draw", "destroy", "counter"];

const CARD_ADVANTAGE_KEYWORDS: &[&str] = &[
    "draw",
    "card",
    "hand",
    "library",
    "impulse",
    "scry 2 or more",
];
const CARD_ADVANTAGE_EXCLUDES: &[&str] = &["discard", "destroy"];

const TARGETED_KEYWORDS: &[&str] = &[
    "destroy target",
    "exile target",
    "counter target",
    "return target",
    "bounce",
    "remove",
    "path to exile",
    "swords to plowshares",
];

const MASS_KEYWORDS: &[&str] = &[
    "destroy all",
    "exile all",
    "return all",
    "wrath",
    "board wipe",
    "each player",
    "each opponent",
    "all creatures",
    "all artifacts",
];

/// Ordered rule table with a fallback category.
#[derive(Debug)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    fallback: Category,
}

impl Default for Categorizer {
    /// The Command Zone keyword heuristics.
    fn default() -> Self {
        Self::new(
            vec![
                CategoryRule::new(Category::Lands, CardRecord::is_land),
                CategoryRule::oracle_keywords(Category::Ramp, RAMP_KEYWORDS, RAMP_EXCLUDES),
                CategoryRule::oracle_keywords(
                    Category::CardAdvantage,
                    CARD_ADVANTAGE_KEYWORDS,
                    CARD_ADVANTAGE_EXCLUDES,
                ),
                CategoryRule::oracle_keywords(Category::TargetedDisruption, TARGETED_KEYWORDS, &[]),
                CategoryRule::oracle_keywords(Category::MassDisruption, MASS_KEYWORDS, &[]),
            ],
            Category::PlanCards,
        )
    }
}

impl Categorizer {
    /// Creates a categorizer from an ordered rule list.
    #[must_use]
    pub fn new(rules: Vec<CategoryRule>, fallback: Category) -> Self {
        Self { rules, fallback }
    }

    /// Inserts `rule` ahead of every existing rule.
    #[must_use]
    pub fn with_priority_rule(mut self, rule: CategoryRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// The rule table in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Assigns `card` to the first matching category.
    #[must_use]
    pub fn categorize(&self, card: &CardRecord) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(card))
            .map_or(self.fallback, CategoryRule::category)
    }
}
