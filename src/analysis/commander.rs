//! Commander deck analysis against the Command Zone template.
//!
//! The flow:
//!
//! 1. Reject a blank commander or empty deck list.
//! 2. Resolve the commander through the card database.
//! 3. Aggregate the deck list and strip every copy of the commander.
//! 4. Validate the remaining body. Validation problems are reported, never
//!    fatal.
//! 5. Resolve the body and fail if any card is unknown.
//! 6. Categorize the cards and compare each category with its target.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::analysis::categorize::{Categorizer, Category};
use crate::config::{CommandZoneConfig, Config};
use crate::deck::{
    total_quantity, CardQuantityMap, DeckValidator, ValidationResult, ValidationSettings,
};
use crate::scryfall::{color_name, CardDatabase, CardRecord};

/// Unknown names listed in the error before truncating.
const MAX_LISTED_MISSING: usize = 10;

/// Cards listed per category in the report.
const MAX_LISTED_PER_CATEGORY: usize = 10;

/// Improvements surfaced as priorities.
const MAX_PRIORITIES: usize = 3;

/// Cards in a Commander deck body.
const BODY_SIZE: u64 = 99;

/// Conditions that prevent any report from being produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommanderAnalysisError {
    /// Commander or deck list missing.
    #[error("Error: Both commander and decklist are required.")]
    MissingInput,

    /// The commander did not resolve.
    #[error("Error: Could not find commander '{name}'. Please check the spelling.")]
    CommanderNotFound {
        /// The commander as typed.
        name: String,
    },

    /// Deck cards did not resolve.
    #[error("Error: Could not find the following cards: {}. Please check spellings.", list_missing(.names))]
    CardsNotFound {
        /// Every unresolved name.
        names: Vec<String>,
    },
}

fn list_missing(names: &[String]) -> String {
    let mut listed = names
        .iter()
        .take(MAX_LISTED_MISSING)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > MAX_LISTED_MISSING {
        listed.push_str("...");
    }
    listed
}

/// A [`ValidationResult`] as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// `true` when no errors were recorded.
    pub is_valid: bool,
    /// Every error.
    pub errors: Vec<String>,
    /// Every warning, unless warnings are suppressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// One-line summary.
    pub summary: String,
}

impl ValidationReport {
    /// Builds a report, dropping warnings when `include_warnings` is false.
    #[must_use]
    pub fn new(result: &ValidationResult, include_warnings: bool) -> Self {
        Self {
            is_valid: result.is_valid(),
            errors: result.errors().to_vec(),
            warnings: include_warnings.then(|| result.warnings().to_vec()),
            summary: result.summary(),
        }
    }
}

/// The resolved commander.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommanderSummary {
    /// Canonical name.
    pub name: String,
    /// Color names of the color identity.
    pub colors: Vec<String>,
    /// Color identity symbols.
    pub color_identity: Vec<String>,
}

/// Deck size figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    /// Body plus commander.
    pub total_cards: u64,
    /// Body only.
    pub deck_cards: u64,
    /// Distinct names in the body.
    pub unique_cards: usize,
    /// Validation passed.
    pub format_valid: bool,
    /// The commander was also listed in the deck.
    pub commander_in_original_list: bool,
    /// Commander copies stripped from the deck list.
    pub commander_quantity_removed: u64,
}

/// One deck entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardEntry {
    /// Canonical name.
    pub name: String,
    /// Copies in the deck.
    pub quantity: u64,
    /// Type line.
    pub type_line: String,
    /// Mana cost, if any.
    pub mana_cost: Option<String>,
    /// Mana value, if known.
    pub cmc: Option<f64>,
    /// Assigned category.
    pub category: Category,
}

/// How a category compares with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    /// At or above the optimal count.
    Optimal,
    /// At or above the minimum.
    Adequate,
    /// Below the minimum.
    Insufficient,
}

/// One category in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Cards in the category, counting copies.
    pub count: usize,
    /// Human-readable target.
    pub target_range: String,
    /// Minimum count.
    pub min_target: usize,
    /// Optimal count.
    pub optimal_target: usize,
    /// Comparison with the targets.
    pub status: CategoryStatus,
    /// First few card names.
    pub cards: Vec<String>,
}

/// Overall balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceAssessment {
    /// `excellent`, `good` or `needs_improvement`.
    pub overall_score: &'static str,
    /// Categories at or above their minimum.
    pub categories_meeting_targets: usize,
    /// Number of categories.
    pub total_categories: usize,
    /// One-line verdict.
    pub summary: &'static str,
}

/// Suggested next steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Most pressing shortfalls.
    pub priority_improvements: Vec<String>,
    /// Categories comfortably covered.
    pub efficiency_notes: Vec<String>,
    /// Body size advice when it is not 99 cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_size: Option<String>,
}

/// Configured target for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetInfo {
    /// Minimum recommended count.
    pub target: usize,
    /// Comfortable count.
    pub optimal: usize,
    /// What belongs in the category.
    pub description: &'static str,
}

/// The full analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommanderReport {
    /// The commander.
    pub commander: CommanderSummary,
    /// Size figures.
    pub deck: DeckSummary,
    /// Validation outcome.
    pub validation: ValidationReport,
    /// Every resolved card in deck order.
    pub cards: Vec<CardEntry>,
    /// Per-category comparison, keyed by label.
    pub categories: IndexMap<&'static str, CategoryReport>,
    /// Overall verdict.
    pub balance_assessment: BalanceAssessment,
    /// Suggested changes.
    pub recommendations: Recommendations,
    /// Card names per category, keyed by snake-case key.
    pub categorization: IndexMap<&'static str, Vec<String>>,
    /// The configured targets.
    pub command_zone_targets: IndexMap<&'static str, TargetInfo>,
}

struct Target {
    range: String,
    target: usize,
    min: usize,
    optimal: usize,
}

fn target_for(category: Category, cz: &CommandZoneConfig) -> Target {
    match category {
        Category::Ramp => Target {
            range: format!("{}-{}+", cz.ramp_target, cz.ramp_optimal),
            target: cz.ramp_target,
            min: cz.ramp_target,
            optimal: cz.ramp_optimal,
        },
        Category::CardAdvantage => Target {
            range: format!("{}+", cz.card_advantage_target),
            target: cz.card_advantage_target,
            min: cz.card_advantage_target,
            optimal: cz.card_advantage_optimal,
        },
        Category::TargetedDisruption => Target {
            range: cz.targeted_disruption_target.to_string(),
            target: cz.targeted_disruption_target,
            min: cz.targeted_disruption_target,
            optimal: cz.targeted_disruption_target,
        },
        Category::MassDisruption => Target {
            range: cz.mass_disruption_target.to_string(),
            target: cz.mass_disruption_target,
            min: cz.mass_disruption_target,
            optimal: cz.mass_disruption_target,
        },
        Category::Lands => Target {
            range: cz.lands_target.to_string(),
            target: cz.lands_target,
            min: cz.lands_target.saturating_sub(2),
            optimal: cz.lands_target,
        },
        Category::PlanCards => Target {
            range: format!("~{}", cz.plan_cards_target),
            target: cz.plan_cards_target,
            min: cz.plan_cards_target.saturating_sub(5),
            optimal: cz.plan_cards_target + 5,
        },
    }
}

/// Configured target and optimal count per category.
#[must_use]
pub fn command_zone_targets(cz: &CommandZoneConfig) -> IndexMap<&'static str, TargetInfo> {
    Category::ALL
        .iter()
        .map(|&category| {
            let target = target_for(category, cz);
            (
                category.label(),
                TargetInfo {
                    target: target.target,
                    optimal: target.optimal,
                    description: category.description(),
                },
            )
        })
        .collect()
}

/// Removes every entry naming the commander and returns the copies removed.
fn strip_commander(cards: &mut CardQuantityMap, commander: &CardRecord, typed: &str) -> u64 {
    let mut removed = 0_u64;
    cards.retain(|name, quantity| {
        let is_commander = commander.matches_name(name) || name.trim().eq_ignore_ascii_case(typed.trim());
        if is_commander {
            removed = removed.saturating_add(*quantity);
        }
        !is_commander
    });
    removed
}

/// Runs the Commander analysis.
#[derive(Debug)]
pub struct CommanderAnalyzer {
    validator: DeckValidator,
    targets: CommandZoneConfig,
    categorizer: Categorizer,
    include_warnings: bool,
}

impl Default for CommanderAnalyzer {
    fn default() -> Self {
        Self::new(
            DeckValidator::default(),
            CommandZoneConfig::default(),
            Categorizer::default(),
            true,
        )
    }
}

impl CommanderAnalyzer {
    /// Creates an analyzer.
    #[must_use]
    pub fn new(
        validator: DeckValidator,
        targets: CommandZoneConfig,
        categorizer: Categorizer,
        include_warnings: bool,
    ) -> Self {
        Self {
            validator,
            targets,
            categorizer,
            include_warnings,
        }
    }

    /// Creates an analyzer from the `validation` and `command_zone` sections.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DeckValidator::commander(ValidationSettings::from(&config.validation)),
            config.command_zone.clone(),
            Categorizer::default(),
            config.validation.include_warnings_in_output,
        )
    }

    /// The deck validator.
    #[must_use]
    pub const fn validator(&self) -> &DeckValidator {
        &self.validator
    }

    /// The configured targets.
    #[must_use]
    pub const fn targets(&self) -> &CommandZoneConfig {
        &self.targets
    }

    /// Whether validation warnings are shown to clients.
    #[must_use]
    pub const fn include_warnings(&self) -> bool {
        self.include_warnings
    }

    /// Analyzes `decklist` for `commander`.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is missing, the commander is unknown, or
    /// any deck card cannot be resolved. Validation failures are not errors;
    /// they are part of the report.
    pub async fn analyze<S: AsRef<str> + Sync>(
        &self,
        db: &dyn CardDatabase,
        commander: &str,
        decklist: &[S],
    ) -> Result<CommanderReport, CommanderAnalysisError> {
        if commander.trim().is_empty() || decklist.is_empty() {
            return Err(CommanderAnalysisError::MissingInput);
        }

        let commander_card = db.lookup_one(commander.trim()).await.ok_or_else(|| {
            CommanderAnalysisError::CommanderNotFound {
                name: commander.to_string(),
            }
        })?;

        let (mut cards, parse_result) = self.validator.aggregate(decklist);
        let removed = strip_commander(&mut cards, &commander_card, commander);
        if removed > 0 {
            debug!(commander = %commander_card.name, removed, "Stripped commander from deck list");
        }

        let validation =
            self.validator
                .validate_aggregated(&commander_card.name, &cards, parse_result, removed);

        let names: Vec<String> = cards.keys().cloned().collect();
        let outcome = db.lookup_many(&names).await;
        if !outcome.not_found.is_empty() {
            return Err(CommanderAnalysisError::CardsNotFound {
                names: outcome.not_found,
            });
        }

        let entries: Vec<CardEntry> = outcome
            .found
            .into_iter()
            .map(|found| CardEntry {
                quantity: cards.get(&found.requested).copied().unwrap_or(1),
                category: self.categorizer.categorize(&found.card),
                name: found.card.name,
                type_line: found.card.type_line,
                mana_cost: found.card.mana_cost,
                cmc: found.card.cmc,
            })
            .collect();

        let report = self.build_report(&commander_card, &cards, &validation, removed, entries);

        info!(
            commander = %report.commander.name,
            deck_cards = report.deck.deck_cards,
            valid = report.validation.is_valid,
            score = report.balance_assessment.overall_score,
            "Commander analysis complete"
        );

        Ok(report)
    }

    fn build_report(
        &self,
        commander: &CardRecord,
        cards: &CardQuantityMap,
        validation: &ValidationResult,
        removed: u64,
        entries: Vec<CardEntry>,
    ) -> CommanderReport {
        let mut categorization: IndexMap<&'static str, Vec<String>> =
            Category::ALL.iter().map(|c| (c.key(), Vec::new())).collect();
        let mut counts: IndexMap<Category, usize> =
            Category::ALL.iter().map(|&c| (c, 0)).collect();

        for entry in &entries {
            if let Some(names) = categorization.get_mut(entry.category.key()) {
                names.push(entry.name.clone());
            }
            if let Some(count) = counts.get_mut(&entry.category) {
                let copies = usize::try_from(entry.quantity).unwrap_or(usize::MAX);
                *count = count.saturating_add(copies);
            }
        }

        let mut categories = IndexMap::new();
        let mut priority_improvements = Vec::new();
        let mut efficiency_notes = Vec::new();
        let mut meeting = 0;

        for category in Category::ALL {
            let count = counts.get(&category).copied().unwrap_or_default();
            let target = target_for(category, &self.targets);

            let status = if count >= target.optimal {
                CategoryStatus::Optimal
            } else if count >= target.min {
                CategoryStatus::Adequate
            } else {
                priority_improvements.push(format!(
                    "{} ({count} vs {})",
                    category.label(),
                    target.range
                ));
                CategoryStatus::Insufficient
            };
            if status != CategoryStatus::Insufficient {
                meeting += 1;
            }

            match category {
                Category::CardAdvantage if count >= self.targets.card_advantage_optimal => {
                    efficiency_notes.push(format!(
                        "Excellent card advantage consistency ({count} cards)"
                    ));
                }
                Category::Ramp if count >= self.targets.ramp_optimal => {
                    efficiency_notes.push(format!("Strong ramp consistency ({count} cards)"));
                }
                _ => {}
            }

            let listed = categorization
                .get(category.key())
                .map(|names| names.iter().take(MAX_LISTED_PER_CATEGORY).cloned().collect())
                .unwrap_or_default();

            categories.insert(
                category.label(),
                CategoryReport {
                    count,
                    target_range: target.range,
                    min_target: target.min,
                    optimal_target: target.optimal,
                    status,
                    cards: listed,
                },
            );
        }
        priority_improvements.truncate(MAX_PRIORITIES);

        let total_categories = Category::ALL.len();
        let (overall_score, summary) = if meeting == total_categories {
            ("excellent", "Excellent deck balance following Command Zone framework")
        } else if meeting + 1 >= total_categories {
            ("good", "Strong deck foundation with minor gaps to address")
        } else if meeting + 2 >= total_categories {
            ("needs_improvement", "Decent foundation but needs attention in key areas")
        } else {
            (
                "needs_improvement",
                "Major structural issues - deck may struggle with consistency",
            )
        };

        let deck_cards = total_quantity(cards);
        let deck_size = (deck_cards != BODY_SIZE).then(|| {
            let advice = if deck_cards < BODY_SIZE {
                "missing cards may indicate an incomplete deck list"
            } else {
                "excess cards need to be cut"
            };
            format!("Deck should have {BODY_SIZE} cards (excluding commander), found {deck_cards}; {advice}")
        });

        CommanderReport {
            commander: CommanderSummary {
                name: commander.name.clone(),
                colors: commander
                    .color_identity
                    .iter()
                    .filter_map(|code| color_name(code))
                    .map(ToString::to_string)
                    .collect(),
                color_identity: commander.color_identity.clone(),
            },
            deck: DeckSummary {
                total_cards: deck_cards.saturating_add(1),
                deck_cards,
                unique_cards: cards.len(),
                format_valid: validation.is_valid(),
                commander_in_original_list: removed > 0,
                commander_quantity_removed: removed,
            },
            validation: ValidationReport::new(validation, self.include_warnings),
            cards: entries,
            categories,
            balance_assessment: BalanceAssessment {
                overall_score,
                categories_meeting_targets: meeting,
                total_categories,
                summary,
            },
            recommendations: Recommendations {
                priority_improvements,
                efficiency_notes,
                deck_size,
            },
            categorization,
            command_zone_targets: command_zone_targets(&self.targets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing::{card, names, MemoryDatabase};

    const ATRAXA: &str = "Atraxa, Praetors' Voice";

    fn database() -> MemoryDatabase {
        let mut cards = vec![
            card(ATRAXA, "Legendary Creature — Phyrexian Angel Horror", 4.0, &["W", "U", "B", "G"], "Flying, vigilance, deathtouch, lifelink"),
            card("Sol Ring", "Artifact", 1.0, &[], "{T}: Add {C}{C}."),
            card("Rhystic Study", "Enchantment", 3.0, &["U"], "Whenever an opponent casts a spell, you may draw a card."),
            card("Swords to Plowshares", "Instant", 1.0, &["W"], "Exile target creature."),
            card("Toxic Deluge", "Sorcery", 3.0, &["B"], "All creatures get -X/-X until end of turn."),
            card("Forest", "Basic Land — Forest", 0.0, &["G"], "({T}: Add {G}.)"),
        ];
        cards.extend((0..95).map(|i| card(&format!("Plan {i}"), "Creature — Horror", 3.0, &[], "Flying")));
        MemoryDatabase::with(cards)
    }

    fn analyzer() -> CommanderAnalyzer {
        CommanderAnalyzer::default()
    }

    fn legal_body() -> Vec<String> {
        let mut lines = names(&[
            "1 Sol Ring",
            "1 Rhystic Study",
            "1 Swords to Plowshares",
            "1 Toxic Deluge",
            "10 Forest",
        ]);
        lines.extend((0..85).map(|i| format!("1 Plan {i}")));
        lines
    }

    #[tokio::test]
    async fn missing_inputs() {
        let db = database();
        let empty: [&str; 0] = [];
        assert_eq!(
            analyzer().analyze(&db, "  ", &["1 Sol Ring"]).await,
            Err(CommanderAnalysisError::MissingInput)
        );
        assert_eq!(
            analyzer().analyze(&db, ATRAXA, &empty).await,
            Err(CommanderAnalysisError::MissingInput)
        );
        assert_eq!(
            CommanderAnalysisError::MissingInput.to_string(),
            "Error: Both commander and decklist are required."
        );
    }

    #[tokio::test]
    async fn unknown_commander() {
        let err = analyzer()
            .analyze(&database(), "Atraxa, Grand Unifier", &["1 Sol Ring"])
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: Could not find commander 'Atraxa, Grand Unifier'. Please check the spelling."
        );
    }

    #[tokio::test]
    async fn unknown_cards_are_listed() {
        let mut lines = legal_body();
        lines.push("1 Totally Fake".to_string());
        let err = analyzer().analyze(&database(), ATRAXA, &lines).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: Could not find the following cards: Totally Fake. Please check spellings."
        );
    }

    #[test]
    fn missing_list_truncates_after_ten() {
        let names: Vec<String> = (0..12).map(|i| format!("Fake {i}")).collect();
        let message = CommanderAnalysisError::CardsNotFound { names }.to_string();
        assert!(message.contains("Fake 9..."));
        assert!(!message.contains("Fake 10"));
    }

    #[tokio::test]
    async fn legal_deck_report() {
        let report = analyzer().analyze(&database(), ATRAXA, &legal_body()).await.unwrap();

        assert_eq!(report.commander.name, ATRAXA);
        assert_eq!(report.commander.colors, ["White", "Blue", "Black", "Green"]);
        assert_eq!(report.deck.deck_cards, 99);
        assert_eq!(report.deck.total_cards, 100);
        assert_eq!(report.deck.unique_cards, 90);
        assert!(report.deck.format_valid);
        assert!(!report.deck.commander_in_original_list);
        assert!(report.validation.is_valid);
        assert_eq!(report.validation.summary, "Deck validation passed");
        assert!(report.recommendations.deck_size.is_none());

        let lands = &report.categories["Lands"];
        assert_eq!(lands.count, 10);
        assert_eq!(lands.status, CategoryStatus::Insufficient);
        assert_eq!(lands.cards, ["Forest"]);
        assert_eq!(report.categories["Ramp"].count, 1);
        assert_eq!(report.categories["Card Advantage"].count, 1);
        assert_eq!(report.categories["Targeted Disruption"].count, 1);
        assert_eq!(report.categories["Mass Disruption"].count, 1);
        assert_eq!(report.categories["Plan Cards"].count, 85);
        assert_eq!(report.categories["Plan Cards"].status, CategoryStatus::Optimal);
        assert_eq!(report.categories["Plan Cards"].cards.len(), 10);

        assert_eq!(report.balance_assessment.categories_meeting_targets, 1);
        assert_eq!(report.balance_assessment.overall_score, "needs_improvement");
        assert_eq!(
            report.recommendations.priority_improvements,
            ["Ramp (1 vs 10-12+)", "Card Advantage (1 vs 12+)", "Targeted Disruption (1 vs 12)"]
        );

        let forest = report.cards.iter().find(|c| c.name == "Forest").unwrap();
        assert_eq!(forest.quantity, 10);
        assert_eq!(forest.category, Category::Lands);
    }

    #[tokio::test]
    async fn commander_copies_are_stripped() {
        let mut lines = legal_body();
        lines.push(ATRAXA.to_string());
        lines.push(format!("2 {}", ATRAXA.to_lowercase()));

        let report = analyzer().analyze(&database(), ATRAXA, &lines).await.unwrap();
        assert!(report.deck.commander_in_original_list);
        assert_eq!(report.deck.commander_quantity_removed, 3);
        assert_eq!(report.deck.deck_cards, 99);
        assert!(report.validation.is_valid);
        assert!(report
            .validation
            .warnings
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|w| w == "Removed 3 copies of commander 'Atraxa, Praetors' Voice' from deck list"));
    }

    #[tokio::test]
    async fn invalid_deck_still_reports() {
        let lines = names(&["4 Sol Ring", "0 Rhystic Study", "Forest"]);
        let report = analyzer().analyze(&database(), ATRAXA, &lines).await.unwrap();

        assert!(!report.validation.is_valid);
        assert!(!report.deck.format_valid);
        assert!(report.validation.errors.iter().any(|e| e.contains("'Sol Ring' appears 4 times")));
        assert!(report.validation.errors.iter().any(|e| e.contains("Invalid quantity 0")));
        assert_eq!(report.deck.deck_cards, 5);
        assert_eq!(report.categories["Ramp"].count, 4);
        assert!(report
            .recommendations
            .deck_size
            .as_deref()
            .is_some_and(|note| note.contains("found 5")));
    }

    #[tokio::test]
    async fn warnings_can_be_suppressed() {
        let analyzer = CommanderAnalyzer::new(
            DeckValidator::default(),
            CommandZoneConfig::default(),
            Categorizer::default(),
            false,
        );
        let report = analyzer
            .analyze(&database(), ATRAXA, &["1 Sol Ring"])
            .await
            .unwrap();
        assert!(report.validation.warnings.is_none());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["validation"].get("warnings").is_none());
        assert_eq!(json["categories"]["Ramp"]["status"], "insufficient");
    }

    #[test]
    fn targets_follow_configuration() {
        let targets = command_zone_targets(&CommandZoneConfig::default());
        assert_eq!(targets["Ramp"].target, 10);
        assert_eq!(targets["Ramp"].optimal, 12);
        assert_eq!(targets["Card Advantage"].optimal, 15);
        assert_eq!(targets["Lands"].target, 38);
        assert_eq!(targets["Plan Cards"].target, 30);
        assert_eq!(targets["Plan Cards"].optimal, 35);
        assert_eq!(targets["Mass Disruption"].target, 6);
    }

    #[test]
    fn built_from_configuration() {
        let mut config = Config::default();
        config.validation.include_warnings_in_output = false;
        config.validation.strict_mode = true;
        config.command_zone.lands_target = 36;

        let analyzer = CommanderAnalyzer::from_config(&config);
        assert!(!analyzer.include_warnings());
        assert!(analyzer.validator().settings().policy.strict_mode);
        assert_eq!(analyzer.targets().lands_target, 36);
    }
}
