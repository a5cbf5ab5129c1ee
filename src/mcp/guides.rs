//! Static guidance served as MCP resources and prompts.
//!
//! Resources are read-only documents. Prompts are templates a client fills
//! in and hands to the model. Only the Command Zone template depends on
//! configuration; everything else is fixed text.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::CommandZoneConfig;

/// URI of the Command Zone template resource.
pub const COMMAND_ZONE_TEMPLATE_URI: &str = "file://command-zone-template";

const COMMANDER_STAPLES_URI: &str = "file://commander-staples";
const WHEN_TO_ANALYZE_URI: &str = "mcp://magic-analysis/when-to-analyze";
const COMMON_WORKFLOWS_URI: &str = "mcp://examples/common-workflows";

/// A resource as listed by `resources/list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    /// Resource URI.
    pub uri: &'static str,
    /// Short name.
    pub name: &'static str,
    /// What the resource contains.
    pub description: &'static str,
    /// Content type.
    pub mime_type: &'static str,
}

/// One text body returned by `resources/read`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    /// Resource URI.
    pub uri: String,
    /// Content type.
    pub mime_type: &'static str,
    /// The document.
    pub text: String,
}

/// A prompt argument.
#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    /// Argument name.
    pub name: &'static str,
    /// What to pass.
    pub description: &'static str,
    /// Whether the prompt can be rendered without it.
    pub required: bool,
}

/// A prompt as listed by `prompts/list`.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDefinition {
    /// Prompt name.
    pub name: &'static str,
    /// What the prompt is for.
    pub description: &'static str,
    /// Arguments, empty for fixed prompts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<PromptArgument>,
}

/// Lists every resource.
#[must_use]
pub fn resource_definitions() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: COMMAND_ZONE_TEMPLATE_URI,
            name: "command-zone-template",
            description: "The Command Zone deckbuilding template with the configured category targets.",
            mime_type: "text/markdown",
        },
        ResourceDefinition {
            uri: COMMANDER_STAPLES_URI,
            name: "commander-staples",
            description: "Commonly played Commander staples grouped by template category.",
            mime_type: "text/markdown",
        },
        ResourceDefinition {
            uri: WHEN_TO_ANALYZE_URI,
            name: "when-to-analyze",
            description: "When to reach for the MTG analysis tools.",
            mime_type: "text/plain",
        },
        ResourceDefinition {
            uri: COMMON_WORKFLOWS_URI,
            name: "common-workflows",
            description: "Tool sequences for common deck questions.",
            mime_type: "text/plain",
        },
    ]
}

/// Reads a resource, or `None` for an unknown URI.
#[must_use]
pub fn read_resource(uri: &str, targets: &CommandZoneConfig) -> Option<ResourceContents> {
    let definition = resource_definitions()
        .into_iter()
        .find(|definition| definition.uri == uri)?;

    let text = match definition.uri {
        COMMAND_ZONE_TEMPLATE_URI => command_zone_template(targets),
        COMMANDER_STAPLES_URI => COMMANDER_STAPLES.to_string(),
        WHEN_TO_ANALYZE_URI => WHEN_TO_ANALYZE.to_string(),
        _ => COMMON_WORKFLOWS.to_string(),
    };

    Some(ResourceContents {
        uri: uri.to_string(),
        mime_type: definition.mime_type,
        text,
    })
}

/// Renders the Command Zone template with `targets` filled in.
#[must_use]
pub fn command_zone_template(targets: &CommandZoneConfig) -> String {
    format!(
        "# Command Zone Template\n\
         \n\
         ## Core Categories:\n\
         - **Lands**: {lands} (includes MDFCs, utility lands, land cyclers)\n\
         - **Card Advantage**: {ca}+ (true draw, impulse, exile-to-play)\n\
         - **Ramp**: {ramp}-{ramp_opt}+ (mana acceleration beyond land drops)\n\
         - **Targeted Disruption**: {targeted} (removal, counters, bounce, graveyard hate)\n\
         - **Mass Disruption**: {mass} (wraths, artifact wipes, fogs, stax)\n\
         - **Plan/Synergy Cards**: ~{plan} (win conditions, synergy pieces, combos)\n\
         \n\
         ## Key Principles:\n\
         - Cards can overlap categories (MDFCs, ETB creatures, modal spells)\n\
         - Template is a guideline - adjust after playtesting\n\
         - Don't neglect fundamentals: ramp, draw, interaction, disruption\n",
        lands = targets.lands_target,
        ca = targets.card_advantage_target,
        ramp = targets.ramp_target,
        ramp_opt = targets.ramp_optimal,
        targeted = targets.targeted_disruption_target,
        mass = targets.mass_disruption_target,
        plan = targets.plan_cards_target,
    )
}

/// Lists every prompt.
#[must_use]
pub fn prompt_definitions() -> Vec<PromptDefinition> {
    vec![
        PromptDefinition {
            name: "mtg-analysis-workflow",
            description: "How to combine the lookup and analysis tools for MTG requests.",
            arguments: Vec::new(),
        },
        PromptDefinition {
            name: "analyze-commander-deck",
            description: "Analyze a Commander deck against the Command Zone template.",
            arguments: vec![
                PromptArgument {
                    name: "commander",
                    description: "The commander's card name",
                    required: true,
                },
                PromptArgument {
                    name: "decklist",
                    description: "The deck list, one card per line",
                    required: true,
                },
            ],
        },
        PromptDefinition {
            name: "suggest-deck-improvements",
            description: "Suggest prioritised upgrades for a Commander deck.",
            arguments: Vec::new(),
        },
    ]
}

/// Why a prompt could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// No prompt with that name.
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    /// A required argument is absent or not a string.
    #[error("Missing required argument '{argument}' for prompt '{prompt}'")]
    MissingArgument {
        /// Prompt name.
        prompt: &'static str,
        /// Argument name.
        argument: &'static str,
    },
}

/// Renders a prompt with its arguments.
///
/// # Errors
///
/// Returns an error for an unknown prompt or a missing required argument.
pub fn get_prompt(name: &str, arguments: &Map<String, Value>) -> Result<String, PromptError> {
    match name {
        "mtg-analysis-workflow" => Ok(MTG_WORKFLOW.to_string()),
        "suggest-deck-improvements" => Ok(SUGGEST_IMPROVEMENTS.to_string()),
        "analyze-commander-deck" => {
            let prompt = "analyze-commander-deck";
            let commander = string_argument(arguments, prompt, "commander")?;
            let decklist = string_argument(arguments, prompt, "decklist")?;
            Ok(analyze_commander_prompt(commander, decklist))
        }
        other => Err(PromptError::UnknownPrompt(other.to_string())),
    }
}

fn string_argument<'a>(
    arguments: &'a Map<String, Value>,
    prompt: &'static str,
    argument: &'static str,
) -> Result<&'a str, PromptError> {
    arguments
        .get(argument)
        .and_then(Value::as_str)
        .ok_or(PromptError::MissingArgument { prompt, argument })
}

fn analyze_commander_prompt(commander: &str, decklist: &str) -> String {
    format!(
        r#"You are analyzing a Commander deck for {commander}.

The provided deck list is:
{decklist}

## Your Task:
Use the analysis_analyze_commander_deck tool with these parameters:
- commander: "{commander}"
- decklist: [Split the deck list above into one entry per line, keeping quantities such as "2x Forest"]

## What the Tool Does Automatically:
1. Validates the list against Commander rules (100 cards, singleton except basic lands)
2. Looks up all cards using Scryfall
3. Categorizes cards into the Command Zone framework:
   - **Lands (38)**: All lands including utility lands
   - **Card Advantage (12+)**: True card draw and advantage
   - **Ramp (10-12+)**: Mana acceleration beyond land drops
   - **Targeted Disruption (12)**: One-for-one answers
   - **Mass Disruption (6)**: Board wipes and protection
   - **Plan/Synergy Cards (~30)**: Win conditions and synergy pieces
4. Provides balance assessment and improvement recommendations

## Your Role:
1. Split the deck list into entries
2. Call the tool with commander and decklist
3. Read the JSON response
4. Present findings in a user-friendly format with actionable suggestions

## JSON Response Structure:
- `commander`: name, colors, color_identity
- `deck`: card counts and whether the commander was also listed
- `validation`: is_valid, errors, warnings, summary
- `categories`: Command Zone analysis with counts and status for each category
- `balance_assessment`: overall_score and categories_meeting_targets
- `recommendations`: priority_improvements, efficiency_notes, deck_size
- `categorization`: card names sorted by category

Fix validation errors first, then use the category data for specific, actionable advice!"#
    )
}

const MTG_WORKFLOW: &str = "For MTG requests, follow this essential pattern:

1. ALWAYS start with scryfall_lookup_cards for validation
2. Use specific analysis tools based on user questions:
   - \"analyze deck\" → analysis_analyze_commander_deck
   - \"is my list legal\" → analysis_validate_decklist
   - \"mana curve\" → analysis_calculate_mana_curve
   - \"color fixing\" → analysis_analyze_lands + analysis_analyze_mana_requirements
   - \"what types\" → analysis_analyze_card_types
3. Provide actionable recommendations, not just data
4. Focus on the most impactful improvements first

Remember: Users want help improving their decks, not just statistics.";

const SUGGEST_IMPROVEMENTS: &str = "You are suggesting improvements to a Commander deck based on Command Zone principles.

## Analysis Process:
1. First analyze the deck with the Command Zone template
2. Identify the most critical gaps or imbalances
3. Suggest specific cards to add/remove with clear reasoning
4. Consider budget, power level, and deck theme

## Improvement Priorities:
1. **Fix Critical Gaps**: Missing ramp, draw, or interaction
2. **Increase Efficiency**: Cards that serve multiple roles
3. **Enhance Consistency**: More reliable card advantage and ramp
4. **Optimize Mana Base**: Better fixing and utility lands
5. **Strengthen Game Plan**: More focused synergy pieces

## Suggestion Format:
**Priority 1 - Critical:**
- Add: [Specific cards] - Reason
- Remove: [Specific cards] - Reason

**Priority 2 - Optimization:**
- Consider: [Alternative cards] - Benefits

**Priority 3 - Long-term:**
- Upgrade path: [Expensive improvements] - Impact

Focus on the most impactful changes first.";

const WHEN_TO_ANALYZE: &str = "ALWAYS use MTG analysis tools when users mention:
- Deck lists, card lists, or \"my deck\"
- \"Analyze\", \"review\", \"how good\", \"suggestions\"
- Commander, EDH, or 100-card decks
- Mana curve, mana base, or color fixing
- Card advantage, ramp, or removal

ESSENTIAL WORKFLOW:
1. Start with scryfall_lookup_cards for card validation
2. Then use appropriate analysis tools based on user questions
3. Always provide actionable recommendations, not just data
";

const COMMON_WORKFLOWS: &str = "Example 1: \"Analyze my Commander deck\"
→ Use analysis_validate_decklist to catch size and singleton problems
→ Use analysis_analyze_commander_deck
→ Provide specific improvement suggestions

Example 2: \"Is my mana base good?\"
→ Use analysis_analyze_lands for land count/colors
→ Use analysis_analyze_mana_requirements for spell coverage
→ Focus on actionable mana base improvements

Example 3: \"My deck is too slow\"
→ Use analysis_calculate_mana_curve
→ Focus on CMC 0-3 cards and ramp recommendations
→ Suggest specific low-cost alternatives

Example 4: \"What colors should I add?\"
→ Use analysis_analyze_color_identity
→ Use analysis_analyze_mana_requirements for gaps
→ Recommend specific lands and fixing
";

const COMMANDER_STAPLES: &str = "# Commander Staples by Category

## Ramp (10-12+ cards)
**Artifacts:** Sol Ring, Arcane Signet, Fellwar Stone, Talisman cycle, Signet cycle
**Green Spells:** Cultivate, Kodama's Reach, Rampant Growth, Nature's Lore, Three Visits
**Creatures:** Llanowar Elves, Birds of Paradise, Farhaven Elf, Wood Elves

## Card Advantage (12+ cards)
**Enchantments:** Rhystic Study, Phyrexian Arena, Sylvan Library, Mystic Remora
**Creatures:** Beast Whisperer, Guardian Project, Mentor of the Meek
**Spells:** Harmonize, Sign in Blood, Read the Bones, Brainstorm

## Targeted Disruption (12 cards)
**Removal:** Swords to Plowshares, Path to Exile, Beast Within, Chaos Warp
**Counters:** Counterspell, Swan Song, Negate, Dispel
**Versatile:** Assassin's Trophy, Generous Gift, Rapid Hybridization

## Mass Disruption (6 cards)
**Board Wipes:** Wrath of God, Day of Judgment, Blasphemous Act, Toxic Deluge
**Protection:** Teferi's Protection, Boros Charm, Heroic Intervention
**Utility:** Cyclonic Rift, Austere Command

## Essential Lands
**Fixing:** Command Tower, Exotic Orchard, Reflecting Pool
**Utility:** Reliquary Tower, Ghost Quarter, Strip Mine
**Budget:** Evolving Wilds, Terramorphic Expanse, basics

## Utility/Staples
**Protection:** Lightning Greaves, Swiftfoot Boots, Mother of Runes
**Recursion:** Eternal Witness, Regrowth, Sun Titan
**Card Selection:** Sensei's Divining Top, Scroll Rack
";
