//! Color identity and mana base coverage.
//!
//! Both reports are JSON so clients can read individual figures.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::analysis::{percentage, pretty, ratio, NO_CARD_NAMES};
use crate::scryfall::{color_name, CardDatabase, LookupOutcome, COLORS};

/// Coverage at or above which a color is well supported.
const GOOD_COVERAGE: f64 = 0.5;

/// Coverage below which a color is under-supported.
const LOW_COVERAGE: f64 = 0.3;

/// Sorts color codes into WUBRG order, dropping unknown symbols.
fn wubrg(codes: &[String]) -> Vec<&'static str> {
    COLORS
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| codes.iter().any(|c| c == code))
        .collect()
}

/// Builds the color identity report.
#[must_use]
pub fn color_identity_report(outcome: &LookupOutcome) -> Value {
    let mut combinations: IndexMap<Vec<&'static str>, usize> = IndexMap::new();
    let mut colorless = 0;

    for card in outcome.cards() {
        let codes = wubrg(&card.color_identity);
        if codes.is_empty() {
            colorless += 1;
        } else {
            *combinations.entry(codes).or_default() += 1;
        }
    }

    let colored: usize = combinations.values().sum();
    let total = colored + colorless;

    let mut combination_data = Map::new();
    if colorless > 0 {
        combination_data.insert(
            "Colorless".to_string(),
            json!({ "count": colorless, "percentage": percentage(colorless, total) }),
        );
    }

    let mut sorted: Vec<_> = combinations.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (codes, &count) in sorted {
        let display: Vec<&str> = codes.iter().filter_map(|code| color_name(code)).collect();
        combination_data.insert(
            display.join("/"),
            json!({
                "count": count,
                "percentage": percentage(count, total),
                "color_codes": codes,
            }),
        );
    }

    let mut individual = Map::new();
    for (code, name) in COLORS {
        let count: usize = combinations
            .iter()
            .filter(|(codes, _)| codes.contains(&code))
            .map(|(_, count)| count)
            .sum();
        if count > 0 {
            individual.insert(
                name.to_string(),
                json!({
                    "count": count,
                    "percentage": percentage(count, total),
                    "color_code": code,
                }),
            );
        }
    }

    let multicolor: usize = combinations
        .iter()
        .filter(|(codes, _)| codes.len() > 1)
        .map(|(_, count)| count)
        .sum();

    json!({
        "summary": {
            "total_cards": total,
            "colored_cards": colored,
            "colorless_cards": colorless,
            "color_diversity": individual.len(),
            "multicolor_cards": multicolor,
        },
        "color_combinations": combination_data,
        "individual_colors": individual,
        "not_found": outcome.not_found,
    })
}

/// Builds the mana requirements report.
#[must_use]
pub fn mana_requirements_report(outcome: &LookupOutcome) -> Value {
    let mut requirements = [0_usize; 5];
    let mut sources = [0_usize; 5];
    let mut spells = 0;
    let mut lands = 0;

    for card in outcome.cards() {
        if card.is_land() {
            lands += 1;
            let oracle = card.oracle_text();
            for (slot, (code, _)) in sources.iter_mut().zip(COLORS) {
                if oracle.contains(&format!("{{{code}}}")) {
                    *slot += 1;
                }
            }
        } else {
            let codes = wubrg(&card.color_identity);
            if !codes.is_empty() {
                spells += 1;
                for (slot, (code, _)) in requirements.iter_mut().zip(COLORS) {
                    if codes.contains(&code) {
                        *slot += 1;
                    }
                }
            }
        }
    }

    let total_cards = spells + lands;
    let total_requirements: usize = requirements.iter().sum();
    let total_sources: usize = sources.iter().sum();
    let coverage = ratio(total_sources, total_requirements).unwrap_or(0.0);

    let overall_status = if coverage >= GOOD_COVERAGE {
        "excellent"
    } else if coverage >= LOW_COVERAGE {
        "moderate"
    } else {
        "insufficient"
    };

    let mut color_analysis = Map::new();
    let mut recommendations = Vec::new();

    for (index, (_, name)) in COLORS.iter().enumerate() {
        let required = requirements[index];
        let produced = sources[index];
        if required == 0 && produced == 0 {
            continue;
        }

        let color_ratio = ratio(produced, required);
        let status = match color_ratio {
            None => "excess",
            Some(_) if produced == 0 => {
                recommendations.push(format!("Add {name} mana sources - currently have none!"));
                "no_sources"
            }
            Some(r) if r < LOW_COVERAGE => {
                let needed = (required.saturating_sub(2 * produced) / 2).max(1);
                recommendations.push(format!("Add more {name} sources (need {needed} more)"));
                "insufficient"
            }
            Some(r) if r >= GOOD_COVERAGE => "good",
            Some(_) => "adequate",
        };

        color_analysis.insert(
            (*name).to_string(),
            json!({
                "spell_requirements": required,
                "land_sources": produced,
                "ratio": color_ratio,
                "status": status,
            }),
        );
    }

    if coverage < LOW_COVERAGE {
        recommendations.push("Very low mana base coverage - add more colored sources".to_string());
    } else if coverage < GOOD_COVERAGE {
        recommendations.push("Consider adding more mana sources for consistency".to_string());
    }

    // Fewer than 35% lands.
    if lands * 100 < total_cards * 35 {
        recommendations.push(format!(
            "Consider adding more lands (current: {lands}, suggested: {})",
            total_cards * 2 / 5
        ));
    }

    json!({
        "summary": {
            "total_cards": total_cards,
            "spells": spells,
            "lands": lands,
            "total_color_requirements": total_requirements,
            "total_mana_sources": total_sources,
            "coverage_ratio": (coverage * 1000.0).round() / 1000.0,
            "overall_status": overall_status,
        },
        "color_analysis": color_analysis,
        "recommendations": recommendations,
        "not_found": outcome.not_found,
    })
}

/// Looks up `names` and renders the color identity report.
pub async fn analyze_color_identity(db: &dyn CardDatabase, names: &[String]) -> String {
    if names.is_empty() {
        return NO_CARD_NAMES.to_string();
    }
    pretty(&color_identity_report(&db.lookup_many(names).await))
}

/// Looks up `names` and renders the mana requirements report.
pub async fn analyze_mana_requirements(db: &dyn CardDatabase, names: &[String]) -> String {
    if names.is_empty() {
        return NO_CARD_NAMES.to_string();
    }
    pretty(&mana_requirements_report(&db.lookup_many(names).await))
}
