//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;

use mtg_deck_mcp::scryfall::{
    cache_key, CardDatabase, CardRecord, FoundCard, LookupOutcome, ScryfallError, SearchOutcome,
};

pub const ATRAXA: &str = "Atraxa, Praetors' Voice";

/// A card database backed by a fixed table.
#[derive(Debug, Default)]
pub struct TableDatabase {
    cards: HashMap<String, CardRecord>,
}

impl TableDatabase {
    pub fn new(cards: impl IntoIterator<Item = CardRecord>) -> Self {
        Self {
            cards: cards
                .into_iter()
                .map(|card| (cache_key(&card.name), card))
                .collect(),
        }
    }

    fn find(&self, name: &str) -> Option<CardRecord> {
        self.cards.get(&cache_key(name)).cloned()
    }
}

#[async_trait]
impl CardDatabase for TableDatabase {
    async fn lookup_one(&self, name: &str) -> Option<CardRecord> {
        self.find(name)
    }

    async fn lookup_many(&self, names: &[String]) -> LookupOutcome {
        let mut outcome = LookupOutcome::default();
        for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            match self.find(name) {
                Some(card) => outcome.found.push(FoundCard {
                    requested: name.to_string(),
                    card,
                }),
                None => outcome.not_found.push(name.to_string()),
            }
        }
        outcome
    }

    async fn search(&self, query: &str, limit: usize) -> Result<SearchOutcome, ScryfallError> {
        let needle = query.to_lowercase();
        let mut cards: Vec<CardRecord> = self
            .cards
            .values()
            .filter(|card| needle.contains(&card.type_line.to_lowercase()))
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        let total_cards = cards.len() as u64;
        cards.truncate(limit);
        Ok(SearchOutcome { cards, total_cards })
    }
}

pub fn card(name: &str, type_line: &str, cmc: f64, identity: &[&str], oracle: &str) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        type_line: type_line.to_string(),
        cmc: Some(cmc),
        colors: identity.iter().map(ToString::to_string).collect(),
        color_identity: identity.iter().map(ToString::to_string).collect(),
        oracle_text: Some(oracle.to_string()),
        ..CardRecord::default()
    }
}

pub fn atraxa() -> CardRecord {
    CardRecord {
        mana_cost: Some("{G}{W}{U}{B}".to_string()),
        ..card(
            ATRAXA,
            "Legendary Creature — Phyrexian Angel Horror",
            4.0,
            &["W", "U", "B", "G"],
            "Flying, vigilance, deathtouch, lifelink\nAt the beginning of your end step, proliferate.",
        )
    }
}

/// Filler creature names `Filler 0` .. `Filler n-1`.
pub fn filler_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Filler {i}")).collect()
}

/// A table holding Atraxa, some staples, basics and `fillers` vanilla creatures.
pub fn deck_database(fillers: usize) -> TableDatabase {
    let mut cards = vec![
        atraxa(),
        card("Sol Ring", "Artifact", 1.0, &[], "{T}: Add {C}{C}."),
        card("Command Tower", "Land", 0.0, &[], "{T}: Add one mana of any color in your commander's color identity."),
        card("Forest", "Basic Land — Forest", 0.0, &["G"], "({T}: Add {G}.)"),
        card("Island", "Basic Land — Island", 0.0, &["U"], "({T}: Add {U}.)"),
        card("Rhystic Study", "Enchantment", 3.0, &["U"], "Whenever an opponent casts a spell, you may draw a card unless that player pays {1}."),
        card("Swords to Plowshares", "Instant", 1.0, &["W"], "Exile target creature. Its controller gains life equal to its power."),
        card("Wrath of God", "Sorcery", 4.0, &["W"], "Destroy all creatures. They can't be regenerated."),
        card("Lightning Bolt", "Instant", 1.0, &["R"], "Lightning Bolt deals 3 damage to any target."),
    ];
    cards.extend(
        filler_names(fillers)
            .into_iter()
            .map(|name| card(&name, "Creature — Bear", 2.0, &["G"], "")),
    );
    TableDatabase::new(cards)
}
