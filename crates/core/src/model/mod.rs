//! Destination catalogues populated by the pipeline.

mod cards;
mod npcs;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use cards::{Card, CardCatalogue, CardInfo, CardRarity, CardSides, CardType};
pub use npcs::{MapLink, Opponent, OpponentInfo, OPPONENT_DECK_SLOTS};

use crate::mapping::RULE_KEYS;

/// A game rule, identified by its position in the logic-side catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Position in the rule catalogue.
    pub logic_index: usize,
    /// Stable internal key.
    pub key: String,
    /// Localized name copied from the host.
    pub name: String,
}

/// Fully reconciled game data produced by one successful build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    /// Rule catalogue in logic order.
    pub rules: Vec<Rule>,
    /// Localized card type names.
    pub card_type_names: BTreeMap<CardType, String>,
    /// Cards indexed by id.
    pub cards: CardCatalogue,
    /// Extended card info keyed by card id.
    pub card_info: BTreeMap<u32, CardInfo>,
    /// Located opponents, sorted by name-localization id.
    pub opponents: Vec<Opponent>,
    /// Opponent info keyed by index into `opponents`.
    pub opponent_info: BTreeMap<usize, OpponentInfo>,
    /// Time the data was assembled.
    pub loaded_at: DateTime<Utc>,
}

impl Default for GameData {
    fn default() -> Self {
        Self::empty()
    }
}

impl GameData {
    /// Fresh catalogues with the fixed rule list and nothing else.
    pub fn empty() -> Self {
        let rules = RULE_KEYS
            .iter()
            .enumerate()
            .map(|(logic_index, key)| Rule {
                logic_index,
                key: (*key).to_string(),
                name: String::new(),
            })
            .collect();

        Self {
            rules,
            card_type_names: BTreeMap::new(),
            cards: CardCatalogue::default(),
            card_info: BTreeMap::new(),
            opponents: Vec::new(),
            opponent_info: BTreeMap::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Opponent info together with its opponent.
    pub fn opponent(&self, index: usize) -> Option<(&Opponent, Option<&OpponentInfo>)> {
        self.opponents
            .get(index)
            .map(|npc| (npc, self.opponent_info.get(&index)))
    }

    /// Localized name of a card type, if the host provided one.
    pub fn card_type_name(&self, card_type: CardType) -> Option<&str> {
        self.card_type_names.get(&card_type).map(String::as_str)
    }
}
