use serde::{Deserialize, Serialize};

/// Number of fixed and of variable deck slots an opponent has.
pub const OPPONENT_DECK_SLOTS: usize = 5;

/// A non-player opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    /// Locally assigned id, doubling as the name-localization slot.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Active rules as indices into the rule catalogue.
    pub rules: Vec<usize>,
    /// Cards always in the deck, `0` for an empty slot.
    pub cards_fixed: [u32; OPPONENT_DECK_SLOTS],
    /// Cards drawn from the variable pool, `0` for an empty slot.
    pub cards_variable: [u32; OPPONENT_DECK_SLOTS],
}

impl Opponent {
    /// Non-empty fixed slots.
    pub fn fixed_cards(&self) -> impl Iterator<Item = u32> + '_ {
        self.cards_fixed.iter().copied().filter(|id| *id != 0)
    }

    /// Non-empty variable slots.
    pub fn variable_cards(&self) -> impl Iterator<Item = u32> + '_ {
        self.cards_variable.iter().copied().filter(|id| *id != 0)
    }
}

/// Map position of an opponent in human-readable map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapLink {
    /// Territory id.
    pub territory_id: u32,
    /// Map id.
    pub map_id: u32,
    /// Horizontal map coordinate.
    pub x: f32,
    /// Vertical map coordinate.
    pub y: f32,
}

/// Host-side details of a located opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentInfo {
    /// Index into the opponent list.
    pub opponent_index: usize,
    /// Row id of the opponent in the host table.
    pub triad_id: u32,
    /// Achievement/display order, when the host has one.
    pub achievement_id: Option<u16>,
    /// Fee to start a match.
    pub match_fee: i32,
    /// Map location, when coordinates could be resolved.
    pub location: Option<MapLink>,
    /// Cards this opponent can reward.
    pub reward_cards: Vec<u32>,
}
