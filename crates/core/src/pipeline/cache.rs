use std::collections::{BTreeMap, HashMap};

use crate::model::Opponent;

/// Per-opponent data collected across stages, keyed by `ENpcBase` row id.
#[derive(Debug, Clone)]
pub(crate) struct NpcCacheEntry {
    /// Row id in the opponent table.
    pub triad_id: u32,
    /// Index in the finalized opponent list, once promoted.
    pub opponent_index: Option<usize>,
    pub opponent: Opponent,

    pub raw_coords: Option<[f32; 3]>,
    pub map_coords: Option<[f32; 2]>,
    pub map_id: u32,
    pub territory_id: u32,

    pub reward_items: Vec<u32>,
    pub reward_cards: Vec<u32>,

    pub match_fee: i32,
}

impl NpcCacheEntry {
    pub fn new(triad_id: u32, opponent: Opponent, reward_items: Vec<u32>, match_fee: i32) -> Self {
        Self {
            triad_id,
            opponent_index: None,
            opponent,
            raw_coords: None,
            map_coords: None,
            map_id: 0,
            territory_id: 0,
            reward_items,
            reward_cards: Vec::new(),
            match_fee,
        }
    }
}

/// Transient state of one build attempt.
#[derive(Debug, Default)]
pub(crate) struct NpcCache {
    pub entries: BTreeMap<u32, NpcCacheEntry>,
    /// Opponent row id → achievement/display order.
    pub achievements: HashMap<u32, u16>,
}
