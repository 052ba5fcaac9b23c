//! Small, self-consistent host snapshot shared by tests.
//!
//! Opponents:
//! - 1001 "Triple Triad Master" (npc 2009): located, two rewards, achievement order 3.
//! - 1002 "Wymond" (npc 2002): located, one unresolvable reward, no achievement.
//! - 1003 "Roger" (npc 2003): no NPC placement, dropped by the finalizer.
//! - 1004 "Idle" (npc 2004): no cards, disabled.
//! - 1005: its npc has no name row, skipped.

use crate::source::{
    ENpcBase, ENpcResident, Item, Level, Map, Sheet, SnapshotSource, TripleTriad, TripleTriadCard,
    TripleTriadCardRarity, TripleTriadCardResident, TripleTriadCardType, TripleTriadResident,
    TripleTriadRule,
};

/// Infallible sheet builder for fixture rows, which always serialize.
pub(crate) trait FixtureSheets {
    fn sheet<T: Sheet>(self, rows: impl IntoIterator<Item = T>) -> Self;
}

impl FixtureSheets for SnapshotSource {
    fn sheet<T: Sheet>(self, rows: impl IntoIterator<Item = T>) -> Self {
        self.with_sheet(rows).expect("fixture rows serialize")
    }
}

pub(crate) const RULE_NAMES: [&str; 16] = [
    "",
    "Roulette",
    "All Open",
    "Three Open",
    "Same",
    "Sudden Death",
    "Plus",
    "Random",
    "Order",
    "Chaos",
    "Reverse",
    "Fallen Ace",
    "Ascension",
    "Descension",
    "Swap",
    "Draft",
];

pub(crate) fn rule_rows() -> Vec<TripleTriadRule> {
    RULE_NAMES
        .iter()
        .enumerate()
        .map(|(id, name)| TripleTriadRule {
            row_id: id as u32,
            name: (*name).to_string(),
        })
        .collect()
}

pub(crate) fn card_row(
    row_id: u32,
    [top, bottom, left, right]: [u8; 4],
    card_type: u8,
    card_rarity: u8,
) -> TripleTriadCardResident {
    TripleTriadCardResident {
        row_id,
        top,
        bottom,
        left,
        right,
        card_type,
        card_rarity,
        order: row_id as u16,
        ui_priority: 1,
        sort_key: 100 + row_id as u16,
        sale_value: 10 * row_id as u16,
    }
}

pub(crate) fn card_name(row_id: u32) -> TripleTriadCard {
    TripleTriadCard {
        row_id,
        name: format!("Card {row_id}"),
    }
}

/// Card stat rows 0..=7; rows 0 and 6 are unused slots, card 5 shares
/// sides with card 1.
pub(crate) fn card_rows() -> Vec<TripleTriadCardResident> {
    vec![
        card_row(0, [0, 0, 0, 0], 0, 0),
        card_row(1, [1, 2, 3, 4], 0, 1),
        card_row(2, [5, 5, 1, 1], 1, 2),
        card_row(3, [2, 7, 3, 2], 2, 3),
        card_row(4, [8, 1, 2, 6], 4, 5),
        card_row(5, [1, 2, 3, 4], 3, 4),
        card_row(6, [0, 3, 3, 3], 0, 1),
        card_row(7, [9, 9, 9, 9], 9, 9),
    ]
}

fn opponent(
    row_id: u32,
    rules: Vec<u32>,
    cards_fixed: Option<Vec<u32>>,
    cards_variable: Option<Vec<u32>>,
    item_possible_reward: Vec<u32>,
    fee: i32,
) -> TripleTriad {
    TripleTriad {
        row_id,
        rules,
        cards_fixed,
        cards_variable,
        item_possible_reward,
        fee,
    }
}

pub(crate) fn opponent_rows() -> Vec<TripleTriad> {
    vec![
        opponent(0, vec![], None, None, vec![], 0),
        opponent(
            1001,
            vec![4, 6, 0],
            Some(vec![1, 2, 0, 0, 0]),
            Some(vec![3, 4, 5, 0, 0]),
            vec![5001, 5002],
            100,
        ),
        opponent(
            1002,
            vec![],
            Some(vec![7, 0, 0, 0, 0]),
            None,
            vec![5003, 0],
            50,
        ),
        opponent(
            1003,
            vec![1],
            Some(vec![1, 0, 0, 0, 0]),
            Some(vec![0; 5]),
            vec![5001],
            10,
        ),
        opponent(1004, vec![], Some(vec![0; 5]), Some(vec![0; 5]), vec![], 0),
        opponent(1005, vec![], Some(vec![2, 0, 0, 0, 0]), None, vec![], 0),
    ]
}

fn npc_base(row_id: u32, enpc_data: Vec<u32>) -> ENpcBase {
    ENpcBase { row_id, enpc_data }
}

fn npc_name(row_id: u32, singular: &str) -> ENpcResident {
    ENpcResident {
        row_id,
        singular: singular.to_string(),
    }
}

fn level(row_id: u32, kind: u8, object: u32, [x, y, z]: [f32; 3], map: u32) -> Level {
    Level {
        row_id,
        x,
        y,
        z,
        kind,
        object,
        map,
        territory: map + 118,
    }
}

pub(crate) fn snapshot() -> SnapshotSource {
    SnapshotSource::new()
        .sheet(rule_rows())
        .sheet(
            ["", "Primal", "Scion", "Beastman", "Garlean"]
                .iter()
                .enumerate()
                .map(|(id, name)| TripleTriadCardType {
                    row_id: id as u32,
                    name: (*name).to_string(),
                }),
        )
        .sheet((0..6).map(|id| TripleTriadCardRarity {
            row_id: id,
            stars: id as u8,
        }))
        .sheet(card_rows())
        .sheet((0..=7).map(card_name))
        .sheet(opponent_rows())
        .sheet(vec![
            npc_base(2002, vec![1002]),
            npc_base(2003, vec![0, 1003]),
            npc_base(2004, vec![1004]),
            npc_base(2006, vec![1005]),
            npc_base(2009, vec![0, 1001, 0]),
            npc_base(2010, vec![1001]),
            npc_base(2011, vec![77]),
        ])
        .sheet(vec![
            npc_name(2002, "Wymond"),
            npc_name(2003, "Roger"),
            npc_name(2004, "Idle"),
            npc_name(2009, "Triple Triad Master"),
            npc_name(2010, "Impostor"),
            npc_name(2011, "Bystander"),
        ])
        .sheet(vec![
            TripleTriadResident {
                row_id: 1001,
                order: 3,
            },
            TripleTriadResident {
                row_id: 1003,
                order: 1,
            },
        ])
        .sheet(vec![
            level(1, Level::TYPE_NPC, 2009, [0.0, 5.0, 512.0], 12),
            level(2, Level::TYPE_NPC, 2002, [-100.0, 0.0, 0.0], 13),
            level(3, 2, 2003, [0.0, 0.0, 0.0], 12),
            level(4, Level::TYPE_NPC, 4242, [0.0, 0.0, 0.0], 12),
        ])
        .sheet(vec![
            Map {
                row_id: 12,
                offset_x: 0,
                offset_y: 0,
                size_factor: 100,
            },
            Map {
                row_id: 13,
                offset_x: 100,
                offset_y: 0,
                size_factor: 200,
            },
        ])
        .sheet(vec![
            Item {
                row_id: 5001,
                additional_data: 1,
            },
            Item {
                row_id: 5002,
                additional_data: 5,
            },
            Item {
                row_id: 5003,
                additional_data: 999,
            },
        ])
}
