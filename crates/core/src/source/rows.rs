//! Typed rows of the host tables consumed by the pipeline.
//!
//! Field names follow the host schema; only the columns the pipeline reads
//! are modelled, anything else in a row is ignored while decoding.

use serde::{Deserialize, Serialize};

use super::Sheet;

macro_rules! sheet {
    ($ty:ident, $name:literal) => {
        impl Sheet for $ty {
            const NAME: &'static str = $name;

            fn row_id(&self) -> u32 {
                self.row_id
            }
        }
    };
}

/// Localized name of a game rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripleTriadRule {
    /// Host row id.
    pub row_id: u32,
    /// Localized rule name.
    #[serde(default)]
    pub name: String,
}
sheet!(TripleTriadRule, "TripleTriadRule");

/// Localized name of a card type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripleTriadCardType {
    /// Host row id.
    pub row_id: u32,
    /// Localized type name, empty for the untyped row.
    #[serde(default)]
    pub name: String,
}
sheet!(TripleTriadCardType, "TripleTriadCardType");

/// Card rarity row; only its presence matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripleTriadCardRarity {
    /// Host row id.
    pub row_id: u32,
    /// Star count shown in game.
    #[serde(default)]
    pub stars: u8,
}
sheet!(TripleTriadCardRarity, "TripleTriadCardRarity");

/// Card stats. Directional values use the host's own side convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripleTriadCardResident {
    /// Host row id.
    pub row_id: u32,
    /// Top value; `0` marks an unused row.
    pub top: u8,
    /// Bottom value.
    pub bottom: u8,
    /// Host "left" value, the right side in game.
    pub left: u8,
    /// Host "right" value, the left side in game.
    pub right: u8,
    /// Raw `TripleTriadCardType` id.
    pub card_type: u8,
    /// Raw `TripleTriadCardRarity` id.
    pub card_rarity: u8,
    /// Collection order.
    pub order: u16,
    /// UI grouping priority.
    pub ui_priority: u8,
    /// Sort key of the in-game card list.
    pub sort_key: u16,
    /// Gil value when sold.
    pub sale_value: u16,
}
sheet!(TripleTriadCardResident, "TripleTriadCardResident");

/// Localized card name, row ids shared with [`TripleTriadCardResident`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripleTriadCard {
    /// Host row id.
    pub row_id: u32,
    /// Localized card name.
    #[serde(default)]
    pub name: String,
}
sheet!(TripleTriadCard, "TripleTriadCard");

/// Opponent definition. Row ids are sparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripleTriad {
    /// Host row id.
    pub row_id: u32,
    /// Host rule ids, `0` marks an unused slot.
    pub rules: Vec<u32>,
    /// Card ids always in the deck, five slots when present.
    pub cards_fixed: Option<Vec<u32>>,
    /// Card ids drawn at random, five slots when present.
    pub cards_variable: Option<Vec<u32>>,
    /// Item ids, `0` marks an unused slot.
    pub item_possible_reward: Vec<u32>,
    /// Match fee in gil.
    pub fee: i32,
}
sheet!(TripleTriad, "TripleTriad");

/// NPC display name, row ids shared with [`ENpcBase`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ENpcResident {
    /// Host row id.
    pub row_id: u32,
    /// Display name.
    #[serde(default)]
    pub singular: String,
}
sheet!(ENpcResident, "ENpcResident");

/// NPC entity with its embedded data links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ENpcBase {
    /// Host row id.
    pub row_id: u32,
    /// Linked data rows, opponents among them.
    #[serde(default)]
    pub enpc_data: Vec<u32>,
}
sheet!(ENpcBase, "ENpcBase");

/// Achievement/display order of an opponent, keyed by opponent row id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripleTriadResident {
    /// Host row id.
    pub row_id: u32,
    /// Achievement order.
    #[serde(default)]
    pub order: u16,
}
sheet!(TripleTriadResident, "TripleTriadResident");

/// Placed world object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    /// Host row id.
    pub row_id: u32,
    /// World x.
    pub x: f32,
    /// World height, unused by map coordinates.
    pub y: f32,
    /// World z, the vertical axis of the map.
    pub z: f32,
    /// Entity type tag, see [`Level::TYPE_NPC`].
    #[serde(rename = "type")]
    pub kind: u8,
    /// Id of the placed entity; an `ENpcBase` row for NPC placements.
    pub object: u32,
    /// `Map` row of the placement.
    pub map: u32,
    /// Territory row of the placement.
    pub territory: u32,
}
sheet!(Level, "Level");

impl Level {
    /// Type tag of NPC placements.
    pub const TYPE_NPC: u8 = 8;
}

/// Map metadata used to convert world positions into map coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Map {
    /// Host row id.
    pub row_id: u32,
    /// Horizontal offset of the map.
    pub offset_x: i16,
    /// Vertical offset of the map.
    pub offset_y: i16,
    /// Zoom in percent, `100` is a full-size map.
    pub size_factor: u16,
}
sheet!(Map, "Map");

/// Item row; card items carry the card id in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Host row id.
    pub row_id: u32,
    /// Card id for card items.
    #[serde(default)]
    pub additional_data: u32,
}
sheet!(Item, "Item");
