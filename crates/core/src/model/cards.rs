use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Card type as used by the game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// No type.
    None,
    /// Primal.
    Primal,
    /// Scion.
    Scion,
    /// Beastman.
    Beastman,
    /// Garlean.
    Garlean,
}

impl CardType {
    /// Every type, in logic order.
    pub const ALL: [CardType; 5] = [
        CardType::None,
        CardType::Primal,
        CardType::Scion,
        CardType::Beastman,
        CardType::Garlean,
    ];
}

/// Card rarity as used by the game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardRarity {
    /// One star.
    Common,
    /// Two stars.
    Uncommon,
    /// Three stars.
    Rare,
    /// Four stars.
    Epic,
    /// Five stars.
    Legendary,
}

/// Directional power values in the game logic's side convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSides {
    /// Top side.
    pub top: u8,
    /// Bottom side.
    pub bottom: u8,
    /// Left side.
    pub left: u8,
    /// Right side.
    pub right: u8,
}

/// A playable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card id, equal to its index in the [`CardCatalogue`].
    pub id: u32,
    /// Localized name.
    pub name: String,
    /// Card rarity.
    pub rarity: CardRarity,
    /// Card type.
    pub card_type: CardType,
    /// Power values.
    pub sides: CardSides,
    /// Display order.
    pub order: u16,
    /// UI priority.
    pub ui_priority: u8,
    /// Ids of other cards with identical sides, filled by
    /// [`CardCatalogue::link_same_sides`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_sides: Vec<u32>,
}

/// Extended card information not needed by the game logic itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardInfo {
    /// Card id.
    pub card_id: u32,
    /// Collection sort key.
    pub sort_key: u16,
    /// Vendor sale value.
    pub sale_value: u16,
    /// Item granting the card, if any opponent rewards it.
    pub item_id: Option<u32>,
    /// Indices of opponents rewarding the card.
    pub reward_opponents: Vec<usize>,
}

/// Cards indexed directly by id. Slot `0` and any unused ids hold `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalogue {
    cards: Vec<Option<Card>>,
}

impl CardCatalogue {
    /// Number of slots, including empty ones.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no slot was assigned yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card by id.
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.get(id as usize).and_then(Option::as_ref)
    }

    /// Raw slots, empty ones included.
    pub fn slots(&self) -> &[Option<Card>] {
        &self.cards
    }

    /// Iterate over the assigned cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().flatten()
    }

    /// Number of assigned cards.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn pad_to(&mut self, len: usize) {
        while self.cards.len() < len {
            self.cards.push(None);
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(Some(card));
    }

    /// Group cards sharing identical sides.
    ///
    /// Runs once after all cards are in place; each card lists the others
    /// in ascending id order.
    pub fn link_same_sides(&mut self) {
        let mut groups: HashMap<CardSides, Vec<u32>> = HashMap::new();
        for card in self.cards.iter().flatten() {
            groups.entry(card.sides).or_default().push(card.id);
        }

        for card in self.cards.iter_mut().flatten() {
            card.same_sides = groups
                .get(&card.sides)
                .map(|ids| ids.iter().copied().filter(|id| *id != card.id).collect())
                .unwrap_or_default();
        }
    }
}
