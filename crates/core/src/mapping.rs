//! Fixed translations between host ids and the game logic's own enumerations.
//!
//! These tables encode historical ordering decisions of both sides and are
//! maintained by hand. Never derive them from data.

use once_cell::sync::Lazy;

use crate::model::{CardRarity, CardType};

/// Number of rules known to the game logic.
pub const RULE_COUNT: usize = 16;

/// Host card type id → logic card type.
pub const CARD_TYPE_MAP: [CardType; 5] = [
    CardType::None,
    CardType::Primal,
    CardType::Scion,
    CardType::Beastman,
    CardType::Garlean,
];

/// Host card rarity id → logic rarity. Host id `0` is unused and maps to common.
pub const CARD_RARITY_MAP: [CardRarity; 6] = [
    CardRarity::Common,
    CardRarity::Common,
    CardRarity::Uncommon,
    CardRarity::Rare,
    CardRarity::Epic,
    CardRarity::Legendary,
];

/// Logic rule index → host rule row id.
pub const RULE_LOGIC_TO_HOST: [u32; RULE_COUNT] =
    [0, 1, 2, 3, 5, 10, 11, 4, 6, 12, 13, 8, 9, 14, 7, 15];

/// Internal keys of the rules, in logic order.
pub const RULE_KEYS: [&str; RULE_COUNT] = [
    "none",
    "roulette",
    "all_open",
    "three_open",
    "sudden_death",
    "reverse",
    "fallen_ace",
    "same",
    "plus",
    "ascension",
    "descension",
    "order",
    "chaos",
    "swap",
    "random",
    "draft",
];

const _: () = assert!(CARD_TYPE_MAP.len() == CardType::ALL.len());

/// Host rule row id → logic rule index, the inverse of [`RULE_LOGIC_TO_HOST`].
pub static RULE_HOST_TO_LOGIC: Lazy<[usize; RULE_COUNT]> = Lazy::new(|| {
    let mut inverse = [0; RULE_COUNT];
    for (logic, host) in RULE_LOGIC_TO_HOST.iter().enumerate() {
        inverse[*host as usize] = logic;
    }
    inverse
});

/// Map a raw host card type id, degrading to [`CardType::None`].
pub fn convert_card_type(raw: u8) -> CardType {
    CARD_TYPE_MAP
        .get(raw as usize)
        .copied()
        .unwrap_or(CardType::None)
}

/// Map a raw host rarity id, degrading to [`CardRarity::Common`].
pub fn convert_card_rarity(raw: u8) -> CardRarity {
    CARD_RARITY_MAP
        .get(raw as usize)
        .copied()
        .unwrap_or(CardRarity::Common)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_map_is_a_permutation() {
        let mut seen = [false; RULE_COUNT];
        for host in RULE_LOGIC_TO_HOST {
            assert!(!seen[host as usize], "host rule {host} mapped twice");
            seen[host as usize] = true;
        }

        for (logic, host) in RULE_LOGIC_TO_HOST.iter().enumerate() {
            assert_eq!(RULE_HOST_TO_LOGIC[*host as usize], logic);
        }
    }

    #[test]
    fn out_of_range_ids_degrade() {
        assert_eq!(convert_card_type(3), CardType::Beastman);
        assert_eq!(convert_card_type(200), CardType::None);
        assert_eq!(convert_card_rarity(0), CardRarity::Common);
        assert_eq!(convert_card_rarity(5), CardRarity::Legendary);
        assert_eq!(convert_card_rarity(6), CardRarity::Common);
    }
}
