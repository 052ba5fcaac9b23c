use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::DataWarning,
    model::{MapLink, OpponentInfo},
};

use super::BuildContext;

/// Promote located opponents into the catalogues and build reverse links.
pub(super) fn run(ctx: &mut BuildContext<'_>) {
    let mut dropped = 0;
    for entry in ctx.cache.entries.values_mut() {
        if entry.map_id == 0 {
            // common: plenty of opponents have no placement
            dropped += 1;
            continue;
        }
        entry.opponent_index = Some(ctx.data.opponents.len());
        ctx.data.opponents.push(entry.opponent.clone());
    }
    if dropped > 0 {
        debug!("skipped {dropped} npcs without location");
    }

    if ctx.data.opponents.len() > 1 {
        ctx.data.opponents.sort_by_key(|npc| npc.id);

        // keep cached indices pointing at the same opponent after sorting
        let positions: HashMap<usize, usize> = ctx
            .data
            .opponents
            .iter()
            .enumerate()
            .map(|(index, npc)| (npc.id, index))
            .collect();
        for entry in ctx.cache.entries.values_mut() {
            if entry.opponent_index.is_some() {
                entry.opponent_index = positions.get(&entry.opponent.id).copied();
            }
        }
    }

    let mut warnings = Vec::new();
    for (enpc_id, entry) in &ctx.cache.entries {
        let Some(opponent_index) = entry.opponent_index else {
            continue;
        };

        let achievement_id = ctx.cache.achievements.get(&entry.triad_id).copied();
        if achievement_id.is_none() {
            warnings.push(DataWarning::MissingAchievement {
                triad_id: entry.triad_id,
            });
        }

        let location = entry.map_coords.map(|[x, y]| MapLink {
            territory_id: entry.territory_id,
            map_id: entry.map_id,
            x,
            y,
        });

        let mut info = OpponentInfo {
            opponent_index,
            triad_id: entry.triad_id,
            achievement_id,
            match_fee: entry.match_fee,
            location,
            reward_cards: Vec::with_capacity(entry.reward_cards.len()),
        };

        for card_id in entry.reward_cards.iter().copied() {
            info.reward_cards.push(card_id);

            if opponent_index >= ctx.data.opponents.len() {
                warnings.push(DataWarning::RewardLinkOutOfRange {
                    opponent_index,
                    enpc_id: *enpc_id,
                });
                continue;
            }
            if let Some(card_info) = ctx.data.card_info.get_mut(&card_id) {
                card_info.reward_opponents.push(opponent_index);
            }
        }

        ctx.data.opponent_info.insert(opponent_index, info);
    }

    for warning in warnings {
        ctx.warn(warning);
    }
}
