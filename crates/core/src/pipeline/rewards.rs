use crate::{
    error::{DataResult, DataWarning},
    source::{load_sheet, Item},
};

use super::BuildContext;

/// Resolve reward items of cached opponents into cards. Best effort: an
/// unresolvable reward is a warning, never a failure.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    let Some(items) = load_sheet::<Item>(ctx.source)? else {
        return Ok(());
    };

    let mut warnings = Vec::new();
    for entry in ctx.cache.entries.values_mut() {
        for item_id in entry.reward_items.iter().copied().filter(|id| *id != 0) {
            let Some(item) = items.get(item_id) else {
                continue;
            };

            let card_id = item.additional_data;
            if ctx.data.cards.get(card_id).is_none() {
                warnings.push(DataWarning::UnresolvedReward {
                    triad_id: entry.triad_id,
                    item_id,
                    additional_data: card_id,
                });
                continue;
            }

            if let Some(info) = ctx.data.card_info.get_mut(&card_id) {
                info.item_id = Some(item_id);
            }
            entry.reward_cards.push(card_id);
        }
    }

    for warning in warnings {
        ctx.warn(warning);
    }
    Ok(())
}
