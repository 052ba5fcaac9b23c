use std::collections::{BTreeSet, HashMap};

use crate::{
    error::{DataError, DataResult},
    mapping::RULE_HOST_TO_LOGIC,
    model::{CardCatalogue, Opponent, Rule, OPPONENT_DECK_SLOTS},
    source::{load_sheet, require_sheet, ENpcBase, ENpcResident, Table, TripleTriad, TripleTriadRule},
};

use super::{cache::NpcCacheEntry, BuildContext};

struct NpcIds {
    enpc_id: u32,
    name: String,
}

/// Create opponents and seed the transient cache with them.
///
/// Opponents are not published here; the finalizer drops the ones without
/// a location first.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    let npc_sheet = load_sheet::<TripleTriad>(ctx.source)?;

    // row ids are sparse and 0 is reserved
    let triad_ids: BTreeSet<u32> = npc_sheet
        .iter()
        .flat_map(Table::ids)
        .filter(|id| *id != 0)
        .collect();
    let Some(npc_sheet) = npc_sheet.filter(|_| !triad_ids.is_empty()) else {
        return Err(DataError::EmptyDataset {
            table: "TripleTriad",
        });
    };

    let names = resolve_names(ctx, &triad_ids)?;
    let host_rules = require_sheet::<TripleTriadRule>(ctx.source)?;

    let mut name_loc_id = 0;
    for row in npc_sheet.iter() {
        // no name = no npc entry, disabled
        let Some(ids) = names.get(&row.row_id) else {
            continue;
        };

        let rules = collect_rules(row, &ctx.data.rules, &host_rules)?;
        let cards_fixed = collect_cards(row.row_id, row.cards_fixed.as_deref(), &ctx.data.cards)?;
        let cards_variable =
            collect_cards(row.row_id, row.cards_variable.as_deref(), &ctx.data.cards)?;

        if cards_fixed.iter().chain(&cards_variable).all(|id| *id == 0) {
            // no cards = disabled
            continue;
        }

        let opponent = Opponent {
            id: name_loc_id,
            name: ids.name.clone(),
            rules,
            cards_fixed,
            cards_variable,
        };
        name_loc_id += 1;

        let entry = NpcCacheEntry::new(
            row.row_id,
            opponent,
            row.item_possible_reward.clone(),
            row.fee,
        );
        if ctx.cache.entries.insert(ids.enpc_id, entry).is_some() {
            return Err(DataError::cross_ref(
                "ENpcBase",
                format!("npc {} linked to more than one opponent", ids.enpc_id),
            ));
        }
    }

    Ok(())
}

/// Opponent row id → owning NPC and its name. The first NPC linking an
/// opponent wins.
fn resolve_names(
    ctx: &BuildContext<'_>,
    triad_ids: &BTreeSet<u32>,
) -> DataResult<HashMap<u32, NpcIds>> {
    let npc_names = load_sheet::<ENpcResident>(ctx.source)?;
    let npc_bases = load_sheet::<ENpcBase>(ctx.source)?;
    let (npc_names, npc_bases) = match (npc_names, npc_bases) {
        (Some(names), Some(bases)) => (names, bases),
        (names, bases) => {
            return Err(DataError::schema(
                "ENpcBase",
                format!(
                    "npc name rows:{}, npc base rows:{}",
                    names.map(|sheet| sheet.len()).unwrap_or(0),
                    bases.map(|sheet| sheet.len()).unwrap_or(0)
                ),
            ))
        }
    };

    let mut resolved = HashMap::new();
    for base in npc_bases.iter() {
        let Some(triad_id) = base
            .enpc_data
            .iter()
            .copied()
            .find(|id| triad_ids.contains(id))
        else {
            continue;
        };
        if resolved.contains_key(&triad_id) {
            continue;
        }
        if let Some(name) = npc_names.get(base.row_id) {
            resolved.insert(
                triad_id,
                NpcIds {
                    enpc_id: base.row_id,
                    name: name.singular.clone(),
                },
            );
        }
    }

    Ok(resolved)
}

fn collect_rules(
    row: &TripleTriad,
    rules: &[Rule],
    host_rules: &Table<TripleTriadRule>,
) -> DataResult<Vec<usize>> {
    let mut result = Vec::new();
    for host_id in row.rules.iter().copied().filter(|id| *id != 0) {
        if host_id as usize >= rules.len() {
            return Err(DataError::schema(
                "TripleTriad",
                format!("npc {} uses rule.id:{host_id}", row.row_id),
            ));
        }

        let logic_index = RULE_HOST_TO_LOGIC[host_id as usize];
        let host_name = host_rules.get(host_id).map(|rule| rule.name.as_str());
        if host_name != Some(rules[logic_index].name.as_str()) {
            return Err(DataError::cross_ref(
                "TripleTriadRule",
                format!("failed to match npc {} rule.id:{host_id}", row.row_id),
            ));
        }
        result.push(logic_index);
    }
    Ok(result)
}

fn collect_cards(
    triad_id: u32,
    slots: Option<&[u32]>,
    cards: &CardCatalogue,
) -> DataResult<[u32; OPPONENT_DECK_SLOTS]> {
    let mut result = [0; OPPONENT_DECK_SLOTS];
    let Some(slots) = slots else {
        return Ok(result);
    };

    if slots.len() != OPPONENT_DECK_SLOTS {
        return Err(DataError::schema(
            "TripleTriad",
            format!("npc {triad_id} has {} card slots", slots.len()),
        ));
    }

    for (slot, card_id) in result.iter_mut().zip(slots.iter().copied()) {
        if card_id == 0 {
            continue;
        }
        if cards.get(card_id).is_none() {
            return Err(DataError::cross_ref(
                "TripleTriadCard",
                format!("npc {triad_id} uses card.id:{card_id}"),
            ));
        }
        *slot = card_id;
    }
    Ok(result)
}
