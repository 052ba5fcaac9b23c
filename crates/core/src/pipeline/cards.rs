use crate::{
    error::{DataError, DataResult},
    mapping::{convert_card_rarity, convert_card_type, CARD_RARITY_MAP, CARD_TYPE_MAP},
    model::{Card, CardInfo, CardSides},
    source::{
        load_sheet, TripleTriadCard, TripleTriadCardRarity, TripleTriadCardResident,
        TripleTriadCardType,
    },
};

use super::BuildContext;

/// Build the card catalogue and the matching extended card info.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    let stats = load_sheet::<TripleTriadCardResident>(ctx.source)?;
    let names = load_sheet::<TripleTriadCard>(ctx.source)?;
    let (stats, names) = match (stats, names) {
        (Some(stats), Some(names)) if stats.len() == names.len() => (stats, names),
        (stats, names) => {
            return Err(DataError::schema(
                "TripleTriadCardResident",
                format!(
                    "card data rows:{}, name rows:{}",
                    stats.map(|sheet| sheet.len()).unwrap_or(0),
                    names.map(|sheet| sheet.len()).unwrap_or(0)
                ),
            ))
        }
    };

    let types = load_sheet::<TripleTriadCardType>(ctx.source)?.map(|sheet| sheet.len());
    if types != Some(CARD_TYPE_MAP.len()) {
        return Err(DataError::schema(
            "TripleTriadCardType",
            format!("got:{}, expected:{}", types.unwrap_or(0), CARD_TYPE_MAP.len()),
        ));
    }
    let rarities = load_sheet::<TripleTriadCardRarity>(ctx.source)?.map(|sheet| sheet.len());
    if rarities != Some(CARD_RARITY_MAP.len()) {
        return Err(DataError::schema(
            "TripleTriadCardRarity",
            format!(
                "got:{}, expected:{}",
                rarities.unwrap_or(0),
                CARD_RARITY_MAP.len()
            ),
        ));
    }

    for row in stats.iter() {
        // zero top side marks an unused slot
        if row.top == 0 {
            continue;
        }

        let id = row.row_id;
        let name = names.get(id).ok_or_else(|| {
            DataError::cross_ref("TripleTriadCard", format!("no name row for card {id}"))
        })?;

        // Card ids are used directly as catalogue indices: linear, offset by
        // the empty slot 0. Large drift means the host reordered the table.
        let len = ctx.data.cards.len();
        if len.abs_diff(id as usize) > ctx.drift_slack {
            return Err(DataError::IndexDrift {
                expected: id,
                got: len,
            });
        }

        // host left/right are swapped relative to the logic's convention
        let card = Card {
            id,
            name: name.name.clone(),
            rarity: convert_card_rarity(row.card_rarity),
            card_type: convert_card_type(row.card_type),
            sides: CardSides {
                top: row.top,
                bottom: row.bottom,
                left: row.right,
                right: row.left,
            },
            order: row.order,
            ui_priority: row.ui_priority,
            same_sides: Vec::new(),
        };

        ctx.data.cards.pad_to(id as usize);
        ctx.data.cards.push(card);
        ctx.data.card_info.insert(
            id,
            CardInfo {
                card_id: id,
                sort_key: row.sort_key,
                sale_value: row.sale_value,
                ..CardInfo::default()
            },
        );
    }

    ctx.data.cards.link_same_sides();
    Ok(())
}
