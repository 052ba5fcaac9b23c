use crate::{
    error::{DataError, DataResult},
    mapping::convert_card_type,
    model::CardType,
    source::{load_sheet, TripleTriadCardType},
};

use super::BuildContext;

/// Copy localized card type names into their localization slots.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    let expected = CardType::ALL.len();
    let sheet = match load_sheet::<TripleTriadCardType>(ctx.source)? {
        Some(sheet) if sheet.len() == expected => sheet,
        other => {
            return Err(DataError::schema(
                "TripleTriadCardType",
                format!(
                    "got:{}, expected:{expected}",
                    other.map(|sheet| sheet.len()).unwrap_or(0)
                ),
            ))
        }
    };

    for row in sheet.iter() {
        let card_type = u8::try_from(row.row_id)
            .map(convert_card_type)
            .unwrap_or(CardType::None);
        ctx.data.card_type_names.insert(card_type, row.name.clone());
    }

    Ok(())
}
