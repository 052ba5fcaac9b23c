use crate::{
    error::{DataError, DataResult},
    mapping::RULE_LOGIC_TO_HOST,
    source::{load_sheet, TripleTriadRule},
};

use super::BuildContext;

/// Copy localized rule names onto the rule catalogue.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    let expected = ctx.data.rules.len();
    let sheet = load_sheet::<TripleTriadRule>(ctx.source)?;
    let sheet = match sheet {
        Some(sheet) if sheet.len() == expected => sheet,
        other => {
            return Err(DataError::schema(
                "TripleTriadRule",
                format!(
                    "got:{}, expected:{expected}",
                    other.map(|sheet| sheet.len()).unwrap_or(0)
                ),
            ))
        }
    };

    // resolve everything first so a missing row leaves the names untouched
    let names = RULE_LOGIC_TO_HOST
        .iter()
        .map(|host_id| {
            sheet
                .get(*host_id)
                .map(|row| row.name.clone())
                .ok_or_else(|| DataError::schema("TripleTriadRule", format!("missing row {host_id}")))
        })
        .collect::<DataResult<Vec<_>>>()?;

    for (rule, name) in ctx.data.rules.iter_mut().zip(names) {
        rule.name = name;
    }

    Ok(())
}
