use crate::{
    error::DataResult,
    source::{load_sheet, TripleTriadResident},
};

use super::BuildContext;

/// Collect opponent display order. An absent table only degrades ordering.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    if let Some(sheet) = load_sheet::<TripleTriadResident>(ctx.source)? {
        ctx.cache
            .achievements
            .extend(sheet.iter().map(|row| (row.row_id, row.order)));
    }
    Ok(())
}
