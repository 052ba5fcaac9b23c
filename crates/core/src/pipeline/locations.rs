use crate::{
    coords::to_map_coord,
    error::DataResult,
    source::{load_sheet, Level, Map},
};

use super::BuildContext;

/// Attach map placement to cached opponents.
///
/// Missing tables or map rows leave entries unlocated; the finalizer drops
/// those.
pub(super) fn parse(ctx: &mut BuildContext<'_>) -> DataResult<()> {
    if let Some(levels) = load_sheet::<Level>(ctx.source)? {
        for level in levels.iter().filter(|level| level.kind == Level::TYPE_NPC) {
            if let Some(entry) = ctx.cache.entries.get_mut(&level.object) {
                entry.raw_coords = Some([level.x, level.y, level.z]);
                entry.map_id = level.map;
                entry.territory_id = level.territory;
            }
        }
    }

    if let Some(maps) = load_sheet::<Map>(ctx.source)? {
        for entry in ctx.cache.entries.values_mut() {
            let (Some(raw), Some(map)) = (entry.raw_coords, maps.get(entry.map_id)) else {
                continue;
            };
            // world z is the map's vertical axis, world y (height) is unused
            let size_factor = f32::from(map.size_factor);
            entry.map_coords = Some([
                to_map_coord(raw[0], f32::from(map.offset_x), size_factor),
                to_map_coord(raw[2], f32::from(map.offset_y), size_factor),
            ]);
        }
    }

    Ok(())
}
