//! World position → map coordinate conversion.

/// Convert a raw world coordinate into the map coordinate shown to players.
///
/// `offset` and `size_factor` come from the map's metadata; `size_factor`
/// is a percentage.
pub fn to_map_coord(raw: f32, offset: f32, size_factor: f32) -> f32 {
    let scale = size_factor / 100.0;
    let shifted = (raw + offset) * scale;
    ((41.0 / scale) * ((shifted + 1024.0) / 2048.0)) + 1.0
}
