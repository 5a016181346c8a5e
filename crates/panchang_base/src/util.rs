//! Shared angle helpers for the classification tables.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// 0-based index of the equal sector of width `span` that contains `lon`.
///
/// Sectors are half-open `[k*span, (k+1)*span)`. The floor estimate is
/// corrected against the boundary values `k as f64 * span` so that a
/// longitude built that way lands in sector `k`, not `k - 1`.
pub fn sector_index(lon: f64, span: f64, count: u8) -> u8 {
    let lon = normalize_360(lon);
    let mut idx = (lon / span).floor() as i32;
    if lon < idx as f64 * span {
        idx -= 1;
    } else if lon >= (idx + 1) as f64 * span {
        idx += 1;
    }
    idx.clamp(0, count as i32 - 1) as u8
}
