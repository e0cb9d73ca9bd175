//! Layout helpers: centering, row spacing, scroll anchoring.

/// Narrow an `i64` coordinate to `i32`, saturating at the range ends.
pub fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Compute the centered offset of a child within a parent.
///
/// Uses floor division, so a child taller than its parent gets a negative
/// offset that rounds away from zero (`center(10, 13) == -2`). Plain signed
/// `/` would truncate toward zero and give -1 there.
pub fn center(parent_size: u32, child_size: u32) -> i32 {
    saturate((i64::from(parent_size) - i64::from(child_size)).div_euclid(2))
}

/// Gap between consecutive items of a carousel row.
///
/// `slots` items are expected to share `total` pixels: one expanded item of
/// width `front_w` and `slots - 1` collapsed items of width `back_w`. The
/// remaining width is split evenly across the `slots - 1` gaps, truncating
/// toward zero and saturating at the `i32` range. With fewer than two slots
/// there is no gap to derive and `fallback` is returned.
pub fn row_spacing(total: u32, slots: u32, back_w: u32, front_w: u32, fallback: i32) -> i32 {
    if slots <= 1 {
        return fallback;
    }
    let gaps = i64::from(slots) - 1;
    let free = i64::from(total) - i64::from(back_w) * gaps - i64::from(front_w);
    saturate(free / gaps)
}

/// First index of the scroll window around `selection`.
///
/// Keeps two items of lead-in before the selection, never scrolls past the
/// point where the last `slots` items fill the row, and never goes below 0.
pub fn scroll_anchor(selection: usize, len: usize, slots: u32) -> usize {
    let lead_in = selection as i64 - 2;
    let tail = len as i64 - i64::from(slots);
    lead_in.min(tail).max(0) as usize
}
