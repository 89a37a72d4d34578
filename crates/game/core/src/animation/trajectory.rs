//! Parabolic jump arc.
//!
//! The arc is expressed as an offset from the jump anchor:
//!
//! ```text
//! dx = round(p × distance)
//! dy = round(4 × p × (1 − p) × max_height)     peak = max_height at p = 0.5
//! ```
//!
//! `dy` is a height, so callers subtract it from the anchor's Y (screen Y grows
//! downward).

/// Offset for progress `p` in `[0, 1]`. Out-of-range input is clamped.
pub fn arc(progress: f64, distance: i32, max_height: i32) -> (i32, i32) {
    let p = progress.clamp(0.0, 1.0);
    let dx = (p * f64::from(distance)).round() as i32;
    let dy = (4.0 * p * (1.0 - p) * f64::from(max_height)).round() as i32;
    (dx, dy)
}

/// Offset for `frame` of a `frame_count`-frame strip.
///
/// Progress is `frame / (frame_count - 1)`. A strip with fewer than two frames
/// has no arc and yields `(0, 0)`.
pub fn offset(frame: u32, frame_count: u32, distance: i32, max_height: i32) -> (i32, i32) {
    if frame_count <= 1 {
        return (0, 0);
    }
    let progress = f64::from(frame) / f64::from(frame_count - 1);
    arc(progress, distance, max_height)
}
