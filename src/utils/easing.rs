/// Cubic ease-in-out over normalized progress.
///
/// Accelerates through the first half, decelerates through the second;
/// input is clamped into `[0, 1]` so the curve never overshoots.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
