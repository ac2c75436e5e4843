// Easing curves for volume ramps. `progress` is clamped to [0, 1].

/// Fade-out gain: `initial * (1 - p^2)`, never below zero.
#[inline]
pub fn fade_out_volume(initial: f32, progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    (initial * (1.0 - p * p)).max(0.0)
}

/// Ease-out cubic: `1 - (1 - p)^3`.
#[inline]
pub fn ease_out_cubic(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Fade-in gain scaled to `ceiling` and never above it.
#[inline]
pub fn fade_in_volume(ceiling: f32, progress: f32) -> f32 {
    (ease_out_cubic(progress) * ceiling).min(ceiling)
}
