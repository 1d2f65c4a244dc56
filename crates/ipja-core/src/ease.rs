//! Easing curves for phase progress.
//!
//! Each function maps normalized progress in [0, 1] to eased progress in
//! [0, 1], hitting 0 at the start and 1 at the end exactly.

/// Linear interpolation between two scalars.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-out: fast start, soft landing.
pub fn cubic_out(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3)
}

/// Quadratic ease-out.
pub fn quad_out(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(2)
}

/// Quadratic ease-in-out: slow at both ends, fast through the middle.
pub fn quad_in_out(p: f32) -> f32 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        -1.0 + (4.0 - 2.0 * p) * p
    }
}
