//! Generators for the four target point clouds.
//!
//! Three clouds scatter points along strokes approximating the glyphs
//! "1", "2" and "3"; the fourth scatters points over a thick sphere shell
//! used as the dispersed state between glyphs. Glyphs "2" and "3" are
//! authored in the YZ plane so they face the camera once the cloud has
//! rotated a quarter turn; for those, screen-x maps to local -z.

use ipja_core::{Vec3, lerp};

use crate::rng::Rng;

use std::f32::consts::PI;

/// Glyph "1": a vertical pillar with a serif sloping off the top left.
pub fn glyph_one(count: usize, rng: &mut Rng) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let (x, y) = if rng.next_f32() < 0.85 {
            // Main pillar
            let y = rng.next_f32() * 2.2 - 1.1;
            let x = rng.next_centered() * 0.35;
            (x, y)
        } else {
            // Serif, sloping from (0, 1.0) down to (-0.4, 0.6)
            let t = rng.next_f32();
            let x = lerp(0.0, -0.4, t) + rng.next_centered() * 0.1;
            let y = lerp(1.0, 0.6, t) + rng.next_centered() * 0.1;
            (x, y)
        };
        let z = rng.next_centered() * 0.3;
        points.push(Vec3::new(x, y, z));
    }
    points
}

/// Glyph "2": top arc, diagonal stroke, flat base. YZ plane.
pub fn glyph_two(count: usize, rng: &mut Rng) -> Vec<Vec3> {
    // The diagonal picks up where the arc sweep ends.
    let arc_end = -0.1 * PI;
    let diag_start_x = 0.55 * arc_end.cos();
    let diag_start_y = 0.5 + 0.55 * arc_end.sin();

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.next_f32();
        let (screen_x, screen_y) = if r < 0.35 {
            // Top arc, sweeping from the left (180 deg) over the top and
            // down past the right edge
            let t = rng.next_f32();
            let theta = PI * (1.0 - t * 1.1);
            (0.55 * theta.cos(), 0.5 + 0.55 * theta.sin())
        } else if r < 0.70 {
            // Diagonal from the arc end down to the bottom left
            let t = rng.next_f32();
            (
                lerp(diag_start_x, -0.55, t),
                lerp(diag_start_y, -1.0, t),
            )
        } else {
            // Base stroke, left to right
            (lerp(-0.55, 0.6, rng.next_f32()), -1.0)
        };

        let x = rng.next_centered() * 0.2;
        points.push(Vec3::new(x, screen_y, -screen_x));
    }
    points
}

/// Glyph "3": two open arcs joined by a short waist connector. YZ plane.
pub fn glyph_three(count: usize, rng: &mut Rng) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.next_f32();
        let (screen_x, screen_y) = if r < 0.45 {
            // Upper arc, top-left around to the waist
            let t = rng.next_f32();
            let theta = lerp(2.6, -0.5, t);
            (0.5 * theta.cos(), 0.55 + 0.5 * theta.sin())
        } else if r < 0.90 {
            // Lower arc, waist around to the bottom-left, swept clockwise
            let t = rng.next_f32();
            let theta = lerp(0.5, -2.6, t);
            (0.5 * theta.cos(), -0.55 + 0.5 * theta.sin())
        } else {
            // Waist connector
            let t = rng.next_f32();
            (lerp(0.1, -0.2, t), rng.next_centered() * 0.1)
        };

        let x = rng.next_centered() * 0.15;
        points.push(Vec3::new(x, screen_y, -screen_x));
    }
    points
}

/// Dispersed state: points scattered uniformly over a thick sphere shell,
/// radius 3 to 5.
pub fn chaos(count: usize, rng: &mut Rng) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let theta = rng.next_f32() * 2.0 * PI;
        let phi = (2.0 * rng.next_f32() - 1.0).acos();
        let r = 3.0 + rng.next_f32() * 2.0;
        points.push(Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_honor_count() {
        let mut rng = Rng::new(1);
        for generator in [glyph_one, glyph_two, glyph_three, chaos] {
            assert_eq!(generator(500, &mut rng).len(), 500);
        }
    }

    #[test]
    fn chaos_stays_on_the_shell() {
        let mut rng = Rng::new(9);
        for p in chaos(2000, &mut rng) {
            let r = p.length();
            assert!((3.0..=5.0).contains(&r), "radius {r} off the shell");
        }
    }

    #[test]
    fn glyph_one_stays_in_its_box() {
        let mut rng = Rng::new(3);
        for p in glyph_one(2000, &mut rng) {
            assert!(p.x.abs() <= 0.5);
            assert!((-1.1..=1.1).contains(&p.y));
            assert!(p.z.abs() <= 0.15);
        }
    }

    #[test]
    fn flat_glyphs_are_thin_in_x() {
        let mut rng = Rng::new(4);
        for p in glyph_two(1000, &mut rng) {
            assert!(p.x.abs() <= 0.1);
        }
        for p in glyph_three(1000, &mut rng) {
            assert!(p.x.abs() <= 0.075);
        }
    }
}
