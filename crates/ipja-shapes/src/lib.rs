//! Point-cloud shape generation for the ipja animation.
//!
//! A [`ShapeSet`] holds the four immutable clouds the animator morphs
//! between: three glyph silhouettes and one dispersed sphere shell. All
//! four are sampled once from a seeded generator and never mutated, so a
//! given (count, seed) pair always reproduces the same animation.

mod glyphs;
mod rng;

pub use rng::Rng;

use ipja_core::Vec3;

/// Seed used when the config does not provide one.
pub const DEFAULT_SEED: u64 = 0x1D0E_5EED;

/// The four precomputed target clouds, each holding the same number of
/// points. Point `i` of one shape morphs to point `i` of the next.
#[derive(Debug, Clone)]
pub struct ShapeSet {
    /// Glyph "1".
    pub one: Vec<Vec3>,
    /// Glyph "2", authored facing the rotated camera.
    pub two: Vec<Vec3>,
    /// Glyph "3", authored facing the rotated camera.
    pub three: Vec<Vec3>,
    /// Dispersed sphere shell used between glyphs.
    pub chaos: Vec<Vec3>,
}

impl ShapeSet {
    /// Sample all four shapes with `count` points each.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        Self {
            one: glyphs::glyph_one(count, &mut rng),
            two: glyphs::glyph_two(count, &mut rng),
            three: glyphs::glyph_three(count, &mut rng),
            chaos: glyphs::chaos(count, &mut rng),
        }
    }

    /// Number of points per shape.
    pub fn len(&self) -> usize {
        self.one.len()
    }

    /// True when generated with a zero count.
    pub fn is_empty(&self) -> bool {
        self.one.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shapes_share_the_count() {
        let shapes = ShapeSet::generate(777, DEFAULT_SEED);
        assert_eq!(shapes.len(), 777);
        assert_eq!(shapes.one.len(), 777);
        assert_eq!(shapes.two.len(), 777);
        assert_eq!(shapes.three.len(), 777);
        assert_eq!(shapes.chaos.len(), 777);
    }

    #[test]
    fn generation_is_reproducible() {
        let a = ShapeSet::generate(200, 5);
        let b = ShapeSet::generate(200, 5);
        assert_eq!(a.one, b.one);
        assert_eq!(a.chaos, b.chaos);
    }

    #[test]
    fn seeds_change_the_scatter() {
        let a = ShapeSet::generate(200, 5);
        let b = ShapeSet::generate(200, 6);
        assert_ne!(a.one, b.one);
    }
}
