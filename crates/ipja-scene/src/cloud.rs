//! The phase-driven particle animator.
//!
//! One [`ParticleCloud`] owns the four precomputed shapes and an output
//! buffer of one position per sample. Every frame the whole buffer is
//! recomputed from the elapsed time alone; nothing carries over between
//! frames, so the animation can be restarted from any clock value and
//! repeats exactly every cycle.

use ipja_core::{ACCENT, INK, Rgb, Vec3, cubic_out, lerp, quad_in_out, quad_out};
use ipja_shapes::ShapeSet;

use std::f32::consts::{FRAC_PI_2, PI};

use crate::phase::{CYCLE_SECONDS, Phase};

/// Default number of point samples in the cloud.
pub const PARTICLE_COUNT: usize = 5000;

/// Point size while the cloud is in its dark, settled states.
const BASE_POINT_SIZE: f32 = 0.035;

/// Slightly larger point size from the condense phase through hold-3.
const ACCENT_POINT_SIZE: f32 = 0.04;

/// The explosion only travels 90% of the way to the dispersed shell.
const EXPLODE_REACH: f32 = 0.9;

/// Condense sources from the shell pulled in to 80% of its radius.
const CONDENSE_PULL: f32 = 0.8;

/// Peak amplitude of the convergence jitter, fading with eased progress.
const CONDENSE_JITTER: f32 = 0.15;

/// Explode recolors only past this in-phase progress. The late snap is a
/// deliberate stylistic beat, not a blend to smooth out.
const EXPLODE_COLOR_THRESHOLD: f32 = 0.8;

/// Per-frame outputs of the animator, recomputed in full on every update.
#[derive(Debug)]
pub struct ParticleCloud {
    shapes: ShapeSet,
    positions: Vec<Vec3>,
    rotation_y: f32,
    color: Rgb,
    point_size: f32,
}

impl ParticleCloud {
    /// Build an animator around a generated shape set.
    pub fn new(shapes: ShapeSet) -> Self {
        let count = shapes.len();
        Self {
            shapes,
            positions: vec![Vec3::ZERO; count],
            rotation_y: 0.0,
            color: INK,
            point_size: BASE_POINT_SIZE,
        }
    }

    /// Number of point samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when built from an empty shape set.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Per-sample positions computed by the last update.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Cloud rotation about the vertical axis, in radians.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Shared color of every point.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Shared point size, in scene units.
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Recompute every output from the elapsed animation-clock time.
    pub fn update(&mut self, elapsed: f32) {
        let t = elapsed.rem_euclid(CYCLE_SECONDS);
        let (phase, p) = Phase::at(t);

        // Shared attributes default to the settled look; phases override.
        self.rotation_y = -FRAC_PI_2;
        self.color = INK;
        self.point_size = BASE_POINT_SIZE;

        match phase {
            Phase::SwirlIn => {
                let e = cubic_out(p);
                // Unwinding spiral: four turns and a 4x radius at the
                // start, identity at the end.
                let angle = (1.0 - e) * 4.0 * PI;
                let radius = (1.0 - e) * 3.0 + 1.0;
                let (sin, cos) = angle.sin_cos();
                for i in 0..self.positions.len() {
                    let base = self.shapes.chaos[i].lerp(self.shapes.one[i], e);
                    let x = base.x * cos - base.z * sin;
                    let z = base.x * sin + base.z * cos;
                    self.positions[i] = Vec3::new(x * radius, base.y, z * radius);
                }
                self.rotation_y = 0.0;
            }
            Phase::HoldOne => {
                self.positions.copy_from_slice(&self.shapes.one);
                self.rotation_y = 0.0;
            }
            Phase::MorphRotate => {
                let e = quad_in_out(p);
                self.rotation_y = lerp(0.0, -FRAC_PI_2, e);
                for i in 0..self.positions.len() {
                    self.positions[i] = self.shapes.one[i].lerp(self.shapes.two[i], e);
                }
            }
            Phase::HoldTwo => {
                self.positions.copy_from_slice(&self.shapes.two);
            }
            Phase::Explode => {
                let e = quad_out(p) * EXPLODE_REACH;
                for i in 0..self.positions.len() {
                    self.positions[i] = self.shapes.two[i].lerp(self.shapes.chaos[i], e);
                }
                if p > EXPLODE_COLOR_THRESHOLD {
                    self.color = INK.lerp(ACCENT, (p - EXPLODE_COLOR_THRESHOLD) * 5.0);
                }
            }
            Phase::Condense => {
                let e = cubic_out(p);
                let vib = (1.0 - e) * CONDENSE_JITTER;
                let t_bits = t.to_bits();
                for i in 0..self.positions.len() {
                    let from = self.shapes.chaos[i].scaled(CONDENSE_PULL);
                    let base = from.lerp(self.shapes.three[i], e);
                    self.positions[i] = Vec3::new(
                        base.x + jitter_unit(i, t_bits, 0) * vib,
                        base.y + jitter_unit(i, t_bits, 1) * vib,
                        base.z + jitter_unit(i, t_bits, 2) * vib,
                    );
                }
                self.color = ACCENT;
                self.point_size = ACCENT_POINT_SIZE;
            }
            Phase::HoldThree => {
                self.positions.copy_from_slice(&self.shapes.three);
                self.color = ACCENT;
                self.point_size = ACCENT_POINT_SIZE;
            }
            Phase::Dissipate => {
                for i in 0..self.positions.len() {
                    self.positions[i] = self.shapes.three[i].lerp(self.shapes.chaos[i], p);
                }
                self.color = ACCENT.lerp(INK, p);
            }
        }
    }
}

/// Deterministic per-sample jitter in [-0.5, 0.5).
///
/// Keyed on the sample index, the wrapped clock bits and the axis, so two
/// updates at the same point in the cycle produce identical noise and the
/// periodicity of the animation is exact.
fn jitter_unit(i: usize, t_bits: u32, axis: u32) -> f32 {
    let mut h = (i as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(t_bits as u64)
        .wrapping_add((axis as u64).wrapping_mul(0xC2B2_AE35));
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    (h >> 40) as f32 / (1u64 << 24) as f32 - 0.5
}
