//! The animation timeline.
//!
//! The cycle is a fixed 12 seconds split into eight contiguous phases.
//! Which phase is active is a pure function of elapsed time, so the
//! animation is fully deterministic and replayable from any clock value.

/// Length of one full animation cycle in seconds.
pub const CYCLE_SECONDS: f32 = 12.0;

/// A named segment of the animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Dispersed points spiral in and settle into glyph "1".
    SwirlIn,
    /// Glyph "1" held still.
    HoldOne,
    /// Morph to glyph "2" while the cloud turns a quarter turn.
    MorphRotate,
    /// Glyph "2" held still.
    HoldTwo,
    /// Points blast outward toward the dispersed shell.
    Explode,
    /// Points converge onto glyph "3" with fading jitter.
    Condense,
    /// Glyph "3" held still.
    HoldThree,
    /// Points drift back out to the dispersed shell.
    Dissipate,
}

impl Phase {
    /// The eight phases with their start and end times. Intervals are
    /// half-open and together cover [0, CYCLE_SECONDS) exactly.
    pub const TIMELINE: [(Phase, f32, f32); 8] = [
        (Phase::SwirlIn, 0.0, 2.0),
        (Phase::HoldOne, 2.0, 3.0),
        (Phase::MorphRotate, 3.0, 5.0),
        (Phase::HoldTwo, 5.0, 6.0),
        (Phase::Explode, 6.0, 7.0),
        (Phase::Condense, 7.0, 9.0),
        (Phase::HoldThree, 9.0, 11.0),
        (Phase::Dissipate, 11.0, 12.0),
    ];

    /// Map an elapsed time to its phase and normalized in-phase progress.
    ///
    /// The elapsed time is wrapped modulo the cycle first, so any
    /// non-negative input (and, via `rem_euclid`, any finite input) is
    /// valid.
    pub fn at(elapsed: f32) -> (Phase, f32) {
        let t = elapsed.rem_euclid(CYCLE_SECONDS);
        for (phase, start, end) in Phase::TIMELINE {
            if t < end {
                return (phase, (t - start) / (end - start));
            }
        }
        // t is always below CYCLE_SECONDS after the wrap.
        (Phase::Dissipate, 1.0)
    }

    /// Start and end time of this phase within the cycle.
    pub fn span(self) -> (f32, f32) {
        for (phase, start, end) in Phase::TIMELINE {
            if phase == self {
                return (start, end);
            }
        }
        unreachable!("every phase appears in the timeline")
    }
}
