//! Animation scenes for the ipja terminal app.
//!
//! This crate holds the deterministic animation engines and their
//! terminal renderers: the phase-driven particle cloud that morphs
//! between glyph shapes, an orbiting hub diagram, and a fluid color-wave
//! background. The engines are pure functions of elapsed time; the
//! renderers translate their output into ratatui widgets.

mod cloud;
mod phase;
mod project;
mod scenes;
mod state;

pub use cloud::{PARTICLE_COUNT, ParticleCloud};
pub use phase::{CYCLE_SECONDS, Phase};
pub use project::Projector;
pub use state::SceneState;
