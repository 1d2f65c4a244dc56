//! Scene state management and dispatch.

use ipja_core::SceneKind;
use ipja_shapes::ShapeSet;
use ratatui::{Frame, layout::Rect};

use crate::cloud::ParticleCloud;
use crate::scenes::{convergence, fluid, orbit};

/// Owns the animators and routes each frame to the active scene.
#[derive(Debug)]
pub struct SceneState {
    /// The morphing point cloud, kept alive across scene switches so
    /// returning to it does not regenerate the shapes.
    cloud: ParticleCloud,
}

impl SceneState {
    /// Build the scene state with a freshly generated shape set.
    pub fn new(particle_count: usize, seed: u64) -> Self {
        Self {
            cloud: ParticleCloud::new(ShapeSet::generate(particle_count, seed)),
        }
    }

    /// Advance the active scene to `elapsed` and draw it into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, scene: SceneKind, elapsed: f32) {
        match scene {
            SceneKind::Convergence => {
                self.cloud.update(elapsed);
                convergence::render(frame, area, &self.cloud);
            }
            SceneKind::Orbit => orbit::render(frame, area, elapsed),
            SceneKind::Fluid => fluid::render(frame, area, elapsed),
        }
    }
}
