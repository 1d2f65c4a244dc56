//! Core types shared across the ipja workspace.
//!
//! Everything here is plain value types and pure math: 3D vectors, RGB
//! colors, easing curves, and the small enums (scene selection, animation
//! speed) that the config crate and the binary both need.

mod color;
mod ease;
mod scene;
mod speed;
mod vec3;

pub use color::{ACCENT, INK, Rgb};
pub use ease::{cubic_out, lerp, quad_in_out, quad_out};
pub use scene::SceneKind;
pub use speed::AnimationSpeed;
pub use vec3::Vec3;
