//! Perspective projection of scene points onto terminal cells.

use ipja_core::Vec3;
use ratatui::layout::Rect;

/// Distance from the camera to the scene origin, matching the source
/// scene's framing.
const CAMERA_DISTANCE: f32 = 4.5;

/// Focal scale; chosen so a glyph (roughly +/-1.2 units tall) fills most
/// of the frame height at the camera distance.
const FOCAL: f32 = 3.0;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Maps world-space points into the cells of a terminal area.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    area: Rect,
}

impl Projector {
    /// Build a projector for the given frame area.
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Project a point, returning the target cell, or `None` when the
    /// point lands outside the area or behind the camera.
    pub fn project(&self, point: Vec3, rotation_y: f32) -> Option<(u16, u16)> {
        let p = point.rotated_y(rotation_y);
        // Camera on +z looking toward the origin.
        let depth = CAMERA_DISTANCE - p.z;
        if depth <= 0.1 {
            return None;
        }

        let half_w = self.area.width as f32 / 2.0;
        let half_h = self.area.height as f32 / 2.0;
        let scale = FOCAL * half_h / depth;

        let col = half_w + p.x * scale * CELL_ASPECT;
        let row = half_h - p.y * scale;
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as u16, row as u16);
        if col >= self.area.width || row >= self.area.height {
            return None;
        }
        Some((col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn origin_lands_in_the_center() {
        let proj = Projector::new(area());
        let (col, row) = proj.project(Vec3::ZERO, 0.0).unwrap();
        assert_eq!((col, row), (40, 12));
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let proj = Projector::new(area());
        assert!(proj.project(Vec3::new(0.0, 0.0, 5.0), 0.0).is_none());
    }

    #[test]
    fn far_off_axis_points_are_culled() {
        let proj = Projector::new(area());
        assert!(proj.project(Vec3::new(50.0, 0.0, 0.0), 0.0).is_none());
    }

    #[test]
    fn higher_points_land_on_lower_rows() {
        let proj = Projector::new(area());
        let (_, top) = proj.project(Vec3::new(0.0, 1.0, 0.0), 0.0).unwrap();
        let (_, bottom) = proj.project(Vec3::new(0.0, -1.0, 0.0), 0.0).unwrap();
        assert!(top < 12);
        assert!(bottom > 12);
    }

    #[test]
    fn rotation_moves_points_off_axis() {
        let proj = Projector::new(area());
        let p = Vec3::new(0.0, 0.0, -1.0);
        let (col_straight, _) = proj.project(p, 0.0).unwrap();
        let (col_turned, _) = proj
            .project(p, std::f32::consts::FRAC_PI_2)
            .unwrap();
        assert_eq!(col_straight, 40);
        assert_ne!(col_turned, 40);
    }
}
