//! RGB color values used by the animation scenes.

use ratatui::style::Color;

/// Dark neutral tone the point cloud starts and ends in.
pub const INK: Rgb = Rgb::new(0x25, 0x25, 0x25);

/// Accent tone the cloud takes on after the explosion.
pub const ACCENT: Rgb = Rgb::new(0x29, 0x62, 0xFF);

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate toward `other`. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Dim or brighten all channels by `factor`, saturating at 255.
    pub fn scaled(self, factor: f32) -> Rgb {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Rgb {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Convert to a ratatui terminal color.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(INK.lerp(ACCENT, 0.0), INK);
        assert_eq!(INK.lerp(ACCENT, 1.0), ACCENT);
    }

    #[test]
    fn lerp_clamps() {
        assert_eq!(INK.lerp(ACCENT, -1.0), INK);
        assert_eq!(INK.lerp(ACCENT, 2.5), ACCENT);
    }

    #[test]
    fn scaling_saturates() {
        let c = Rgb::new(200, 10, 0);
        let s = c.scaled(2.0);
        assert_eq!(s, Rgb::new(255, 20, 0));
    }
}
