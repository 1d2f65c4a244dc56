//! Full-screen fluid color-wave background.
//!
//! Per-cell re-expression of the source site's fluid fragment shader:
//! three palette colors mixed through layered sine waves and a hash-noise
//! turbulence term, drifting slowly with the clock.

use ipja_core::Rgb;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Warm blush.
const COLOR_1: Rgb = Rgb::new(0xDE, 0xBB, 0xB4);

/// Soft sand.
const COLOR_2: Rgb = Rgb::new(0xDE, 0xD0, 0xB4);

/// Subtle highlight.
const COLOR_3: Rgb = Rgb::new(0xF6, 0xEE, 0xE7);

/// Density ramp for the wave field.
const FLUID_CHARS: &[char] = &['░', '▒', '▓', '█'];

/// Shader-style hash noise in [0, 1).
fn noise(x: f32, y: f32) -> f32 {
    let d = (x * 12.9898 + y * 78.233).sin() * 43758.547;
    d.fract().abs()
}

/// Hermite step matching GLSL smoothstep.
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Compute the color and intensity of one cell of the field.
fn sample(x_norm: f32, y_norm: f32, elapsed: f32) -> (Rgb, f32) {
    // Flow speed from the source shader.
    let t = elapsed * 0.35;

    // Gentle drift keeps the whole field moving.
    let u = x_norm + (t * 0.15).sin() * 0.05;
    let v = y_norm + (t * 0.12).cos() * 0.05;

    // Layered waves for organic movement.
    let wave1 = (u * 2.8 + t * 0.9).sin() * (v * 2.2 - t * 0.6).cos();
    let wave2 = (u * 5.2 - t * 0.7).sin() * (v * 4.6 + t * 0.8).cos();
    let du = u - 0.5;
    let dv = v - 0.5;
    let wave3 = ((du * du + dv * dv).sqrt() * 7.5 - t * 1.1).sin();

    // Soft turbulence.
    let turb = noise(u * 3.0 + t * 0.2, v * 3.0 + t * 0.2) * 0.6
        + noise(u * 6.0 - t * 0.15, v * 6.0 - t * 0.15) * 0.4;

    let mix1 = smoothstep(-1.0, 1.0, wave1);
    let mix2 = smoothstep(-1.0, 1.0, wave2);
    let mix3 = smoothstep(-1.0, 1.0, wave3);

    let base = COLOR_1.lerp(COLOR_2, (mix1 * 0.7 + turb * 0.3).clamp(0.0, 1.0));
    let color = base.lerp(COLOR_3, (mix2 * 0.45 + mix3 * 0.25).clamp(0.0, 1.0));

    // Shimmer lifts the brightest cells slightly.
    let intensity = (mix1 * 0.4 + mix2 * 0.3 + mix3 * 0.2 + turb * 0.1).clamp(0.0, 1.0);
    (color.scaled(0.96 + (mix3 + turb) * 0.04), intensity)
}

/// Draw the fluid field across `area`.
pub fn render(frame: &mut Frame, area: Rect, elapsed: f32) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let x_norm = col as f32 / area.width.max(1) as f32;
                    let y_norm = row as f32 / area.height.max(1) as f32;
                    let (color, intensity) = sample(x_norm, y_norm, elapsed);
                    let idx = ((intensity * FLUID_CHARS.len() as f32) as usize)
                        .min(FLUID_CHARS.len() - 1);
                    Span::styled(
                        FLUID_CHARS[idx].to_string(),
                        Style::new().fg(color.to_color()),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_deterministic_and_bounded() {
        for i in 0..100 {
            let x = i as f32 * 0.37;
            let n = noise(x, x * 1.7);
            assert!((0.0..1.0).contains(&n));
            assert_eq!(n, noise(x, x * 1.7));
        }
    }

    #[test]
    fn smoothstep_matches_glsl_edges() {
        assert_eq!(smoothstep(-1.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(-1.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(-1.0, 1.0, 0.0), 0.5);
    }

    #[test]
    fn samples_stay_in_palette_range() {
        for step in 0..200 {
            let t = step as f32 * 0.1;
            let (color, intensity) = sample(0.3, 0.7, t);
            assert!((0.0..=1.0).contains(&intensity));
            // The palette is warm and bright; nothing should go dark.
            assert!(color.r > 0x80);
        }
    }
}
