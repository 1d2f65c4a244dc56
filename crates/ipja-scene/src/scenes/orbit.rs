//! Orbiting hub-and-satellite diagram.
//!
//! A wireframe core ring sits at the center; eight hub nodes circle it on
//! a wide ring, each trailing a smaller satellite, with faint spokes back
//! to the center. The whole group is tilted and turns slowly with the
//! clock.

use ipja_core::Rgb;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use std::f32::consts::{FRAC_PI_4, TAU};

/// Number of hub nodes on the outer ring.
const HUB_COUNT: usize = 8;

/// Radius of the hub ring, in scene units.
const HUB_RADIUS: f32 = 3.5;

/// Radius of the central wireframe ring.
const CORE_RADIUS: f32 = 1.2;

/// Hub node color.
const HUB_COLOR: Rgb = Rgb::new(0x42, 0x85, 0xF4);

/// Satellite node color.
const SATELLITE_COLOR: Rgb = Rgb::new(0xDB, 0x44, 0x37);

/// Core and spoke color.
const FRAME_COLOR: Rgb = Rgb::new(0x25, 0x25, 0x25);

/// Group turn rate in radians per second.
const TURN_RATE: f32 = 0.1;

struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<(char, Rgb)>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Plot a scene-space point. Terminal cells are about twice as tall
    /// as wide, so x is stretched to keep circles round.
    fn plot(&mut self, x: f32, y: f32, scale: f32, ch: char, color: Rgb) {
        let col = self.width as f32 / 2.0 + x * scale * 2.0;
        let row = self.height as f32 / 2.0 - y * scale;
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = Some((ch, color));
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|col| match self.cells[row * self.width + col] {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(color.to_color()))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Draw the orbit diagram for the given elapsed time.
pub fn render(frame: &mut Frame, area: Rect, elapsed: f32) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut canvas = Canvas::new(area.width as usize, area.height as usize);
    // Fit the outer ring plus satellites inside the frame height.
    let scale = area.height as f32 / 2.0 / (HUB_RADIUS + 1.2);
    let tilt = FRAC_PI_4 + elapsed * TURN_RATE;

    // Central wireframe ring.
    for step in 0..24 {
        let a = step as f32 / 24.0 * TAU + tilt;
        canvas.plot(CORE_RADIUS * a.cos(), CORE_RADIUS * a.sin(), scale, '◇', FRAME_COLOR);
    }

    for i in 0..HUB_COUNT {
        let angle = i as f32 / HUB_COUNT as f32 * TAU + tilt;
        let hx = angle.cos() * HUB_RADIUS;
        let hy = angle.sin() * HUB_RADIUS;

        // Faint spoke back to the center, sampled outside the core ring.
        for step in 1..20 {
            let t = step as f32 / 20.0;
            let (sx, sy) = (hx * t, hy * t);
            if (sx * sx + sy * sy).sqrt() > CORE_RADIUS + 0.2 {
                canvas.plot(sx, sy, scale, '·', FRAME_COLOR.scaled(2.2));
            }
        }

        canvas.plot(hx, hy, scale, '●', HUB_COLOR);

        // Satellite riding a fixed offset from its hub.
        canvas.plot(hx + 0.5, hy + 0.5, scale, '•', SATELLITE_COLOR);
    }

    let lines = canvas.into_lines();
    frame.render_widget(Paragraph::new(lines), area);
}
