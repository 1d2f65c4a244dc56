//! Terminal renderer for the morphing point cloud.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::cloud::ParticleCloud;
use crate::project::Projector;

/// Density ramp from a lone sample to a saturated cell.
const CLOUD_CHARS: &[char] = &['·', '•', '●', '█'];

/// Hits per cell at which the ramp saturates.
const SATURATION: f32 = 8.0;

/// Draw the cloud's current frame into `area`.
///
/// The animator has already written the position buffer; this only reads
/// it, bins the projected points into a per-cell density grid and maps
/// density to a character ramp shaded with the cloud's shared color.
pub fn render(frame: &mut Frame, area: Rect, cloud: &ParticleCloud) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let projector = Projector::new(area);
    let mut density = vec![0u32; area.width as usize * area.height as usize];
    for &point in cloud.positions() {
        if let Some((col, row)) = projector.project(point, cloud.rotation_y()) {
            density[row as usize * area.width as usize + col as usize] += 1;
        }
    }

    // Larger shared point size reads as a denser cell.
    let size_boost = cloud.point_size() / 0.035;
    let color = cloud.color();

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let hits = density[row as usize * area.width as usize + col as usize];
                    if hits == 0 {
                        return Span::raw(" ");
                    }
                    let level = (hits as f32 * size_boost / SATURATION).min(1.0);
                    let idx = ((level * CLOUD_CHARS.len() as f32) as usize)
                        .min(CLOUD_CHARS.len() - 1);
                    let shade = color.scaled(0.55 + 0.45 * level);
                    Span::styled(
                        CLOUD_CHARS[idx].to_string(),
                        Style::new().fg(shade.to_color()),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
