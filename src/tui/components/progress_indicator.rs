//! Segmented progress indicator drawn on a braille canvas.
//!
//! Track geometry is computed in canvas units with y pointing down and
//! flipped when drawn. A terminal cell is roughly twice as tall as it is
//! wide, so the canvas gets two vertical units per row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use dialkit::config::ProgressShape;
use dialkit::geometry::{Point, Rect as TrackBounds};
use dialkit::progress::{Paint, flatten};
use dialkit::theme::{ACCENT_CORAL, BACKGROUND, TEXT_DIM, TEXT_WHITE};
use dialkit::error::GeometryResult;

use crate::app::App;

/// Polyline points per full circle
const CIRCLE_STEPS: f32 = 120.0;

/// Points per rounded corner
const CORNER_STEPS: usize = 6;

type Stroke = (f64, f64, f64, f64, Color);

/// Render the progress indicator for the current shape and progress.
pub fn render_progress_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Progress {:>3.0}% ", app.progress * 100.0);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM.into()))
        .title(Line::styled(title, Style::new().fg(TEXT_WHITE.into())));

    let inner = block.inner(area);
    let width = f32::from(inner.width);
    let height = f32::from(inner.height) * 2.0;
    let bounds = TrackBounds::new(0.0, 0.0, width, height);

    let strokes = match track_strokes(app, bounds) {
        Ok(strokes) => strokes,
        Err(e) => {
            let message = Paragraph::new(Line::styled(
                e.to_string(),
                Style::new().fg(ACCENT_CORAL.into()),
            ))
            .block(block);
            frame.render_widget(message, area);
            return;
        }
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(BACKGROUND.into())
        .x_bounds([0.0, f64::from(width)])
        .y_bounds([0.0, f64::from(height)])
        .paint(move |ctx| {
            for &(x1, y1, x2, y2, color) in &strokes {
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
            }
        });
    frame.render_widget(canvas, area);
}

fn track_strokes(app: &App, bounds: TrackBounds) -> GeometryResult<Vec<Stroke>> {
    let mut strokes = vec![];

    match app.shape {
        ProgressShape::Circular => {
            let track = app.config.progress.circular_track();
            let center = bounds.center();
            let radius = track.radius_in(bounds);
            for arc in track.arcs(&app.segments, app.progress)? {
                let steps = (arc.sweep.abs() / 360.0 * CIRCLE_STEPS).ceil() as usize;
                let points = arc.points(center, radius, steps);
                push_polyline(&mut strokes, &points, &arc.paint, bounds.height);
            }
        }
        ProgressShape::Square => {
            let track = app.config.progress.rounded_rect_track();
            for piece in track.paths(bounds, &app.segments, app.progress)? {
                let points = flatten(&piece.commands, CORNER_STEPS);
                push_polyline(&mut strokes, &points, &piece.paint, bounds.height);
            }
        }
    }

    Ok(strokes)
}

/// Turn a polyline into canvas strokes, flipping y and sampling the paint
/// along its length.
fn push_polyline(strokes: &mut Vec<Stroke>, points: &[Point], paint: &Paint, height: f32) {
    let segments = points.len().saturating_sub(1);
    for (i, pair) in points.windows(2).enumerate() {
        let t = (i as f32 + 0.5) / segments as f32;
        let color: Color = paint.color_at(t).over(BACKGROUND).into();
        strokes.push((
            f64::from(pair[0].x),
            f64::from(height - pair[0].y),
            f64::from(pair[1].x),
            f64::from(height - pair[1].y),
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit::config::Config;

    #[test]
    fn test_strokes_for_both_shapes() {
        let mut app = App::new(Config::default(), 9).unwrap();
        let bounds = TrackBounds::new(0.0, 0.0, 40.0, 40.0);

        let circular = track_strokes(&app, bounds).unwrap();
        assert!(!circular.is_empty());

        app.shape = ProgressShape::Square;
        let square = track_strokes(&app, bounds).unwrap();
        assert!(!square.is_empty());
    }

    #[test]
    fn test_geometry_errors_surface() {
        let mut app = App::new(Config::default(), 9).unwrap();
        app.segments.clear();
        assert!(track_strokes(&app, TrackBounds::new(0.0, 0.0, 40.0, 40.0)).is_err());
    }
}
