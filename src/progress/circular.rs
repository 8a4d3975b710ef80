//! Circular segmented tracks.
//!
//! Angles are in degrees, clockwise from 3 o'clock; the default track
//! starts at 12 o'clock and goes all the way round.

use crate::error::GeometryResult;
use crate::geometry::{Point, Rect};

use super::segment::{segment_fills, track_spans, Paint, PieceKind, ProgressIndicatorSegment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularTrack {
    pub start_angle: f32,
    pub end_angle: f32,
    /// Angle left empty between adjacent segments
    pub gap_degrees: f32,
    pub stroke_width: f32,
}

impl Default for CircularTrack {
    fn default() -> Self {
        Self {
            start_angle: -90.0,
            end_angle: 270.0,
            gap_degrees: 2.0,
            stroke_width: 4.0,
        }
    }
}

/// One arc to stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPiece {
    pub segment: usize,
    pub kind: PieceKind,
    pub start_angle: f32,
    pub sweep: f32,
    pub paint: Paint,
}

impl ArcPiece {
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep
    }

    /// Sample the arc as a polyline with `steps + 1` points
    pub fn points(&self, center: Point, radius: f32, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let angle = self.start_angle + self.sweep * i as f32 / steps as f32;
                Point::on_circle(center, radius, angle)
            })
            .collect()
    }
}

impl CircularTrack {
    pub fn total_sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Radius of the stroke centerline that keeps the stroke inside `bounds`
    pub fn radius_in(&self, bounds: Rect) -> f32 {
        (bounds.width.min(bounds.height) / 2.0 - self.stroke_width / 2.0).max(0.0)
    }

    /// Indicator and track arcs for every segment at `progress`.
    pub fn arcs(
        &self,
        segments: &[ProgressIndicatorSegment],
        progress: f32,
    ) -> GeometryResult<Vec<ArcPiece>> {
        let fills = segment_fills(segments, progress)?;
        let total = self.total_sweep();
        let gap = if total.abs() > f32::EPSILON {
            self.gap_degrees / total.abs()
        } else {
            0.0
        };

        let arcs = track_spans(&fills, gap)
            .into_iter()
            .map(|span| {
                let segment = &segments[span.segment];
                ArcPiece {
                    segment: span.segment,
                    kind: span.kind,
                    start_angle: self.start_angle + span.start * total,
                    sweep: (span.end - span.start) * total,
                    paint: match span.kind {
                        PieceKind::Indicator => segment.indicator_paint(),
                        PieceKind::Track => segment.track_paint(),
                    },
                }
            })
            .collect();

        Ok(arcs)
    }
}
