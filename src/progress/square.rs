//! Square and rounded-rectangle segmented tracks.
//!
//! The perimeter is walked clockwise from the middle of the top edge and
//! split into nine pieces: half the top edge, the top-right corner, the
//! right edge, the bottom-right corner, the bottom edge, the bottom-left
//! corner, the left edge, the top-left corner and the other half of the top
//! edge. `Measures` records where each piece ends as a cumulative fraction
//! of the perimeter, so a progress value maps to a point by a lookup and a
//! linear interpolation inside one piece.

use std::f32::consts::PI;

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{Point, Rect};

use super::segment::{segment_fills, track_spans, Paint, PieceKind, ProgressIndicatorSegment};

/// A drawing instruction for a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Clockwise arc; angles in degrees from 3 o'clock
    ArcTo {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Piece {
    Line { from: Point, to: Point },
    /// Quarter circle starting at `start_angle`
    Corner { center: Point, start_angle: f32 },
}

/// Perimeter breakpoints of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measures {
    /// Top-left of the stroke centerline rectangle
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    /// Corner radius of the stroke centerline
    pub corner_radius: f32,
    pub perimeter: f32,

    pub top_right_percent: f32,
    pub right_top_corner_percent: f32,
    pub right_percent: f32,
    pub right_bottom_corner_percent: f32,
    pub bottom_percent: f32,
    pub left_bottom_corner_percent: f32,
    pub left_percent: f32,
    pub left_top_corner_percent: f32,
    pub top_left_percent: f32,
}

impl Measures {
    /// Measure the stroke centerline of a `width` x `height` box.
    ///
    /// The centerline is inset by half the stroke so the stroke stays
    /// inside the box; the radius is clamped to half the shorter side.
    pub fn new(width: f32, height: f32, corner_radius: f32, stroke_width: f32) -> GeometryResult<Self> {
        let inset = stroke_width.max(0.0) / 2.0;
        let w = width - 2.0 * inset;
        let h = height - 2.0 * inset;
        if !(w >= 0.0 && h >= 0.0) || w + h <= 0.0 {
            return Err(GeometryError::DegenerateTrack { width, height });
        }

        let r = if corner_radius.is_nan() {
            0.0
        } else {
            (corner_radius - inset).clamp(0.0, w.min(h) / 2.0)
        };

        let top_half = w / 2.0 - r;
        let corner = r * PI / 2.0;
        let vertical = h - 2.0 * r;
        let horizontal = w - 2.0 * r;
        let perimeter = 2.0 * (horizontal + vertical) + 4.0 * corner;

        let mut cumulative = 0.0;
        let mut next = |length: f32| {
            cumulative += length;
            cumulative / perimeter
        };

        Ok(Self {
            origin: Point::new(inset, inset),
            width: w,
            height: h,
            corner_radius: r,
            perimeter,
            top_right_percent: next(top_half),
            right_top_corner_percent: next(corner),
            right_percent: next(vertical),
            right_bottom_corner_percent: next(corner),
            bottom_percent: next(horizontal),
            left_bottom_corner_percent: next(corner),
            left_percent: next(vertical),
            left_top_corner_percent: next(corner),
            top_left_percent: next(top_half),
        })
    }

    /// Measure a track drawn inside `bounds`
    pub fn in_bounds(bounds: Rect, corner_radius: f32, stroke_width: f32) -> GeometryResult<Self> {
        let mut measures = Self::new(bounds.width, bounds.height, corner_radius, stroke_width)?;
        measures.origin = Point::new(bounds.x + measures.origin.x, bounds.y + measures.origin.y);
        Ok(measures)
    }

    /// Convert a length along the perimeter to a fraction of it
    pub fn fraction_of(&self, length: f32) -> f32 {
        length / self.perimeter
    }

    fn pieces(&self) -> [(f32, f32, Piece); 9] {
        let Point { x: x0, y: y0 } = self.origin;
        let (w, h, r) = (self.width, self.height, self.corner_radius);
        let (x1, y1) = (x0 + w, y0 + h);
        let mid = x0 + w / 2.0;

        let line = |fx, fy, tx, ty| Piece::Line {
            from: Point::new(fx, fy),
            to: Point::new(tx, ty),
        };
        let corner = |cx, cy, start_angle| Piece::Corner {
            center: Point::new(cx, cy),
            start_angle,
        };

        [
            (0.0, self.top_right_percent, line(mid, y0, x1 - r, y0)),
            (self.top_right_percent, self.right_top_corner_percent, corner(x1 - r, y0 + r, -90.0)),
            (self.right_top_corner_percent, self.right_percent, line(x1, y0 + r, x1, y1 - r)),
            (self.right_percent, self.right_bottom_corner_percent, corner(x1 - r, y1 - r, 0.0)),
            (self.right_bottom_corner_percent, self.bottom_percent, line(x1 - r, y1, x0 + r, y1)),
            (self.bottom_percent, self.left_bottom_corner_percent, corner(x0 + r, y1 - r, 90.0)),
            (self.left_bottom_corner_percent, self.left_percent, line(x0, y1 - r, x0, y0 + r)),
            (self.left_percent, self.left_top_corner_percent, corner(x0 + r, y0 + r, 180.0)),
            (self.left_top_corner_percent, 1.0, line(x0 + r, y0, mid, y0)),
        ]
    }

    fn point_on(&self, piece: Piece, t: f32) -> Point {
        match piece {
            Piece::Line { from, to } => from.lerp(to, t),
            Piece::Corner { center, start_angle } => {
                Point::on_circle(center, self.corner_radius, start_angle + 90.0 * t)
            }
        }
    }

    /// Point at `fraction` of the way round the perimeter
    pub fn point_at(&self, fraction: f32) -> Point {
        let fraction = fraction.clamp(0.0, 1.0);
        let pieces = self.pieces();
        let (start, end, piece) = pieces
            .iter()
            .copied()
            .find(|&(start, end, _)| fraction >= start && fraction <= end && end > start)
            .unwrap_or(pieces[8]);

        let t = if end > start {
            (fraction - start) / (end - start)
        } else {
            0.0
        };
        self.point_on(piece, t.clamp(0.0, 1.0))
    }

    /// Path covering the perimeter from `from` to `to` (fractions, `from <= to`)
    pub fn path(&self, from: f32, to: f32) -> Vec<PathCommand> {
        let from = from.clamp(0.0, 1.0);
        let to = to.clamp(from, 1.0);
        let mut commands = vec![PathCommand::MoveTo(self.point_at(from))];

        for (start, end, piece) in self.pieces() {
            let lo = start.max(from);
            let hi = end.min(to);
            if hi <= lo {
                continue;
            }
            let a = (lo - start) / (end - start);
            let b = (hi - start) / (end - start);

            commands.push(match piece {
                Piece::Line { .. } => PathCommand::LineTo(self.point_on(piece, b)),
                Piece::Corner { center, start_angle } => PathCommand::ArcTo {
                    center,
                    radius: self.corner_radius,
                    start_angle: start_angle + 90.0 * a,
                    sweep: 90.0 * (b - a),
                },
            });
        }

        commands
    }
}

/// Sample a path as a polyline, splitting each arc into `arc_steps` lines
pub fn flatten(commands: &[PathCommand], arc_steps: usize) -> Vec<Point> {
    let arc_steps = arc_steps.max(1);
    let mut points = Vec::new();

    for command in commands {
        match *command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => points.push(point),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                points.extend((1..=arc_steps).map(|i| {
                    let angle = start_angle + sweep * i as f32 / arc_steps as f32;
                    Point::on_circle(center, radius, angle)
                }));
            }
        }
    }

    points
}

/// A piece of a rounded-rectangle track to stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPiece {
    pub segment: usize,
    pub kind: PieceKind,
    pub commands: Vec<PathCommand>,
    pub paint: Paint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectTrack {
    pub corner_radius: f32,
    pub stroke_width: f32,
    /// Perimeter length left empty between adjacent segments, in pixels
    pub gap: f32,
}

impl Default for RoundedRectTrack {
    fn default() -> Self {
        Self {
            corner_radius: 12.0,
            stroke_width: 4.0,
            gap: 4.0,
        }
    }
}

impl RoundedRectTrack {
    /// Indicator and track paths for every segment at `progress`.
    ///
    /// Segments share the perimeter by weight, measured as distance along
    /// the perimeter rather than angle.
    pub fn paths(
        &self,
        bounds: Rect,
        segments: &[ProgressIndicatorSegment],
        progress: f32,
    ) -> GeometryResult<Vec<PathPiece>> {
        let measures = Measures::in_bounds(bounds, self.corner_radius, self.stroke_width)?;
        let fills = segment_fills(segments, progress)?;
        let gap = measures.fraction_of(self.gap);

        let pieces = track_spans(&fills, gap)
            .into_iter()
            .map(|span| {
                let segment = &segments[span.segment];
                PathPiece {
                    segment: span.segment,
                    kind: span.kind,
                    commands: measures.path(span.start, span.end),
                    paint: match span.kind {
                        PieceKind::Indicator => segment.indicator_paint(),
                        PieceKind::Track => segment.track_paint(),
                    },
                }
            })
            .collect();

        Ok(pieces)
    }
}
