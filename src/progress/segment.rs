//! Weighted segments and how much of each one a progress value fills.
//!
//! Everything here works in normalized track units: the whole track runs
//! from 0 to 1 whatever its shape, and each segment owns `weight / total`
//! of it. The shape modules map these units onto angles or perimeter length.

use crate::error::{GeometryError, GeometryResult};
use crate::theme::{Rgba, TRACK_ALPHA};

/// A gradient along the drawn piece, from its start to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub colors: Vec<Rgba>,
}

impl Brush {
    pub fn new(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    /// Color at `t` in `[0, 1]`, interpolating evenly spaced stops
    pub fn color_at(&self, t: f32) -> Rgba {
        match self.colors.as_slice() {
            [] => Rgba::rgb(0, 0, 0).with_alpha(0.0),
            [only] => *only,
            colors => {
                let scaled = t.clamp(0.0, 1.0) * (colors.len() - 1) as f32;
                let i = (scaled.floor() as usize).min(colors.len() - 2);
                colors[i].lerp(colors[i + 1], scaled - i as f32)
            }
        }
    }
}

/// What a piece is painted with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Color(Rgba),
    Brush(Brush),
}

impl Paint {
    pub fn color_at(&self, t: f32) -> Rgba {
        match self {
            Paint::Color(color) => *color,
            Paint::Brush(brush) => brush.color_at(t),
        }
    }
}

/// One weighted, independently painted part of a progress track.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressIndicatorSegment {
    /// Relative length along the track
    pub weight: f32,
    pub indicator_color: Rgba,
    /// Takes precedence over `indicator_color` when set
    pub indicator_brush: Option<Brush>,
    pub track_color: Rgba,
    /// Takes precedence over `track_color` when set
    pub track_brush: Option<Brush>,
}

impl ProgressIndicatorSegment {
    /// Segment whose track is a faint version of its indicator color
    pub fn new(weight: f32, indicator_color: Rgba) -> Self {
        Self {
            weight,
            indicator_color,
            indicator_brush: None,
            track_color: indicator_color.with_alpha(TRACK_ALPHA),
            track_brush: None,
        }
    }

    pub fn with_track_color(mut self, track_color: Rgba) -> Self {
        self.track_color = track_color;
        self
    }

    pub fn with_indicator_brush(mut self, brush: Brush) -> Self {
        self.indicator_brush = Some(brush);
        self
    }

    pub fn with_track_brush(mut self, brush: Brush) -> Self {
        self.track_brush = Some(brush);
        self
    }

    pub fn indicator_paint(&self) -> Paint {
        match &self.indicator_brush {
            Some(brush) => Paint::Brush(brush.clone()),
            None => Paint::Color(self.indicator_color),
        }
    }

    pub fn track_paint(&self) -> Paint {
        match &self.track_brush {
            Some(brush) => Paint::Brush(brush.clone()),
            None => Paint::Color(self.track_color),
        }
    }
}

/// Whether a drawn piece shows progress or the remaining track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Indicator,
    Track,
}

/// A segment's range of the track and how far progress reaches into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFill {
    pub start: f32,
    pub end: f32,
    /// Within `[start, end]`
    pub filled_end: f32,
}

impl SegmentFill {
    /// Filled length, in track units
    pub fn filled(&self) -> f32 {
        self.filled_end - self.start
    }

    /// Filled share of this segment, in `[0, 1]`
    pub fn fill_fraction(&self) -> f32 {
        let length = self.end - self.start;
        if length <= 0.0 {
            0.0
        } else {
            (self.filled() / length).clamp(0.0, 1.0)
        }
    }
}

/// A contiguous run of one segment to paint, in track units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSpan {
    pub segment: usize,
    pub kind: PieceKind,
    pub start: f32,
    pub end: f32,
}

/// Clamp progress into `[0, 1]`; NaN counts as no progress.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Sum of the weights, failing on empty lists and non-positive weights.
pub fn total_weight(segments: &[ProgressIndicatorSegment]) -> GeometryResult<f32> {
    if segments.is_empty() {
        return Err(GeometryError::NoSegments);
    }
    for (index, segment) in segments.iter().enumerate() {
        // NaN fails this check too
        if !(segment.weight > 0.0) || segment.weight.is_infinite() {
            return Err(GeometryError::NonPositiveWeight {
                index,
                weight: segment.weight,
            });
        }
    }
    Ok(segments.iter().map(|s| s.weight).sum())
}

/// Each segment's range of the track and its share of `progress`.
pub fn segment_fills(
    segments: &[ProgressIndicatorSegment],
    progress: f32,
) -> GeometryResult<Vec<SegmentFill>> {
    let total = total_weight(segments)?;
    let progress = clamp_progress(progress);

    let mut cumulative = 0.0;
    let fills = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let start = cumulative / total;
            cumulative += segment.weight;
            let end = if i == segments.len() - 1 {
                1.0
            } else {
                cumulative / total
            };
            SegmentFill {
                start,
                end,
                filled_end: progress.clamp(start, end),
            }
        })
        .collect();

    Ok(fills)
}

/// Turn fills into paintable spans, leaving `gap` track units between
/// adjacent segments. A single segment gets no gap.
pub fn track_spans(fills: &[SegmentFill], gap: f32) -> Vec<TrackSpan> {
    let half_gap = if fills.len() > 1 { gap.max(0.0) / 2.0 } else { 0.0 };
    let mut spans = Vec::with_capacity(fills.len() * 2);

    for (segment, fill) in fills.iter().enumerate() {
        let start = fill.start + half_gap;
        let end = fill.end - half_gap;
        if end <= start {
            continue;
        }

        let split = start + (end - start) * fill.fill_fraction();
        if split > start {
            spans.push(TrackSpan {
                segment,
                kind: PieceKind::Indicator,
                start,
                end: split,
            });
        }
        if end > split {
            spans.push(TrackSpan {
                segment,
                kind: PieceKind::Track,
                start: split,
                end,
            });
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ACCENT_CORAL, ACCENT_GOLD, ACCENT_MINT};

    fn segments(weights: &[f32]) -> Vec<ProgressIndicatorSegment> {
        weights
            .iter()
            .map(|&w| ProgressIndicatorSegment::new(w, ACCENT_MINT))
            .collect()
    }

    #[test]
    fn test_rejects_bad_weights() {
        assert_eq!(total_weight(&[]), Err(GeometryError::NoSegments));
        assert_eq!(
            segment_fills(&segments(&[1.0, 0.0]), 0.5),
            Err(GeometryError::NonPositiveWeight { index: 1, weight: 0.0 })
        );
        assert!(segment_fills(&segments(&[-1.0]), 0.5).is_err());
        assert!(segment_fills(&segments(&[f32::NAN]), 0.5).is_err());
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(clamp_progress(-0.5), 0.0);
        assert_eq!(clamp_progress(1.5), 1.0);
        assert_eq!(clamp_progress(f32::NAN), 0.0);
    }

    #[test]
    fn test_fills_are_weighted() {
        let fills = segment_fills(&segments(&[1.0, 3.0]), 0.5).unwrap();

        assert_eq!(fills[0].start, 0.0);
        assert_eq!(fills[0].end, 0.25);
        assert_eq!(fills[0].fill_fraction(), 1.0);
        assert_eq!(fills[1].filled_end, 0.5);
        assert!((fills[1].fill_fraction() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_fill_is_monotonic_and_sums_to_progress() {
        let segs = segments(&[1.0, 2.0, 0.5, 4.0, 1.5]);
        let mut previous = vec![0.0; segs.len()];

        for step in 0..=100 {
            let progress = step as f32 / 100.0;
            let fills = segment_fills(&segs, progress).unwrap();

            let sum: f32 = fills.iter().map(|f| f.filled()).sum();
            assert!((sum - progress).abs() < 1e-5, "progress {progress}, sum {sum}");

            for (fill, prev) in fills.iter().zip(previous.iter_mut()) {
                assert!(fill.filled() >= *prev);
                *prev = fill.filled();
            }
        }
    }

    #[test]
    fn test_spans_split_straddling_segment() {
        let fills = segment_fills(&segments(&[1.0, 1.0]), 0.75).unwrap();
        let spans = track_spans(&fills, 0.0);

        let kinds: Vec<(usize, PieceKind)> = spans.iter().map(|s| (s.segment, s.kind)).collect();
        assert_eq!(
            kinds,
            vec![(0, PieceKind::Indicator), (1, PieceKind::Indicator), (1, PieceKind::Track)]
        );
        assert_eq!(spans[1].end, 0.75);
    }

    #[test]
    fn test_spans_leave_gaps() {
        let fills = segment_fills(&segments(&[1.0, 1.0]), 0.0).unwrap();
        let spans = track_spans(&fills, 0.1);

        assert_eq!(spans.len(), 2);
        assert!((spans[0].start - 0.05).abs() < 1e-6);
        assert!((spans[0].end - 0.45).abs() < 1e-6);
        assert!((spans[1].start - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_single_segment_has_no_gap() {
        let fills = segment_fills(&segments(&[1.0]), 0.0).unwrap();
        let spans = track_spans(&fills, 0.1);
        assert_eq!((spans[0].start, spans[0].end), (0.0, 1.0));
    }

    #[test]
    fn test_brush_takes_precedence() {
        let brush = Brush::new(vec![ACCENT_CORAL, ACCENT_GOLD]);
        let segment = ProgressIndicatorSegment::new(1.0, ACCENT_MINT).with_indicator_brush(brush.clone());

        assert_eq!(segment.indicator_paint(), Paint::Brush(brush));
        assert_eq!(segment.track_paint(), Paint::Color(ACCENT_MINT.with_alpha(TRACK_ALPHA)));
        assert_eq!(segment.indicator_paint().color_at(0.0), ACCENT_CORAL);
        assert_eq!(segment.indicator_paint().color_at(1.0), ACCENT_GOLD);
    }
}
