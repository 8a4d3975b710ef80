//! Segmented progress indicators
//!
//! Turns a progress value and a list of weighted segments into arcs (for
//! circular tracks) or paths (for square and rounded-rectangle tracks), and
//! provides the edge fade used by scrolling content.

mod circular;
mod gradient;
mod segment;
mod square;

pub use circular::{ArcPiece, CircularTrack};
pub use gradient::EdgeFade;
pub use segment::{
    clamp_progress, segment_fills, total_weight, track_spans, Brush, Paint, PieceKind,
    ProgressIndicatorSegment, SegmentFill, TrackSpan,
};
pub use square::{flatten, Measures, PathCommand, PathPiece, RoundedRectTrack};
