//! Top and bottom edge fade for scrolling content.
//!
//! The first and last `gradient_ratio` of the height are covered by a
//! linear gradient from the edge color to transparent, mirrored top and
//! bottom, so items fade out as they approach the edges of a round screen.

use crate::error::{GeometryError, GeometryResult};
use crate::theme::Rgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFade {
    gradient_ratio: f32,
}

impl EdgeFade {
    /// Default used by pickers
    pub const DEFAULT_RATIO: f32 = 0.33;

    pub fn new(gradient_ratio: f32) -> GeometryResult<Self> {
        if !(0.0..=0.5).contains(&gradient_ratio) {
            return Err(GeometryError::InvalidGradientRatio(gradient_ratio));
        }
        Ok(Self { gradient_ratio })
    }

    pub fn gradient_ratio(&self) -> f32 {
        self.gradient_ratio
    }

    pub fn is_enabled(&self) -> bool {
        self.gradient_ratio > 0.0
    }

    /// Opacity of the fade overlay at `y_fraction` of the height (0 = top)
    pub fn alpha_at(&self, y_fraction: f32) -> f32 {
        if !self.is_enabled() {
            return 0.0;
        }
        let y = y_fraction.clamp(0.0, 1.0);
        let distance_to_edge = y.min(1.0 - y);
        (1.0 - distance_to_edge / self.gradient_ratio).max(0.0)
    }

    /// Gradient stops `(position, color)` for an overlay in `edge_color`
    pub fn stops(&self, edge_color: Rgba) -> Vec<(f32, Rgba)> {
        if !self.is_enabled() {
            return vec![];
        }
        let clear = edge_color.with_alpha(0.0);
        vec![
            (0.0, edge_color),
            (self.gradient_ratio, clear),
            (1.0 - self.gradient_ratio, clear),
            (1.0, edge_color),
        ]
    }

    /// `content` as seen through the fade at `y_fraction`, over `edge_color`
    pub fn apply(&self, content: Rgba, edge_color: Rgba, y_fraction: f32) -> Rgba {
        edge_color
            .with_alpha(self.alpha_at(y_fraction))
            .over(content.over(edge_color))
    }
}

impl Default for EdgeFade {
    fn default() -> Self {
        Self {
            gradient_ratio: Self::DEFAULT_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{BACKGROUND, TEXT_WHITE};

    #[test]
    fn test_rejects_out_of_range_ratio() {
        assert_eq!(EdgeFade::new(0.6), Err(GeometryError::InvalidGradientRatio(0.6)));
        assert!(EdgeFade::new(-0.1).is_err());
        assert!(EdgeFade::new(f32::NAN).is_err());
        assert!(EdgeFade::new(0.5).is_ok());
    }

    #[test]
    fn test_fade_is_mirrored() {
        let fade = EdgeFade::new(0.25).unwrap();

        assert_eq!(fade.alpha_at(0.0), 1.0);
        assert_eq!(fade.alpha_at(1.0), 1.0);
        assert!((fade.alpha_at(0.125) - 0.5).abs() < 1e-6);
        assert!((fade.alpha_at(0.875) - 0.5).abs() < 1e-6);
        assert_eq!(fade.alpha_at(0.5), 0.0);
    }

    #[test]
    fn test_zero_ratio_disables_fade() {
        let fade = EdgeFade::new(0.0).unwrap();

        assert_eq!(fade.alpha_at(0.0), 0.0);
        assert!(fade.stops(BACKGROUND).is_empty());
        assert_eq!(fade.apply(TEXT_WHITE, BACKGROUND, 0.0), TEXT_WHITE);
    }

    #[test]
    fn test_apply_fades_to_edge_color() {
        let fade = EdgeFade::new(0.5).unwrap();

        assert_eq!(fade.apply(TEXT_WHITE, BACKGROUND, 0.0), BACKGROUND);
        assert_eq!(fade.apply(TEXT_WHITE, BACKGROUND, 0.5), TEXT_WHITE);
        assert_eq!(fade.apply(TEXT_WHITE, BACKGROUND, 0.25), Rgba::rgb(128, 128, 128));
    }
}
