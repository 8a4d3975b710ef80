use ratatui::style::Color;

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite `self` over an opaque `background`
    pub fn over(self, background: Rgba) -> Rgba {
        let mix = |fg: u8, bg: u8| {
            (f32::from(fg) * self.a + f32::from(bg) * (1.0 - self.a)).round() as u8
        };
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// Interpolate between two colors, alpha included
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}

// Accent colors
pub const ACCENT_CORAL: Rgba = Rgba::rgb(232, 131, 136);      // #E88388
pub const ACCENT_GOLD: Rgba = Rgba::rgb(219, 171, 121);       // #DBAB79
pub const ACCENT_LIGHT_BLUE: Rgba = Rgba::rgb(124, 175, 194); // #7CAFC2
pub const ACCENT_MINT: Rgba = Rgba::rgb(161, 193, 129);       // #A1C181

// Surface colors
pub const BACKGROUND: Rgba = Rgba::rgb(0, 0, 0);              // watch faces are black
pub const TEXT_DIM: Rgba = Rgba::rgb(136, 136, 136);          // #888888
pub const TEXT_WHITE: Rgba = Rgba::rgb(255, 255, 255);        // #FFFFFF

/// Default alpha of a segment's unfilled track
pub const TRACK_ALPHA: f32 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_black() {
        let half = TEXT_WHITE.with_alpha(0.5).over(BACKGROUND);
        assert_eq!(half, Rgba::rgb(128, 128, 128));
        assert_eq!(TEXT_WHITE.over(BACKGROUND), TEXT_WHITE);
    }

    #[test]
    fn test_lerp_alpha() {
        let faded = ACCENT_MINT.lerp(ACCENT_MINT.with_alpha(0.0), 0.25);
        assert!((faded.a - 0.75).abs() < 1e-6);
        assert_eq!((faded.r, faded.g, faded.b), (161, 193, 129));
    }
}
