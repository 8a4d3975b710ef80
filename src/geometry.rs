//! Small 2D value types shared by the picker layout and progress geometry.

/// A point in layout space (pixels, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn distance(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Point on a circle, with angles in degrees measured clockwise from 3 o'clock.
    pub fn on_circle(center: Point, radius: f32, angle_degrees: f32) -> Point {
        let radians = angle_degrees.to_radians();
        Point::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    }
}

/// An axis-aligned rectangle in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within this rectangle (right/bottom edges exclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0);

        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.5, 19.5));
        assert!(!rect.contains(30.0, 20.0));
        assert!(!rect.contains(9.9, 10.0));
    }

    #[test]
    fn test_on_circle_is_clockwise_from_three_oclock() {
        let center = Point::new(0.0, 0.0);
        let top = Point::on_circle(center, 1.0, -90.0);
        assert!(top.x.abs() < 1e-6);
        assert!((top.y + 1.0).abs() < 1e-6);

        let bottom = Point::on_circle(center, 1.0, 90.0);
        assert!((bottom.y - 1.0).abs() < 1e-6);
    }
}
