//! Axis-aligned rectangle geometry for paddles and the ball
//!
//! Screen convention: origin at the top-left of the field, y grows downward.
//! A rectangle is stored as its top-left corner plus a size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Geometric centre
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `y` lies strictly between the top and bottom edges
    pub fn spans_y(&self, y: f32) -> bool {
        self.top() < y && y < self.bottom()
    }

    /// Top-left position that centres a `width` x `height` box in this rectangle
    pub fn centered_origin(&self, width: f32, height: f32) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0 - width / 2.0, self.height / 2.0 - height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(Vec2::new(50.0, 250.0), 10.0, 100.0);
        assert_eq!(r.left(), 50.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.top(), 250.0);
        assert_eq!(r.bottom(), 350.0);
        assert_eq!(r.center(), Vec2::new(55.0, 300.0));
    }

    #[test]
    fn test_spans_y_is_strict() {
        let r = Rect::new(Vec2::new(0.0, 250.0), 10.0, 100.0);
        assert!(r.spans_y(300.0));
        assert!(!r.spans_y(250.0));
        assert!(!r.spans_y(350.0));
        assert!(!r.spans_y(400.0));
    }

    #[test]
    fn test_centered_origin() {
        let field = Rect::new(Vec2::ZERO, 800.0, 600.0);
        assert_eq!(field.centered_origin(10.0, 10.0), Vec2::new(395.0, 295.0));
        assert_eq!(field.centered_origin(10.0, 100.0).y, 250.0);
    }
}
