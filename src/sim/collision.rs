//! Collision tests for the ball against axis-aligned geometry
//!
//! These are arcade-tolerance overlap tests, not exact circle/rectangle
//! distance checks: horizontally only the ball's center must fall inside
//! the target's span, while vertically the ball's full radius counts.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Whether a circle at (cx, cy) with radius r overlaps this rectangle
    #[inline]
    pub fn hit_by_circle(&self, cx: f32, cy: f32, r: f32) -> bool {
        circle_hits_rect(cx, cy, r, self.x, self.y, self.w, self.h)
    }
}

/// Circle vs rectangle overlap
///
/// True iff the circle's center lies strictly inside the rectangle's
/// horizontal span and the circle's vertical extent overlaps the rectangle.
#[inline]
pub fn circle_hits_rect(cx: f32, cy: f32, r: f32, rx: f32, ry: f32, rw: f32, rh: f32) -> bool {
    cx > rx && cx < rx + rw && cy - r < ry + rh && cy + r > ry
}

/// Circle vs a 1D interval: true iff the circle pokes past either end
#[inline]
pub fn circle_hits_bounds(cx: f32, r: f32, min: f32, max: f32) -> bool {
    cx + r > max || cx - r < min
}

/// Circle has sunk past a surface's top edge while centered over it
///
/// Used for the paddle: only the top edge and the horizontal span are
/// checked, so a ball already below the edge still registers.
#[inline]
pub fn circle_reaches_top(cx: f32, cy: f32, r: f32, rx: f32, ry: f32, rw: f32) -> bool {
    cy + r > ry && cx > rx && cx < rx + rw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_hits_rect_overlap() {
        // Brick at (100, 50) 60x20, ball just under its bottom edge
        assert!(circle_hits_rect(130.0, 75.0, 8.0, 100.0, 50.0, 60.0, 20.0));
        // Touching from above
        assert!(circle_hits_rect(130.0, 43.0, 8.0, 100.0, 50.0, 60.0, 20.0));
    }

    #[test]
    fn test_circle_hits_rect_center_outside_span() {
        // Circle overlaps the left edge geometrically, but its center is
        // outside the span so the simplified test misses
        assert!(!circle_hits_rect(95.0, 60.0, 8.0, 100.0, 50.0, 60.0, 20.0));
        // Center exactly on the edge is excluded (strict inequality)
        assert!(!circle_hits_rect(100.0, 60.0, 8.0, 100.0, 50.0, 60.0, 20.0));
        assert!(!circle_hits_rect(160.0, 60.0, 8.0, 100.0, 50.0, 60.0, 20.0));
    }

    #[test]
    fn test_circle_hits_rect_vertical_miss() {
        assert!(!circle_hits_rect(130.0, 78.0, 8.0, 100.0, 50.0, 60.0, 20.0));
        assert!(!circle_hits_rect(130.0, 42.0, 8.0, 100.0, 50.0, 60.0, 20.0));
    }

    #[test]
    fn test_circle_hits_bounds() {
        assert!(!circle_hits_bounds(240.0, 8.0, 0.0, 480.0));
        assert!(circle_hits_bounds(475.0, 8.0, 0.0, 480.0));
        assert!(circle_hits_bounds(5.0, 8.0, 0.0, 480.0));
        // Exactly touching is not a hit
        assert!(!circle_hits_bounds(8.0, 8.0, 0.0, 480.0));
        assert!(!circle_hits_bounds(472.0, 8.0, 0.0, 480.0));
    }

    #[test]
    fn test_circle_reaches_top() {
        // Paddle top edge at 615, spanning x in (200, 280)
        assert!(circle_reaches_top(240.0, 610.0, 8.0, 200.0, 615.0, 80.0));
        // Well below the edge still counts
        assert!(circle_reaches_top(240.0, 630.0, 8.0, 200.0, 615.0, 80.0));
        // Above the edge
        assert!(!circle_reaches_top(240.0, 600.0, 8.0, 200.0, 615.0, 80.0));
        // Outside the span
        assert!(!circle_reaches_top(190.0, 610.0, 8.0, 200.0, 615.0, 80.0));
    }

    #[test]
    fn test_rect_helpers() {
        let rect = Rect::new(10.0, 20.0, 60.0, 20.0);
        assert_eq!(rect.right(), 70.0);
        assert_eq!(rect.bottom(), 40.0);
        assert_eq!(rect.center_x(), 40.0);
        assert!(rect.hit_by_circle(40.0, 30.0, 8.0));
        assert!(!rect.hit_by_circle(40.0, 60.0, 8.0));
    }
}
