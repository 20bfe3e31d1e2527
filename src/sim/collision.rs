//! Axis-aligned collision tests between the bird and the pipe field
//!
//! Collisions are expected gameplay events, not errors: the check is a
//! pure predicate and the tick loop turns a hit into a phase transition.

use glam::IVec2;

use super::state::{Bird, Pipe};
use crate::consts::*;

/// Closed-open axis-aligned rectangle: `min` inclusive, `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            max: IVec2::new(x + w, y + h),
        }
    }

    /// True when the interiors overlap. Rects that merely share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check the bird against every live pipe and the playfield bounds.
///
/// Short-circuits on the first overlap; any hit ends the run so the
/// check order never matters. Crossing the top or bottom bound is itself
/// a collision, not something to clamp.
pub fn check_collision(bird: &Bird, pipes: &[Pipe]) -> bool {
    let bird_rect = Rect::from_xywh(BIRD_LANE_X, bird.y, BIRD_WIDTH, BIRD_HEIGHT);

    for pipe in pipes {
        let top = Rect::from_xywh(pipe.x, pipe.top_y, PIPE_WIDTH, PIPE_HEIGHT);
        let bottom = Rect::from_xywh(pipe.x, pipe.bottom_y, PIPE_WIDTH, PIPE_HEIGHT);
        if bird_rect.intersects(&top) || bird_rect.intersects(&bottom) {
            return true;
        }
    }

    bird.y <= 0 || bird.y >= FIELD_HEIGHT - BIRD_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_at(x: i32, gap_center: i32, gap: i32) -> Pipe {
        Pipe {
            x,
            top_y: gap_center - PIPE_HEIGHT,
            bottom_y: gap_center + gap,
            scored: false,
        }
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_shared_edge_is_not_overlap() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(10, 0, 10, 10);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_bird_in_gap_is_safe() {
        // Pipe straddling the lane, bird centered in the opening
        let pipe = pipe_at(BIRD_LANE_X - 10, 200, 170);
        let bird = Bird { y: 250, vel: 0 };
        assert!(!check_collision(&bird, &[pipe]));
    }

    #[test]
    fn test_bird_hits_top_pipe() {
        let pipe = pipe_at(BIRD_LANE_X - 10, 200, 170);
        // Top opening is at y=200; bird above it overlaps the upper pipe
        let bird = Bird { y: 150, vel: 0 };
        assert!(check_collision(&bird, &[pipe]));
    }

    #[test]
    fn test_bird_hits_bottom_pipe() {
        let pipe = pipe_at(BIRD_LANE_X - 10, 200, 170);
        // Bottom pipe starts at y=370
        let bird = Bird { y: 360, vel: 0 };
        assert!(check_collision(&bird, &[pipe]));
    }

    #[test]
    fn test_pipe_outside_lane_is_ignored() {
        // Same heights, but the pair is far right of the bird
        let pipe = pipe_at(400, 200, 170);
        let bird = Bird { y: 150, vel: 0 };
        assert!(!check_collision(&bird, &[pipe]));
    }

    #[test]
    fn test_top_boundary() {
        let bird = Bird { y: 0, vel: 0 };
        assert!(check_collision(&bird, &[]));
        let bird = Bird { y: -1, vel: 0 };
        assert!(check_collision(&bird, &[]));
        let bird = Bird { y: 1, vel: 0 };
        assert!(!check_collision(&bird, &[]));
    }

    #[test]
    fn test_bottom_boundary() {
        let bird = Bird {
            y: FIELD_HEIGHT - BIRD_HEIGHT,
            vel: 0,
        };
        assert!(check_collision(&bird, &[]));
        let bird = Bird {
            y: FIELD_HEIGHT - BIRD_HEIGHT - 1,
            vel: 0,
        };
        assert!(!check_collision(&bird, &[]));
    }
}
