//! Collision detection for axis-aligned geometry
//!
//! The ball is a circle; paddle, bricks and the screen are rectangles.
//! Impacts are classified into one of four compass directions so the
//! response can reflect a single velocity axis.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.w / 2.0, self.h / 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.half_extents()
    }
}

/// Side of an impact, named by where the rectangle lies relative to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit vector for this direction (screen space, y down)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Scan order for direction classification. Earlier entries win ties.
const COMPASS: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
];

/// Result of a ball-vs-rectangle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Dominant side of the impact (meaningless on a miss)
    pub direction: Direction,
    /// Vector from the ball center to the closest point on the rectangle
    pub vector: Vec2,
}

impl ImpactResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            direction: Direction::Up,
            vector: Vec2::ZERO,
        }
    }

    /// Overlap depth along the axis the impact resolves on
    pub fn penetration(&self, radius: f32) -> f32 {
        if self.direction.is_horizontal() {
            radius - self.vector.x.abs()
        } else {
            radius - self.vector.y.abs()
        }
    }
}

/// Inclusive AABB overlap test. Touching edges count as overlapping.
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    let overlap_x = a.x + a.w >= b.x && b.x + b.w >= a.x;
    let overlap_y = a.y + a.h >= b.y && b.y + b.h >= a.y;
    overlap_x && overlap_y
}

/// Classify a vector into the compass direction it points at most.
///
/// Zero-length and non-finite vectors have no direction and map to `Up`.
pub fn classify_direction(vector: Vec2) -> Direction {
    let Some(dir) = vector.try_normalize() else {
        return Direction::Up;
    };

    let mut best = Direction::Up;
    let mut max = f32::NEG_INFINITY;
    for candidate in COMPASS {
        let dot = dir.dot(candidate.unit());
        if dot > max {
            max = dot;
            best = candidate;
        }
    }
    best
}

/// Check a circle against a rectangle using the closest point on the rectangle
///
/// Collides iff the closest point is strictly closer than `radius`.
pub fn circle_rect_impact(center: Vec2, radius: f32, rect: &Rect) -> ImpactResult {
    let half = rect.half_extents();
    let rect_center = rect.center();

    let clamped = (center - rect_center).clamp(-half, half);
    let closest = rect_center + clamped;
    let vector = closest - center;

    if vector.length() < radius {
        ImpactResult {
            hit: true,
            direction: classify_direction(vector),
            vector,
        }
    } else {
        ImpactResult::miss()
    }
}
