use crate::common::{DomainError, DomainResult};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A workspace position, doubling as a roadmap vertex. Identity is
/// structural: two points with equal coordinates are the same vertex.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Total-ordered coordinate key, usable in hash maps.
    pub fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Axis-aligned rectangular region. Bounds are closed on all four sides;
/// zero-width and zero-height boxes are legal degenerate cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl AxisAlignedBox {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> DomainResult<Self> {
        if left > right {
            return Err(DomainError::InvalidObstacle {
                reason: format!("left bound {} exceeds right bound {}", left, right),
            });
        }
        if bottom > top {
            return Err(DomainError::InvalidObstacle {
                reason: format!("bottom bound {} exceeds top bound {}", bottom, top),
            });
        }
        Ok(Self {
            left,
            right,
            bottom,
            top,
        })
    }

    /// Closed-interval membership: the boundary counts as inside, so a
    /// vertex cannot sit flush against an obstacle edge.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    /// Rectangle overlap by axis separation; edge-touching boxes count as
    /// overlapping.
    pub fn overlaps(&self, other: &AxisAlignedBox) -> bool {
        !(self.left > other.right
            || other.left > self.right
            || self.bottom > other.top
            || other.bottom > self.top)
    }

    /// Slab clipping test: does the closed segment p1→p2 intersect this box?
    ///
    /// The admissible parameter range [t_min, t_max] starts at [0, 1] and is
    /// clipped against the x and y slabs in turn. An axis-parallel segment
    /// (zero delta along one axis) intersects that slab either for every t or
    /// for none, so it is resolved by a direct containment check instead of a
    /// division. Segments that cross only the top or bottom edge, and
    /// segments lying entirely inside the box, are reported as blocked.
    pub fn blocks_segment(&self, p1: &Point, p2: &Point) -> bool {
        let mut t_min = 0.0_f64;
        let mut t_max = 1.0_f64;

        let slabs = [
            (p2.x - p1.x, p1.x, self.left, self.right),
            (p2.y - p1.y, p1.y, self.bottom, self.top),
        ];

        for (delta, origin, lo, hi) in slabs {
            if delta == 0.0 {
                if origin < lo || origin > hi {
                    return false;
                }
            } else {
                let mut t0 = (lo - origin) / delta;
                let mut t1 = (hi - origin) / delta;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return false;
                }
            }
        }

        true
    }
}

/// Closed set of obstacle shapes. Adding a shape means adding a variant
/// here and extending the three predicates; there is no open hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Obstacle {
    AxisAlignedBox(AxisAlignedBox),
}

impl Obstacle {
    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Obstacle::AxisAlignedBox(b) => b.contains(p),
        }
    }

    pub fn overlaps(&self, other: &Obstacle) -> bool {
        match (self, other) {
            (Obstacle::AxisAlignedBox(a), Obstacle::AxisAlignedBox(b)) => a.overlaps(b),
        }
    }

    pub fn blocks_segment(&self, p1: &Point, p2: &Point) -> bool {
        match self {
            Obstacle::AxisAlignedBox(b) => b.blocks_segment(p1, p2),
        }
    }
}

impl From<AxisAlignedBox> for Obstacle {
    fn from(b: AxisAlignedBox) -> Self {
        Obstacle::AxisAlignedBox(b)
    }
}
