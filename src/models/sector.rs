use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::models::{angle, FloatType};

/// An angular interval `[start, start + width)` going counter-clockwise,
/// representing one obstructed range of firing directions. Width is always
/// non-negative and may wrap past 2π/0.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Sector {
    pub start: FloatType,
    pub width: FloatType,
}

impl Sector {
    pub fn new(start: FloatType, width: FloatType) -> Self {
        Self {
            start: angle::normalize(start),
            width,
        }
    }

    /// Sector spanned by two boundary rays. If the shortest rotation from `a`
    /// to `b` is clockwise, the endpoints are swapped so that width stays
    /// non-negative and `start` is the counter-clockwise-first edge.
    pub fn from_endpoints(a: FloatType, b: FloatType) -> Self {
        let start = angle::normalize(a);
        let end = angle::normalize(b);
        let width = angle::shortest_distance(start, end);
        if width < 0.0 {
            Self {
                start: end,
                width: -width,
            }
        } else {
            Self { start, width }
        }
    }

    /// Counter-clockwise end of the sector, normalized.
    pub fn end(&self) -> FloatType {
        angle::normalize(self.start + self.width)
    }

    /// Circular containment test. Works for any input angle and for sectors
    /// wrapping past 2π/0; a width of 2π or more covers every direction.
    pub fn contains(&self, ang: FloatType) -> bool {
        (ang - self.start).rem_euclid(TAU) <= self.width
    }

    /// Two sectors overlap iff their circular intervals intersect, which is
    /// the case exactly when either sector contains the other's start edge.
    pub fn overlaps(&self, other: &Sector) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }

    /// Minimal single sector covering both `self` and `other`. Only meaningful
    /// when the two overlap; the result is capped at a full turn.
    pub fn combine(&self, other: &Sector) -> Sector {
        debug_assert!(self.overlaps(other));

        let offset = (other.start - self.start).rem_euclid(TAU);
        if offset <= self.width {
            // Other starts inside self; keep our start and extend the end if
            // the other sector pokes out past it.
            Sector {
                start: self.start,
                width: self.width.max(offset + other.width).min(TAU),
            }
        } else {
            // Self starts inside other.
            let offset = (self.start - other.start).rem_euclid(TAU);
            Sector {
                start: other.start,
                width: other.width.max(offset + self.width).min(TAU),
            }
        }
    }

    /// Symmetric widening: half the clearance on each edge.
    pub fn pad(&self, clearance: FloatType) -> Sector {
        Sector {
            start: angle::normalize(self.start - clearance * 0.5),
            width: (self.width + clearance).min(TAU),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.width.is_finite()
    }
}
