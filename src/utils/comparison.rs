use crate::constants::ANGLE_EPSILON;
use crate::models::FloatType;

/// Extension trait for tolerant float comparison. Sector arithmetic goes
/// through `atan2` and `rem_euclid`, so exact equality is never reliable.
pub trait FloatCompare {
    fn approx_eq(&self, other: FloatType) -> bool;
    fn approx_zero(&self) -> bool;
    fn approx_lt(&self, other: FloatType) -> bool;
    fn approx_gt(&self, other: FloatType) -> bool;
}

impl FloatCompare for FloatType {
    fn approx_eq(&self, other: FloatType) -> bool {
        (self - other).abs() < ANGLE_EPSILON
    }

    fn approx_zero(&self) -> bool {
        self.abs() < ANGLE_EPSILON
    }

    fn approx_lt(&self, other: FloatType) -> bool {
        *self < other - ANGLE_EPSILON
    }

    fn approx_gt(&self, other: FloatType) -> bool {
        *self > other + ANGLE_EPSILON
    }
}
