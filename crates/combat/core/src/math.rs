//! 2D float vector math for agent kinematics.
//!
//! Positions, velocities, and offsets in the combat core are all [`Vec2`]
//! values in world units. The helpers here are the minimal set the maneuver
//! and combo code needs; anything heavier belongs to the host's physics.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Epsilon used when normalizing near-zero vectors.
const NORMALIZE_EPSILON: f32 = 0.001;

/// A 2D vector in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `radians` (0 = +x, counter-clockwise).
    pub fn from_angle(radians: f32) -> Self {
        Self {
            x: radians.cos(),
            y: radians.sin(),
        }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Straight-line distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or zero when the vector is too
    /// short to normalize meaningfully.
    pub fn normalized_or_zero(self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            Self::ZERO
        } else {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        }
    }

    /// This vector rotated by `radians` counter-clockwise.
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Angle of this vector in radians (0 = +x).
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_short_vector_yields_zero() {
        let v = Vec2::new(0.0002, -0.0004);
        assert_eq!(v.normalized_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, 4.0);
        let r = v.rotated(1.234);
        assert!((r.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn from_angle_is_unit_length() {
        for i in 0..8 {
            let v = Vec2::from_angle(i as f32 * 0.7);
            assert!((v.length() - 1.0).abs() < 1e-6);
        }
    }
}
