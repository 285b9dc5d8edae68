use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Serialize, Deserialize};

/// A 2D point or vector in world units.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };
    pub const X: Point2 = Point2 { x: 1.0, y: 0.0 };
    pub const Y: Point2 = Point2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }

    /// Unit vector pointing along `angle` (radians, counter-clockwise from +X).
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Point2::new(cos, sin)
    }

    pub fn to_angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn dot(self, other: Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Point2) -> f32 {
        (other - self).length()
    }

    /// Divides by the length. A zero vector yields NaN components, use
    /// [`Point2::normalize_or_zero`] where that can happen.
    pub fn normalize(self) -> Point2 {
        self / self.length()
    }

    pub fn normalize_or_zero(self) -> Point2 {
        let normalized = self.normalize();
        if normalized.is_finite() {
            normalized
        } else {
            Point2::ZERO
        }
    }

    /// Direction from `self` towards `other`, zero if they coincide.
    pub fn direction_to(self, other: Point2) -> Point2 {
        (other - self).normalize_or_zero()
    }

    /// `(y, -x)`: the vector rotated a quarter turn clockwise.
    pub fn perpendicular(self) -> Point2 {
        Point2::new(self.y, -self.x)
    }

    pub fn lerp(self, other: Point2, t: f32) -> Point2 {
        self + (other - self) * t
    }

    pub fn midpoint(self, other: Point2) -> Point2 {
        (self + other) / 2.0
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Point2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point2 {
    fn sub_assign(&mut self, rhs: Point2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: f32) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point2> for f32 {
    type Output = Point2;

    fn mul(self, rhs: Point2) -> Point2 {
        rhs * self
    }
}

impl MulAssign<f32> for Point2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Point2 {
    type Output = Point2;

    fn div(self, rhs: f32) -> Point2 {
        Point2::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Point2::new(x, y)
    }
}

impl From<Point2> for (f32, f32) {
    fn from(point: Point2) -> Self {
        (point.x, point.y)
    }
}

#[cfg(feature = "bevy")]
impl From<bevy::math::Vec2> for Point2 {
    fn from(v: bevy::math::Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

#[cfg(feature = "bevy")]
impl From<Point2> for bevy::math::Vec2 {
    fn from(p: Point2) -> Self {
        bevy::math::Vec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_is_clockwise_quarter_turn() {
        assert_eq!(Point2::new(100.0, 0.0).perpendicular(), Point2::new(0.0, -100.0));
        assert_eq!(Point2::new(0.0, 1.0).perpendicular(), Point2::new(1.0, 0.0));
        assert_eq!(Point2::new(3.0, 4.0).perpendicular().dot(Point2::new(3.0, 4.0)), 0.0);
    }

    #[test]
    fn zero_vector_normalizes_to_nan_or_zero() {
        assert!(!Point2::ZERO.normalize().is_finite());
        assert_eq!(Point2::ZERO.normalize_or_zero(), Point2::ZERO);
        assert_eq!(Point2::new(0.0, -5.0).normalize_or_zero(), Point2::new(0.0, -1.0));
    }

    #[test]
    fn lengths_and_distances() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!((b - a).length_squared(), 25.0);
        assert_eq!(a.midpoint(b), Point2::new(2.5, 4.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn angle_round_trip() {
        let v = Point2::from_angle(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert!((v.to_angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
