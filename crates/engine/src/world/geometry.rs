use std::ops::{Add, AddAssign, Mul};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero-length input.
    pub fn normalized_or_zero(self) -> Self {
        let len_sq = self.x * self.x + self.y * self.y;
        if len_sq > 0.0 {
            self * len_sq.sqrt().recip()
        } else {
            Self::ZERO
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scale: f32) -> Vec2 {
        Vec2::new(self.x * scale, self.y * scale)
    }
}

/// Axis-aligned box in window space: `position` is the top-left corner and
/// `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub position: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Inclusive intersection: boxes that only share an edge or a corner
    /// still count as touching.
    pub fn touches(&self, other: &Aabb) -> bool {
        self.right() >= other.position.x
            && self.position.x <= other.right()
            && self.bottom() >= other.position.y
            && self.position.y <= other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_scale_are_componentwise() {
        let sum = Vec2::new(1.0, 2.0) + Vec2::new(3.0, -4.0);
        assert_eq!(sum, Vec2::new(4.0, -2.0));
        assert_eq!(sum * 2.0, Vec2::new(8.0, -4.0));

        let mut acc = Vec2::ZERO;
        acc += Vec2::new(0.5, 0.25);
        acc += Vec2::new(0.5, 0.25);
        assert_eq!(acc, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn normalized_or_zero_handles_zero_and_diagonal() {
        assert_eq!(Vec2::ZERO.normalized_or_zero(), Vec2::ZERO);

        let diagonal = Vec2::new(1.0, 1.0).normalized_or_zero();
        assert!((diagonal.length() - 1.0).abs() < 1e-6);
        assert!((diagonal.x - diagonal.y).abs() < 1e-6);
    }

    #[test]
    fn edge_contact_counts_as_touching() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::new(Vec2::new(10.5, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.touches(&b));
        assert!(!a.touches(&c));
    }
}
