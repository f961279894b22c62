use serde::Deserialize;

use super::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const RED: Rgba = Rgba([255, 0, 0, 255]);
}

/// Axis-aligned extent of an entity. It is both what gets drawn and what
/// collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

impl Shape {
    pub fn new(width: f32, height: f32, color: Rgba) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Directional intents currently held by the controlling player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl Input {
    /// Unit-or-zero direction in window space (`forward` is up, i.e. -y).
    /// Opposing intents cancel.
    pub fn direction(&self) -> Vec2 {
        let mut x = 0.0f32;
        let mut y = 0.0f32;
        if self.right {
            x += 1.0;
        }
        if self.left {
            x -= 1.0;
        }
        if self.backward {
            y += 1.0;
        }
        if self.forward {
            y -= 1.0;
        }
        Vec2::new(x, y).normalized_or_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    pub birth_ms: u64,
    pub duration_ms: u64,
}

impl Lifespan {
    pub fn new(birth_ms: u64, duration_ms: u64) -> Self {
        Self {
            birth_ms,
            duration_ms,
        }
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.birth_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) > self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_intents_cancel() {
        let input = Input {
            forward: true,
            backward: true,
            left: true,
            right: false,
        };
        assert_eq!(input.direction(), Vec2::new(-1.0, 0.0));

        let all = Input {
            forward: true,
            backward: true,
            left: true,
            right: true,
        };
        assert_eq!(all.direction(), Vec2::ZERO);
    }

    #[test]
    fn diagonal_intent_is_unit_length() {
        let input = Input {
            forward: true,
            right: true,
            ..Input::default()
        };
        let direction = input.direction();
        assert!((direction.length() - 1.0).abs() < 1e-6);
        assert!(direction.x > 0.0);
        assert!(direction.y < 0.0);
    }

    #[test]
    fn lifespan_expires_strictly_after_duration() {
        let lifespan = Lifespan::new(1_000, 30_000);
        assert!(!lifespan.is_expired(1_000 + 29_999));
        assert!(!lifespan.is_expired(1_000 + 30_000));
        assert!(lifespan.is_expired(1_000 + 30_001));
    }

    #[test]
    fn lifespan_clock_before_birth_reads_as_zero_elapsed() {
        let lifespan = Lifespan::new(500, 10);
        assert_eq!(lifespan.elapsed_ms(100), 0);
        assert!(!lifespan.is_expired(100));
    }
}
