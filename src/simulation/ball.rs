use crate::geometry::{Circle, Rect, Shape};
use crate::math::{Point2, Vector2};

/// Whether a ball touched a wall during the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contact {
    #[default]
    Free,
    Wall,
}

/// A moving circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Point2,
    /// Units per second.
    pub velocity: Vector2,
    pub radius: f64,
    pub contact: Contact,
}

impl Ball {
    /// Creates a free ball.
    #[must_use]
    pub fn new(position: Point2, radius: f64, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            radius,
            contact: Contact::Free,
        }
    }

    /// Moves the ball so its frame is centered on `frame`'s center.
    pub fn set_frame(&mut self, frame: &Rect) {
        self.position = frame.mid();
    }

    /// Returns the circle the ball currently occupies.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::with_radius(self.position, self.radius)
    }

    /// Advances the position by `velocity * delta`.
    pub fn advance(&mut self, delta: f64) {
        self.position += self.velocity * delta;
    }
}

impl Shape for Ball {
    fn frame(&self) -> Rect {
        Rect::from_center_radius(self.position, self.radius)
    }
}
