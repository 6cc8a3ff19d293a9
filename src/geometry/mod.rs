mod circle;
mod rect;
mod triangle;

pub use circle::Circle;
pub use rect::Rect;
pub use triangle::{Classifier, Triangle};

/// Trait for planar values that occupy a region of the plane.
pub trait Shape {
    /// Returns the axis-aligned bounding rectangle of the shape.
    fn frame(&self) -> Rect;
}
