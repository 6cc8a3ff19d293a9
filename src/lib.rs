pub mod error;
pub mod geometry;
pub mod math;
pub mod simulation;

pub use error::{Result, TrigonError};
