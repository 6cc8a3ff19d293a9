mod ball;
mod bouncing_balls;

pub use ball::{Ball, Contact};
pub use bouncing_balls::{BouncingBalls, SpawnConfig, Wall};
