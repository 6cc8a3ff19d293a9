use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::{Result, SimulationError};
use crate::geometry::{Rect, Shape};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Ball, Contact};

/// Side of the bounds a ball bounced off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Sampling ranges for [`BouncingBalls::spawn`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    /// Radius range; both ends must be positive.
    pub radius: RangeInclusive<f64>,
    /// Range for each velocity component, in units per second.
    pub speed: RangeInclusive<f64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            radius: 10.0..=50.0,
            speed: -100.0..=100.0,
        }
    }
}

/// Circles moving in straight lines and reflecting off the walls of `bounds`.
#[derive(Debug, Clone)]
pub struct BouncingBalls {
    bounds: Rect,
    balls: Vec<Ball>,
}

impl BouncingBalls {
    /// Creates an empty simulation.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            balls: Vec::new(),
        }
    }

    /// Creates a simulation from existing balls.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if a ball has a
    /// non-positive radius or does not fit inside `bounds`.
    pub fn with_balls(bounds: Rect, balls: Vec<Ball>) -> Result<Self> {
        for (index, ball) in balls.iter().enumerate() {
            if ball.radius.is_nan() || ball.radius <= 0.0 {
                return Err(SimulationError::InvalidParameters(format!(
                    "ball {index} has non-positive radius {}",
                    ball.radius
                ))
                .into());
            }
            if !bounds.contains_rect(&ball.frame()) {
                return Err(SimulationError::InvalidParameters(format!(
                    "ball {index} at ({}, {}) does not fit inside the bounds",
                    ball.position.x, ball.position.y
                ))
                .into());
            }
        }
        Ok(Self { bounds, balls })
    }

    /// Creates `count` balls with random radius, velocity and position.
    ///
    /// Each ball is placed so that it lies entirely inside `bounds`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if a range is empty or
    /// its width is not finite, the radius range is not positive, or `bounds`
    /// cannot hold a ball of the largest radius.
    pub fn spawn<R: Rng>(
        bounds: Rect,
        count: usize,
        config: &SpawnConfig,
        rng: &mut R,
    ) -> Result<Self> {
        validate_range("radius", &config.radius)?;
        validate_range("speed", &config.speed)?;
        if *config.radius.start() <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "radius range must be positive, got {:?}",
                config.radius
            ))
            .into());
        }
        let max_radius = *config.radius.end();
        if bounds.inset(max_radius, max_radius).is_none() {
            return Err(SimulationError::InvalidParameters(format!(
                "bounds {}x{} cannot hold a ball of radius {max_radius}",
                bounds.width(),
                bounds.height()
            ))
            .into());
        }

        let mut balls = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = rng.gen_range(config.radius.clone());
            let velocity = Vector2::new(
                rng.gen_range(config.speed.clone()),
                rng.gen_range(config.speed.clone()),
            );
            let Some(area) = bounds.inset(radius, radius) else {
                return Err(SimulationError::InvalidParameters(format!(
                    "bounds cannot hold a ball of radius {radius}"
                ))
                .into());
            };
            validate_range("x position", &(area.min_x()..=area.max_x()))?;
            validate_range("y position", &(area.min_y()..=area.max_y()))?;
            let position = Point2::new(
                rng.gen_range(area.min_x()..=area.max_x()),
                rng.gen_range(area.min_y()..=area.max_y()),
            );
            balls.push(Ball::new(position, radius, velocity));
        }

        tracing::debug!(count, "spawned balls");
        Ok(Self { bounds, balls })
    }

    #[must_use]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    #[must_use]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Advances every ball by `delta` seconds and reflects the ones that
    /// left the bounds.
    ///
    /// Returns the number of balls that touched a wall.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if `delta` is negative
    /// or not finite.
    pub fn step(&mut self, delta: f64) -> Result<usize> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "step delta must be finite and non-negative, got {delta}"
            ))
            .into());
        }

        let bounds = self.bounds;
        let limits = bounds.expanded(TOLERANCE);
        let mut contacts = 0;
        for (index, ball) in self.balls.iter_mut().enumerate() {
            ball.advance(delta);
            if limits.contains_rect(&ball.frame()) {
                ball.contact = Contact::Free;
                continue;
            }

            ball.contact = Contact::Wall;
            contacts += 1;
            for wall in reflect(ball, &bounds).into_iter().flatten() {
                tracing::debug!(
                    ball = index,
                    ?wall,
                    x = ball.position.x,
                    y = ball.position.y,
                    "bounce"
                );
            }
        }
        Ok(contacts)
    }
}

/// Reflects `ball` off at most one vertical and one horizontal wall and
/// moves it back inside `bounds`.
fn reflect(ball: &mut Ball, bounds: &Rect) -> [Option<Wall>; 2] {
    let frame = ball.frame();
    let r = ball.radius;

    let horizontal = if frame.min_x() < bounds.min_x() {
        ball.velocity.x = ball.velocity.x.abs();
        ball.position.x = bounds.min_x() + r;
        Some(Wall::Left)
    } else if frame.max_x() > bounds.max_x() {
        ball.velocity.x = -ball.velocity.x.abs();
        ball.position.x = bounds.max_x() - r;
        Some(Wall::Right)
    } else {
        None
    };

    let vertical = if frame.min_y() < bounds.min_y() {
        ball.velocity.y = ball.velocity.y.abs();
        ball.position.y = bounds.min_y() + r;
        Some(Wall::Top)
    } else if frame.max_y() > bounds.max_y() {
        ball.velocity.y = -ball.velocity.y.abs();
        ball.position.y = bounds.max_y() - r;
        Some(Wall::Bottom)
    } else {
        None
    };

    [horizontal, vertical]
}

fn validate_range(name: &str, range: &RangeInclusive<f64>) -> Result<()> {
    let (lo, hi) = (*range.start(), *range.end());
    let sampleable = lo.is_finite() && hi.is_finite() && lo <= hi && (hi - lo).is_finite();
    if !sampleable {
        return Err(SimulationError::InvalidParameters(format!(
            "{name} range {lo}..={hi} is empty or not finite"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrigonError;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds() -> Rect {
        Rect::from_xywh(0.0, 0.0, 200.0, 100.0).unwrap()
    }

    fn fits(sim: &BouncingBalls, ball: &Ball) -> bool {
        sim.bounds().expanded(1e-9).contains_rect(&ball.frame())
    }

    fn single(position: Point2, radius: f64, velocity: Vector2) -> BouncingBalls {
        BouncingBalls::with_balls(bounds(), vec![Ball::new(position, radius, velocity)]).unwrap()
    }

    #[test]
    fn interior_ball_moves_freely() {
        let mut sim = single(Point2::new(100.0, 50.0), 10.0, Vector2::new(20.0, -10.0));
        assert_eq!(sim.step(0.5).unwrap(), 0);
        let ball = sim.balls()[0];
        assert_relative_eq!(ball.position, Point2::new(110.0, 45.0), epsilon = 1e-12);
        assert_relative_eq!(ball.velocity, Vector2::new(20.0, -10.0));
        assert_eq!(ball.contact, Contact::Free);
    }

    #[test]
    fn bounces_off_right_wall() {
        let mut sim = single(Point2::new(185.0, 50.0), 10.0, Vector2::new(20.0, 0.0));
        assert_eq!(sim.step(0.5).unwrap(), 1);
        let ball = sim.balls()[0];
        assert_relative_eq!(ball.velocity, Vector2::new(-20.0, 0.0));
        assert_relative_eq!(ball.position, Point2::new(190.0, 50.0), epsilon = 1e-12);
        assert_eq!(ball.contact, Contact::Wall);
        assert!(fits(&sim, &ball));
    }

    #[test]
    fn bounces_off_top_left_corner() {
        let mut sim = single(Point2::new(12.0, 12.0), 10.0, Vector2::new(-10.0, -10.0));
        sim.step(1.0).unwrap();
        let ball = sim.balls()[0];
        assert_relative_eq!(ball.velocity, Vector2::new(10.0, 10.0));
        assert_relative_eq!(ball.position, Point2::new(10.0, 10.0), epsilon = 1e-12);
    }

    #[test]
    fn bounces_off_bottom_wall() {
        let mut sim = single(Point2::new(50.0, 85.0), 10.0, Vector2::new(0.0, 30.0));
        sim.step(1.0).unwrap();
        let ball = sim.balls()[0];
        assert_relative_eq!(ball.velocity, Vector2::new(0.0, -30.0));
        assert_relative_eq!(ball.position.y, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn large_delta_brings_ball_back_inside() {
        let mut sim = single(Point2::new(100.0, 50.0), 10.0, Vector2::new(100.0, 0.0));
        sim.step(10.0).unwrap();
        let ball = sim.balls()[0];
        assert!(fits(&sim, &ball));
        assert!(ball.velocity.x < 0.0);
    }

    #[test]
    fn contact_clears_after_leaving_wall() {
        let mut sim = single(Point2::new(185.0, 50.0), 10.0, Vector2::new(20.0, 0.0));
        sim.step(0.5).unwrap();
        assert_eq!(sim.balls()[0].contact, Contact::Wall);
        sim.step(0.5).unwrap();
        assert_eq!(sim.balls()[0].contact, Contact::Free);
    }

    #[test]
    fn rejects_bad_delta() {
        let mut sim = BouncingBalls::new(bounds());
        assert!(sim.step(-1.0).is_err());
        assert!(sim.step(f64::NAN).is_err());
        assert_eq!(sim.step(0.0).unwrap(), 0);
    }

    #[test]
    fn with_balls_rejects_escaped_ball() {
        let outside = Ball::new(Point2::new(5.0, 50.0), 10.0, Vector2::zeros());
        let result = BouncingBalls::with_balls(bounds(), vec![outside]);
        assert!(matches!(
            result,
            Err(TrigonError::Simulation(SimulationError::InvalidParameters(_)))
        ));
        let flat = Ball::new(Point2::new(50.0, 50.0), 0.0, Vector2::zeros());
        assert!(BouncingBalls::with_balls(bounds(), vec![flat]).is_err());
    }

    #[test]
    fn spawned_balls_fit_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SpawnConfig::default();
        let sim = BouncingBalls::spawn(bounds(), 25, &config, &mut rng).unwrap();
        assert_eq!(sim.balls().len(), 25);
        for ball in sim.balls() {
            assert!(config.radius.contains(&ball.radius));
            assert!(config.speed.contains(&ball.velocity.x));
            assert!(config.speed.contains(&ball.velocity.y));
            assert!(fits(&sim, ball));
        }
    }

    #[test]
    fn spawned_balls_stay_inside_over_many_steps() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sim = BouncingBalls::spawn(bounds(), 10, &SpawnConfig::default(), &mut rng).unwrap();
        for _ in 0..600 {
            sim.step(1.0 / 60.0).unwrap();
        }
        for ball in sim.balls() {
            assert!(fits(&sim, ball));
        }
    }

    #[test]
    fn spawn_rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let too_big = SpawnConfig {
            radius: 10.0..=60.0,
            ..SpawnConfig::default()
        };
        assert!(BouncingBalls::spawn(bounds(), 1, &too_big, &mut rng).is_err());

        let inverted = SpawnConfig {
            speed: 5.0..=-5.0,
            ..SpawnConfig::default()
        };
        assert!(BouncingBalls::spawn(bounds(), 1, &inverted, &mut rng).is_err());

        let zero_radius = SpawnConfig {
            radius: 0.0..=5.0,
            ..SpawnConfig::default()
        };
        assert!(BouncingBalls::spawn(bounds(), 1, &zero_radius, &mut rng).is_err());
    }

    #[test]
    fn spawn_rejects_overflowing_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let huge_speed = SpawnConfig {
            speed: -f64::MAX..=f64::MAX,
            ..SpawnConfig::default()
        };
        let result = BouncingBalls::spawn(bounds(), 1, &huge_speed, &mut rng);
        assert!(matches!(
            result,
            Err(TrigonError::Simulation(SimulationError::InvalidParameters(_)))
        ));

        let huge_bounds =
            Rect::new(Point2::new(-f64::MAX, 0.0), Point2::new(f64::MAX, 100.0)).unwrap();
        let result = BouncingBalls::spawn(huge_bounds, 1, &SpawnConfig::default(), &mut rng);
        assert!(matches!(
            result,
            Err(TrigonError::Simulation(SimulationError::InvalidParameters(_)))
        ));
    }
}
