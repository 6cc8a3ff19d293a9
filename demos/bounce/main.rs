//! Headless bouncing-circle run.
//!
//! Usage:
//! ```text
//! cargo run --example bounce                 # 8 balls, 10 s, seed 0
//! cargo run --example bounce -- 20 30 1234   # balls, seconds, seed
//! RUST_LOG=trigon=debug cargo run --example bounce   # log every bounce
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use trigon::geometry::{Rect, Shape, Triangle};
use trigon::simulation::{BouncingBalls, Contact, SpawnConfig};

const FRAME_DELTA: f64 = 1.0 / 60.0;

fn main() -> trigon::Result<()> {
    // Default: WARN for everything, INFO for trigon and this example.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trigon=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("bounce=info".parse().unwrap_or_default())
        .add_directive("trigon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let seconds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let bounds = Rect::from_xywh(0.0, 0.0, 640.0, 480.0)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = BouncingBalls::spawn(bounds, count, &SpawnConfig::default(), &mut rng)?;
    tracing::info!(count, seconds, seed, "simulation start");

    let frames_per_second = 60;
    let mut total_contacts = 0;
    for second in 0..seconds {
        for _ in 0..frames_per_second {
            total_contacts += sim.step(FRAME_DELTA)?;
        }

        let touching = sim
            .balls()
            .iter()
            .filter(|b| b.contact == Contact::Wall)
            .count();
        let marker = Triangle::inscribed(&bounds, f64::from(second) * 0.1);
        let frame = marker.frame();
        tracing::info!(
            second = second + 1,
            touching,
            total_contacts,
            marker_area = marker.area(),
            marker_frame_w = frame.width(),
            marker_frame_h = frame.height(),
            "tick"
        );
    }

    for (index, ball) in sim.balls().iter().enumerate() {
        tracing::info!(
            ball = index,
            x = ball.position.x,
            y = ball.position.y,
            vx = ball.velocity.x,
            vy = ball.velocity.y,
            radius = ball.radius,
            "final state"
        );
    }
    Ok(())
}
