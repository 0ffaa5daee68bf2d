//! Ray cast demo: bounces a ray around a box of mirror walls and reports what
//! it hits along the way.
//!
//! Usage:
//! ```text
//! cargo run --example ray_cast
//! RUST_LOG=planar=trace cargo run --example ray_cast
//! ```

use planar::math::{Point2, Vector2};
use planar::{Intersections, LineSegment2D, PlanarError, Quadrilateral2D, Ray2D, Triangle2D};

const BOUNCES: usize = 6;

fn main() -> Result<(), PlanarError> {
    // Default: WARN for everything, INFO for this demo and planar.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("ray_cast=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let walls = [
        LineSegment2D::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)),
        LineSegment2D::new(Point2::new(10.0, 0.0), Point2::new(10.0, 6.0)),
        LineSegment2D::new(Point2::new(10.0, 6.0), Point2::new(0.0, 6.0)),
        LineSegment2D::new(Point2::new(0.0, 6.0), Point2::new(0.0, 0.0)),
    ];
    let prism = Triangle2D::new(
        Point2::new(6.0, 1.0),
        Point2::new(8.0, 1.0),
        Point2::new(7.0, 3.0),
    );
    prism.validate()?;
    let block = Quadrilateral2D::new(
        Point2::new(2.0, 4.0),
        Point2::new(3.0, 4.0),
        Point2::new(3.0, 5.0),
        Point2::new(2.0, 5.0),
    );
    block.validate()?;

    let mut ray = Ray2D::try_new(Point2::new(1.0, 1.0), Vector2::new(2.0, 1.0))?;
    for bounce in 0..BOUNCES {
        tracing::info!(bounce, %ray, "casting");
        report("prism", ray.intersection_with_triangle(&prism));
        report("block", ray.intersection_with_quadrilateral(&block));

        // Nearest wall ahead of the origin, skipping the wall it sits on.
        let next = walls
            .iter()
            .filter_map(|wall| match ray.intersection_with_segment(wall) {
                Intersections::One(hit) if (hit - ray.origin).norm() > 1e-9 => Some((wall, hit)),
                _ => None,
            })
            .min_by(|(_, a), (_, b)| {
                (a - ray.origin).norm().total_cmp(&(b - ray.origin).norm())
            });

        let Some((wall, hit)) = next else {
            tracing::warn!(%ray, "ray escaped the box");
            break;
        };
        tracing::info!(x = hit.x, y = hit.y, "wall hit");

        let direction = ray.reflected_direction(wall)?;
        ray = Ray2D::new(hit, direction);
    }

    Ok(())
}

fn report(name: &str, hits: Intersections) {
    match hits {
        Intersections::None => {}
        Intersections::One(p) => tracing::info!(name, x = p.x, y = p.y, "one hit"),
        Intersections::Two(p, q) => {
            tracing::info!(name, x0 = p.x, y0 = p.y, x1 = q.x, y1 = q.y, "two hits");
        }
        Intersections::Infinite => tracing::info!(name, "edge overlap"),
    }
}
