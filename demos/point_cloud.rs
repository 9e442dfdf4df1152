use delaunay2d::{Color, Triangulator, Vec2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Vec2> = (0..64)
        .map(|_| Vec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();

    let triangulation = match Triangulator::new().triangulate(&points) {
        Ok(triangulation) => triangulation,
        Err(error) => {
            eprintln!("triangulation failed: {error}");
            std::process::exit(1);
        }
    };

    let mesh = triangulation.to_mesh(Color::WHITE);
    println!(
        "{} points -> {} triangles, {} unique vertices",
        points.len(),
        mesh.triangle_count(),
        mesh.vertices.len()
    );
    if let Some((min, max)) = mesh.bounds() {
        println!("bounds: ({:.3}, {:.3}) .. ({:.3}, {:.3})", min.x, min.y, max.x, max.y);
    }
    for [a, b, c] in mesh.triangles() {
        println!(
            "({:.3}, {:.3}) ({:.3}, {:.3}) ({:.3}, {:.3})",
            a.x, a.y, b.x, b.y, c.x, c.y
        );
    }
}
