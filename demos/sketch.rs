use std::time::Instant;

use delaunay2d::{Color as MeshColor, Mesh, Triangulation};
use macroquad::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Minimum distance between two sampled stroke points, in pixels.
const SAMPLE_SPACING: f32 = 12.;

const SAMPLE_COLORS: [MeshColor; 4] = [
    MeshColor::rgba(239, 71, 111, 255),
    MeshColor::rgba(255, 209, 102, 255),
    MeshColor::rgba(6, 214, 160, 255),
    MeshColor::rgba(17, 138, 178, 255),
];

fn window_conf() -> Conf {
    Conf {
        window_title: "delaunay2d sketch".to_owned(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut world = World::new();
    let mut sketch = Sketch::new();

    loop {
        clear_background(BLACK);

        world.update();
        set_camera(&world.camera());
        sketch.update(&world);
        sketch.draw();

        set_default_camera();

        for (line, line_str) in [
            "Drag with the left mouse button to sketch a contour",
            "Release to triangulate its interior",
            "C toggles circumcircles",
            "WASD to pan camera",
        ]
        .into_iter()
        .enumerate()
        {
            draw_text_ex(
                line_str,
                10.,
                20. + (line as f32) * 20.,
                TextParams {
                    font_size: 40,
                    font_scale: 0.5,
                    ..Default::default()
                },
            );
        }

        next_frame().await
    }
}

struct World {
    pan: Vec2,
}

impl World {
    fn new() -> Self {
        Self { pan: Vec2::ZERO }
    }

    fn camera(&self) -> Camera2D {
        Camera2D {
            zoom: vec2(2. / screen_width(), -2. / screen_height()),
            offset: self.pan,
            ..Default::default()
        }
    }

    fn mouse_position(&self) -> Vec2 {
        let mut mouse_position = Vec2::from(mouse_position());
        let screen = Vec2::new(screen_width() * 0.5, screen_height() * 0.5);
        mouse_position.x -= screen.x + self.pan.x * screen.x;
        mouse_position.y -= screen.y - self.pan.y * screen.y;
        mouse_position
    }

    fn update(&mut self) {
        if is_key_down(KeyCode::W) {
            self.pan.y -= get_frame_time() * 0.5;
        }
        if is_key_down(KeyCode::S) {
            self.pan.y += get_frame_time() * 0.5;
        }
        if is_key_down(KeyCode::A) {
            self.pan.x += get_frame_time() * 0.5;
        }
        if is_key_down(KeyCode::D) {
            self.pan.x -= get_frame_time() * 0.5;
        }
    }
}

struct Sketch {
    stroke: Vec<Vec2>,
    dragging: bool,
    triangulation: Option<Triangulation>,
    mesh: Mesh,
    next_color: usize,
    show_circles: bool,
}

impl Sketch {
    fn new() -> Self {
        Self {
            stroke: vec![],
            dragging: false,
            triangulation: None,
            mesh: Mesh::default(),
            next_color: 0,
            show_circles: false,
        }
    }

    fn update(&mut self, world: &World) {
        if is_key_pressed(KeyCode::C) {
            self.show_circles = !self.show_circles;
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            self.stroke.clear();
            self.stroke.push(world.mouse_position());
            self.dragging = true;
        } else if self.dragging && is_mouse_button_released(MouseButton::Left) {
            self.dragging = false;
            self.triangulate();
        } else if self.dragging {
            let position = world.mouse_position();
            if let Some(last) = self.stroke.last() {
                if last.distance(position) > SAMPLE_SPACING {
                    self.stroke.push(position);
                }
            }
        }
    }

    fn triangulate(&mut self) {
        let contour: Vec<[f64; 2]> = self
            .stroke
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect();

        let started = Instant::now();
        match Triangulation::contour(&contour) {
            Ok(triangulation) => {
                let color = SAMPLE_COLORS[self.next_color % SAMPLE_COLORS.len()];
                self.next_color += 1;
                self.mesh = triangulation.to_mesh(color);
                tracing::info!(
                    points = contour.len(),
                    triangles = triangulation.len(),
                    elapsed = ?started.elapsed(),
                    "triangulated sketch"
                );
                self.triangulation = Some(triangulation);
            }
            Err(error) => {
                tracing::warn!(%error, "sketch rejected");
                self.mesh = Mesh::default();
                self.triangulation = None;
            }
        }
    }

    fn draw(&self) {
        let color = self.mesh.colors.first().copied().unwrap_or(MeshColor::WHITE);
        let fill = Color::from_rgba(color.r, color.g, color.b, 160);
        for [a, b, c] in self.mesh.triangles() {
            draw_triangle(to_screen(a), to_screen(b), to_screen(c), fill);
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let (from, to) = (to_screen(from), to_screen(to));
                draw_line(from.x, from.y, to.x, to.y, 1., WHITE);
            }
        }

        if self.show_circles {
            if let Some(triangulation) = &self.triangulation {
                triangulation.for_each_triangle(|t| {
                    if let Some(circle) = t.circumscribed_circle() {
                        let outline = circle.outline(32);
                        for pair in outline.windows(2) {
                            let (from, to) = (to_screen(pair[0]), to_screen(pair[1]));
                            draw_line(from.x, from.y, to.x, to.y, 1., GRAY);
                        }
                    }
                });
            }
        }

        for pair in self.stroke.windows(2) {
            draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, 3., WHITE);
        }
    }
}

fn to_screen(p: delaunay2d::Vec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}
