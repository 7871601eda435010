//! Primitive Showcase
//!
//! A spinning filled triangle with its outline, pulsing concentric circles,
//! a line fan from the corner and a field of small random triangles.

use super::Demo;
use crate::raster::Canvas;
use crate::util::{hsv_to_rgb, Rng};

const CONFETTI_COUNT: usize = 24;
const FAN_LINES: i32 = 16;

struct Confetti {
    // Position as a fraction of the canvas, so the field survives any size
    fx: f32,
    fy: f32,
    size: i32,
    hue: f32,
    spin: f32,
}

/// Every rasterization primitive on one screen
pub struct Shapes {
    time: f32,
    confetti: Vec<Confetti>,
}

impl Shapes {
    pub fn new() -> Self {
        let mut rng = Rng::new(0x5eed);
        let confetti = (0..CONFETTI_COUNT)
            .map(|_| Confetti {
                fx: rng.next_u8() as f32 / 255.0,
                fy: rng.next_u8() as f32 / 255.0,
                size: rng.range_i32(4, 14),
                hue: rng.next_u8() as f32 / 255.0 * 360.0,
                spin: rng.range_i32(-3, 3) as f32,
            })
            .collect();
        Self {
            time: 0.0,
            confetti,
        }
    }
}

impl Default for Shapes {
    fn default() -> Self {
        Self::new()
    }
}

/// Triangle vertices at `radius` around (cx, cy), rotated by `angle`
fn triangle_at(cx: f32, cy: f32, radius: f32, angle: f32) -> [(i32, i32); 3] {
    let step = std::f32::consts::TAU / 3.0;
    [0.0, 1.0, 2.0].map(|k| {
        let a = angle + k * step;
        ((cx + radius * a.cos()) as i32, (cy + radius * a.sin()) as i32)
    })
}

impl Demo for Shapes {
    fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    fn render(&self, canvas: &mut Canvas) {
        let w = canvas.width() as f32;
        let h = canvas.height() as f32;
        let (cx, cy) = (w / 2.0, h / 2.0);
        let radius = w.min(h) * 0.3;

        // Line fan from the top-left corner
        for i in 0..FAN_LINES {
            let t = i as f32 / (FAN_LINES - 1) as f32;
            let (r, g, b) = hsv_to_rgb(t * 90.0 + self.time * 20.0, 0.6, 0.5);
            canvas.set_color_rgb(r as u32, g as u32, b as u32);
            let x1 = (w * (1.0 - t)) as i32;
            let y1 = (h * t) as i32;
            canvas.draw_line(0, 0, x1, y1);
        }

        // Pulsing concentric circles
        let pulse = (self.time * 2.0).sin() * 0.5 + 0.5;
        for ring in 0..4u32 {
            let (r, g, b) = hsv_to_rgb(200.0 + ring as f32 * 20.0, 0.7, 0.9);
            canvas.set_color_rgb(r as u32, g as u32, b as u32);
            let ring_radius = radius * 0.3 + ring as f32 * radius * 0.25 + pulse * 6.0;
            canvas.draw_circle(cx as u32, cy as u32, ring_radius as u32);
        }

        // Spinning triangle with a white outline
        let [v0, v1, v2] = triangle_at(cx, cy, radius, self.time * 0.8);
        let (r, g, b) = hsv_to_rgb(self.time * 40.0, 0.8, 0.95);
        canvas.set_color(r as u32, g as u32, b as u32, 255);
        canvas.fill_triangle(v0, v1, v2);
        canvas.set_color_rgb(255, 255, 255);
        canvas.draw_triangle_outline(v0, v1, v2);

        for piece in &self.confetti {
            let [a, b2, c] = triangle_at(
                piece.fx * w,
                piece.fy * h,
                piece.size as f32,
                self.time * piece.spin,
            );
            let (r, g, b) = hsv_to_rgb(piece.hue, 0.9, 1.0);
            canvas.set_color_rgb(r as u32, g as u32, b as u32);
            canvas.fill_triangle(a, b2, c);
        }
    }

    fn name(&self) -> &str {
        "Shapes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BLANK;

    #[test]
    fn test_centre_is_covered_by_triangle() {
        let shapes = Shapes::new();
        let mut canvas = Canvas::new(320, 240);
        shapes.render(&mut canvas);
        assert_ne!(canvas.buffer().get_pixel(160, 120), Some(BLANK));
    }

    #[test]
    fn test_animation_changes_frame() {
        let mut shapes = Shapes::new();
        let mut first = Canvas::new(160, 120);
        shapes.render(&mut first);
        shapes.update(0.5);
        let mut second = Canvas::new(160, 120);
        shapes.render(&mut second);
        assert_ne!(first.buffer().as_bytes(), second.buffer().as_bytes());
    }

    #[test]
    fn test_triangle_vertices_on_radius() {
        for (x, y) in triangle_at(100.0, 100.0, 50.0, 0.3) {
            let d = (((x - 100).pow(2) + (y - 100).pow(2)) as f32).sqrt();
            assert!((d - 50.0).abs() < 2.0);
        }
    }
}
