//! Mandelbrot Zoom
//!
//! Ping-pong zoom into Seahorse Valley with smooth, cycling palette colours.
//! Every pixel goes through the canvas' explicit-colour write.

use super::Demo;
use crate::raster::Canvas;
use crate::util::hsv_to_rgb;

const PALETTE_SIZE: usize = 256;
const CYCLE_SECONDS: f32 = 20.0;

/// Animated Mandelbrot zoom with smooth coloring
pub struct Mandelbrot {
    time: f32,
    palette: Vec<(u8, u8, u8)>,
    zoom: f64,
    center_x: f64,
    center_y: f64,
    max_iter: u32,
}

impl Mandelbrot {
    pub fn new() -> Self {
        let palette = (0..PALETTE_SIZE)
            .map(|i| hsv_to_rgb(i as f32 / PALETTE_SIZE as f32 * 360.0, 0.85, 0.95))
            .collect();

        Self {
            time: 0.0,
            palette,
            zoom: 1.0,
            center_x: -0.745,
            center_y: 0.186,
            max_iter: 64,
        }
    }

    /// Escape iteration count and final |z|² for c = (cr, ci), or None inside the set
    fn escape(&self, cr: f64, ci: f64) -> Option<(u32, f64)> {
        // Main cardioid and period-2 bulb are inside
        let q = (cr - 0.25) * (cr - 0.25) + ci * ci;
        if q * (q + (cr - 0.25)) <= 0.25 * ci * ci {
            return None;
        }
        if (cr + 1.0) * (cr + 1.0) + ci * ci <= 0.0625 {
            return None;
        }

        let (mut zr, mut zi) = (0.0_f64, 0.0_f64);
        let (mut zr2, mut zi2) = (0.0_f64, 0.0_f64);
        let mut iter = 0;
        while zr2 + zi2 <= 4.0 && iter < self.max_iter {
            zi = 2.0 * zr * zi + ci;
            zr = zr2 - zi2 + cr;
            zr2 = zr * zr;
            zi2 = zi * zi;
            iter += 1;
        }
        if iter == self.max_iter {
            None
        } else {
            Some((iter, zr2 + zi2))
        }
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Mandelbrot {
    fn update(&mut self, dt: f32) {
        self.time += dt;
        let t = (self.time % (CYCLE_SECONDS * 2.0)) / CYCLE_SECONDS;
        // Triangle wave 0→1→0, eased
        let t = if t < 1.0 { t } else { 2.0 - t };
        let eased = t * t * (3.0 - 2.0 * t);
        self.zoom = (eased as f64 * 7.5).exp();
        self.max_iter = 64 + ((self.zoom.ln().max(0.0) * 8.0) as u32).min(160);
    }

    fn render(&self, canvas: &mut Canvas) {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;
        let inv_zoom = 3.0 / (width.min(height).max(1) as f64 * self.zoom);
        let (cx_offset, cy_offset) = (width as f64 * 0.5, height as f64 * 0.5);
        let palette_shift = (self.time * 30.0) as usize;

        for py in 0..height {
            let ci = (py as f64 - cy_offset) * inv_zoom + self.center_y;
            for px in 0..width {
                let cr = (px as f64 - cx_offset) * inv_zoom + self.center_x;
                match self.escape(cr, ci) {
                    None => canvas.write_pixel_rgba(px, py, 0, 0, 0, 255),
                    Some((iter, modulus2)) => {
                        let smooth = iter as f64 + 1.0 - modulus2.sqrt().ln().ln() / 2.0_f64.ln();
                        let idx = ((smooth.max(0.0) * 4.0) as usize + palette_shift) % PALETTE_SIZE;
                        let (r, g, b) = self.palette[idx];
                        canvas.write_pixel_rgba(px, py, r, g, b, 255);
                    },
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Mandelbrot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_inside() {
        let m = Mandelbrot::new();
        assert_eq!(m.escape(0.0, 0.0), None);
        assert_eq!(m.escape(-1.0, 0.0), None);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let m = Mandelbrot::new();
        let (iter, modulus2) = m.escape(3.0, 3.0).unwrap();
        assert_eq!(iter, 1);
        assert!(modulus2 > 4.0);
    }

    #[test]
    fn test_zoom_ping_pongs() {
        let mut m = Mandelbrot::new();
        m.update(CYCLE_SECONDS);
        let deepest = m.zoom;
        m.update(CYCLE_SECONDS);
        assert!(deepest > 1000.0);
        assert!((m.zoom - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_render_writes_every_pixel_opaque() {
        let m = Mandelbrot::new();
        let mut canvas = Canvas::new(40, 30);
        canvas.clear(1, 2, 3, 4);
        m.render(&mut canvas);
        for y in 0..30 {
            for x in 0..40 {
                let (_, _, _, a) = canvas.buffer().get_pixel(x, y).unwrap();
                assert_eq!(a, 255);
            }
        }
    }
}
