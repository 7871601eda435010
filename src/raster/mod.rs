mod color;
mod pixel_buffer;
mod primitives;
mod triangle;

pub use color::DrawColor;
pub use pixel_buffer::{PixelBuffer, BLANK, BYTES_PER_PIXEL};
pub use primitives::{Circle, Line};
pub use triangle::{outline, Span, Spans, Vertex};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Drawing context: a pixel buffer plus the current draw colour
///
/// Every call without explicit colour arguments uses the colour last passed
/// to [`Canvas::set_color`]. The colour survives [`Canvas::clear`] and frame
/// boundaries.
pub struct Canvas {
    buffer: PixelBuffer,
    color: DrawColor,
}

impl Canvas {
    /// Canvas with a blank buffer of the given size, drawing in white
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_buffer(PixelBuffer::with_size(width, height))
    }

    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            color: DrawColor::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    #[inline]
    pub fn color(&self) -> DrawColor {
        self.color
    }

    /// Set the current colour; r, g, b saturate at 255, alpha is kept as given
    pub fn set_color(&mut self, r: u32, g: u32, b: u32, a: u32) {
        self.color = DrawColor::new(r, g, b, a);
    }

    /// Opaque variant of [`Canvas::set_color`]
    pub fn set_color_rgb(&mut self, r: u32, g: u32, b: u32) {
        self.color = DrawColor::rgb(r, g, b);
    }

    /// Clear to a uniform colour (opaque black is free on a blank buffer)
    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.buffer.clear(r, g, b, a);
    }

    /// Clear to opaque black
    pub fn clear_default(&mut self) {
        let (r, g, b, a) = BLANK;
        self.clear(r, g, b, a);
    }

    /// Set one pixel in the current colour
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32) {
        self.buffer.write_bgra(x, y, self.color.bgra());
    }

    /// Set one pixel in an explicit colour
    #[inline]
    pub fn write_pixel_rgba(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        self.buffer.write_rgba(x, y, r, g, b, a);
    }

    /// Bresenham line, both endpoints included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let bgra = self.color.bgra();
        for (x, y) in Line::new(x0, y0, x1, y1) {
            self.buffer.write_bgra(x, y, bgra);
        }
    }

    /// Midpoint circle outline, 1px thick
    pub fn draw_circle(&mut self, cx: u32, cy: u32, radius: u32) {
        let bgra = self.color.bgra();
        for (x, y) in Circle::new(cx, cy, radius).flatten() {
            if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                self.buffer.write_bgra(x, y, bgra);
            }
        }
    }

    /// Three edges of a triangle, no fill
    pub fn draw_triangle_outline(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        let bgra = self.color.bgra();
        for (x, y) in outline(v0, v1, v2) {
            self.buffer.write_bgra(x, y, bgra);
        }
    }

    /// Scanline-filled triangle, any winding order
    pub fn fill_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        triangle::fill(&mut self.buffer, v0, v1, v2, self.color.bgra());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.buffer().get_pixel(x, y) != Some(BLANK) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_default_colour_is_opaque_white() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.color(), DrawColor::WHITE);
    }

    #[test]
    fn test_single_point_line() {
        let mut canvas = Canvas::new(16, 16);
        canvas.set_color(255, 0, 0, 255);
        canvas.draw_line(5, 5, 5, 5);
        assert_eq!(lit_pixels(&canvas), vec![(5, 5)]);
        assert_eq!(canvas.buffer().get_pixel(5, 5), Some((255, 0, 0, 255)));
    }

    #[test]
    fn test_horizontal_line_pixel_count() {
        let mut canvas = Canvas::new(32, 8);
        canvas.draw_line(3, 4, 20, 4);
        assert_eq!(lit_pixels(&canvas).len(), 18);
    }

    #[test]
    fn test_line_partly_off_canvas_keeps_visible_part() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(-5, 2, 14, 2);
        assert_eq!(lit_pixels(&canvas).len(), 10);
    }

    #[test]
    fn test_circle_radius_zero_and_one() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_circle(4, 4, 0);
        assert!(canvas.buffer().is_blank());
        canvas.draw_circle(4, 4, 1);
        assert_eq!(lit_pixels(&canvas), vec![(4, 4)]);
    }

    #[test]
    fn test_circle_touching_origin_does_not_wrap() {
        let mut canvas = Canvas::new(64, 64);
        canvas.draw_circle(0, 0, 10);
        // only the quadrant with x, y >= 0 lands in the buffer
        let lit = lit_pixels(&canvas);
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| x <= 10 && y <= 10));
    }

    #[test]
    fn test_outline_draws_edges_only() {
        let mut canvas = Canvas::new(32, 32);
        canvas.draw_triangle_outline((2, 2), (20, 2), (2, 20));
        let px = |x, y| canvas.buffer().get_pixel(x, y);
        assert_ne!(px(10, 2), Some(BLANK));
        assert_ne!(px(2, 10), Some(BLANK));
        assert_eq!(px(5, 5), Some(BLANK));
    }

    #[test]
    fn test_fill_triangle_uses_current_colour() {
        let mut canvas = Canvas::new(32, 32);
        canvas.set_color(10, 20, 30, 255);
        canvas.fill_triangle((0, 0), (10, 0), (0, 10));
        assert_eq!(canvas.buffer().get_pixel(2, 2), Some((10, 20, 30, 255)));
        assert_eq!(canvas.buffer().get_pixel(9, 9), Some(BLANK));
    }

    #[test]
    fn test_colour_persists_across_clear() {
        let mut canvas = Canvas::new(8, 8);
        canvas.set_color(1, 2, 3, 4);
        canvas.clear(9, 9, 9, 255);
        canvas.clear_default();
        assert_eq!(canvas.color(), DrawColor::new(1, 2, 3, 4));
        canvas.write_pixel(0, 0);
        assert_eq!(canvas.buffer().get_pixel(0, 0), Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_set_colour_saturates() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_color(400, 255, 256, 255);
        canvas.set_color(400, 255, 256, 255);
        assert_eq!(canvas.color(), DrawColor::rgb(255, 255, 255));
    }

    #[test]
    fn test_explicit_colour_write_ignores_current_colour() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_color(1, 1, 1, 255);
        canvas.write_pixel_rgba(1, 1, 200, 150, 100, 50);
        assert_eq!(canvas.buffer().get_pixel(1, 1), Some((200, 150, 100, 50)));
        canvas.write_pixel_rgba(4, 1, 200, 150, 100, 50);
        assert_eq!(lit_pixels(&canvas), vec![(1, 1)]);
    }
}
