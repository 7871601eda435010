mod clock;
mod mandelbrot;
mod shapes;

pub use clock::Clock;
pub use mandelbrot::Mandelbrot;
pub use shapes::Shapes;

use crate::raster::{Canvas, BLANK};

/// Trait for all demo programs
pub trait Demo {
    /// Advance demo state by `dt` seconds (called each frame)
    fn update(&mut self, dt: f32);

    /// Draw one frame onto the canvas
    fn render(&self, canvas: &mut Canvas);

    /// Demo name for the command line and logging
    fn name(&self) -> &str;

    /// Colour the frame is cleared to before `render` (default: opaque black)
    fn clear_color(&self) -> (u8, u8, u8, u8) {
        BLANK
    }
}

/// Names accepted by [`by_name`], in cycling order
pub const NAMES: [&str; 3] = ["clock", "shapes", "mandelbrot"];

/// Build a demo from its command-line name
pub fn by_name(name: &str) -> Option<Box<dyn Demo>> {
    match name.to_ascii_lowercase().as_str() {
        "clock" => Some(Box::new(Clock::new())),
        "shapes" => Some(Box::new(Shapes::new())),
        "mandelbrot" => Some(Box::new(Mandelbrot::new())),
        _ => None,
    }
}
