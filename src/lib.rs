//! softscreen: a minimal software rasterizer
//!
//! A BGRA [`PixelBuffer`](raster::PixelBuffer) and the scan-conversion
//! algorithms that draw into it (Bresenham lines, midpoint circles, triangle
//! outlines and scanline-filled triangles), wrapped in a [`Canvas`] that
//! carries the current draw colour. The [`display`] module hands finished
//! frames to a window (SDL2, behind the `sdl` feature) or to memory.
//!
//! ```
//! use softscreen::display::{MemorySurface, Surface};
//!
//! let mut surface = MemorySurface::new(64, 48);
//! {
//!     let mut frame = surface.acquire();
//!     frame.clear_default();
//!     frame.set_color(230, 210, 90, 255);
//!     frame.draw_line(0, 0, 63, 47);
//!     frame.fill_triangle((10, 5), (40, 12), (20, 40));
//! }
//! surface.present().unwrap();
//! ```

pub mod demos;
pub mod display;
pub mod raster;
pub mod util;

pub use raster::{Canvas, DrawColor, PixelBuffer};
