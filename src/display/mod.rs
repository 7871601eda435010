mod config;
mod error;
mod memory;
#[cfg(feature = "sdl")]
mod sdl;

pub use config::ScreenConfig;
pub use error::SurfaceError;
pub use memory::MemorySurface;
#[cfg(feature = "sdl")]
pub use sdl::{InputEvent, SdlScreen, SdlWindow};

use std::ops::{Deref, DerefMut};

use crate::raster::Canvas;

/// Something that owns a window (or stand-in) and a canvas to draw frames into
///
/// A frame is drawn through the guard returned by [`Surface::acquire`]. The
/// guard borrows the surface mutably, so it must be dropped before
/// [`Surface::present`] can run: the backend never reads a buffer that is
/// still open for writes.
pub trait Surface {
    /// Buffer size in pixels, fixed for the surface's lifetime
    fn dimensions(&self) -> (u32, u32);

    /// Open the pixel buffer for writing until the returned guard drops
    fn acquire(&mut self) -> Frame<'_>;

    /// Hand the last released frame to the display
    fn present(&mut self) -> Result<(), SurfaceError>;
}

/// Exclusive write access to a surface's canvas for one frame
pub struct Frame<'a> {
    canvas: &'a mut Canvas,
    released: &'a mut u64,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas, released: &'a mut u64) -> Self {
        Self { canvas, released }
    }

    /// Bytes per row of the underlying buffer
    pub fn pitch(&self) -> usize {
        self.canvas.buffer().pitch()
    }
}

impl Deref for Frame<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        &*self.canvas
    }
}

impl DerefMut for Frame<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        &mut *self.canvas
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        *self.released += 1;
        log::trace!("frame {} released", *self.released);
    }
}
