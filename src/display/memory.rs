use super::{Frame, Surface, SurfaceError};
use crate::raster::Canvas;

/// Headless surface: presenting copies the buffer into memory
pub struct MemorySurface {
    canvas: Canvas,
    presented: Vec<u8>,
    frames_presented: u64,
    frames_released: u64,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            presented: Vec::new(),
            frames_presented: 0,
            frames_released: 0,
        }
    }

    /// Bytes of the last presented frame (empty before the first present)
    pub fn presented(&self) -> &[u8] {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn frames_released(&self) -> u64 {
        self.frames_released
    }
}

impl Surface for MemorySurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn acquire(&mut self) -> Frame<'_> {
        Frame::new(&mut self.canvas, &mut self.frames_released)
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presented.clear();
        self.presented.extend_from_slice(self.canvas.buffer().as_bytes());
        self.frames_presented += 1;
        log::debug!("presented frame {}", self.frames_presented);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_frame_is_released_on_drop() {
        let mut surface = MemorySurface::new(8, 8);
        {
            let mut frame = surface.acquire();
            assert_eq!(frame.pitch(), 32);
            frame.draw_line(0, 0, 7, 7);
        }
        assert_eq!(surface.frames_released(), 1);
        surface.present().unwrap();
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test_log::test]
    fn test_present_copies_buffer() {
        let mut surface = MemorySurface::new(4, 2);
        assert!(surface.presented().is_empty());

        let mut frame = surface.acquire();
        frame.set_color(255, 0, 0, 255);
        frame.write_pixel(1, 1);
        drop(frame);
        surface.present().unwrap();

        let offset = 4 * 4 + 4;
        assert_eq!(&surface.presented()[offset..offset + 4], &[0, 0, 255, 255]);
        assert_eq!(surface.presented().len(), 4 * 2 * 4);
    }

    #[test_log::test]
    fn test_colour_survives_between_frames() {
        let mut surface = MemorySurface::new(4, 4);
        surface.acquire().set_color(10, 20, 30, 255);
        surface.present().unwrap();

        let mut frame = surface.acquire();
        frame.clear_default();
        frame.write_pixel(0, 0);
        assert_eq!(frame.buffer().get_pixel(0, 0), Some((10, 20, 30, 255)));
    }

    #[test]
    fn test_dimensions_are_fixed() {
        let mut surface = MemorySurface::new(320, 200);
        assert_eq!(surface.dimensions(), (320, 200));
        surface.acquire().clear(1, 2, 3, 255);
        assert_eq!(surface.dimensions(), (320, 200));
    }
}
