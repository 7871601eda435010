use super::DEFAULT_HEIGHT;
use super::DEFAULT_WIDTH;

/// Bytes per BGRA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Colour a freshly allocated buffer holds: opaque black
pub const BLANK: (u8, u8, u8, u8) = (0, 0, 0, 255);

// ============================================================================
// Utility Functions
// ============================================================================

/// Write BGRA pixel to slice (ARGB8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], bgra: [u8; 4]) {
    dest[0] = bgra[0]; // B
    dest[1] = bgra[1]; // G
    dest[2] = bgra[2]; // R
    dest[3] = bgra[3]; // A
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// BGRA pixel buffer for software rendering
///
/// Pixel (x, y) lives at byte offset `width * 4 * y + x * 4`. The buffer
/// remembers whether it is still blank (opaque black, untouched since
/// allocation or since the last black clear) so that a black clear can be
/// skipped without ever leaving stale pixels behind.
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    blank: bool,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (640x480)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new blank pixel buffer with custom resolution
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut buffer = Self {
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            width,
            height,
            blank: false,
        };
        let (r, g, b, a) = BLANK;
        buffer.fill(r, g, b, a);
        buffer.blank = true;
        buffer
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// True while nothing has been written since allocation or the last black clear
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        self.pitch() * y as usize + x as usize * BYTES_PER_PIXEL
    }

    /// Clear to a uniform colour
    ///
    /// Clearing to opaque black is a no-op while the buffer is blank.
    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        if (r, g, b, a) == BLANK {
            if self.blank {
                return;
            }
            self.fill(r, g, b, a);
            self.blank = true;
            return;
        }
        self.fill(r, g, b, a);
        self.blank = false;
    }

    /// Write every pixel with a u32 pattern
    fn fill(&mut self, r: u8, g: u8, b: u8, a: u8) {
        let pixel = u32::from_ne_bytes([b, g, r, a]);

        // Safety: pixels.len() is always divisible by 4 (width * height * 4).
        // We use write_unaligned to avoid assuming alignment of Vec<u8>.
        let ptr = self.pixels.as_mut_ptr() as *mut u32;
        let len = self.pixels.len() / BYTES_PER_PIXEL;

        for i in 0..len {
            // Safety: i < len keeps every write inside the allocation
            unsafe {
                ptr.add(i).write_unaligned(pixel);
            }
        }
    }

    /// Set a single pixel (bounds checked, out of range is a silent no-op)
    #[inline]
    pub fn write_rgba(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        self.write_bgra(x, y, [b, g, r, a]);
    }

    /// Set a single pixel from bytes already in buffer order
    #[inline]
    pub fn write_bgra(&mut self, x: i32, y: i32, bgra: [u8; 4]) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + BYTES_PER_PIXEL], bgra);
            self.blank = false;
        }
    }

    /// Read all 4 channels of a pixel (bounds checked)
    /// Returns (r, g, b, a) or None if out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<(u8, u8, u8, u8)> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some((
                self.pixels[idx + 2], // R
                self.pixels[idx + 1], // G
                self.pixels[idx],     // B
                self.pixels[idx + 3], // A
            ))
        } else {
            None
        }
    }

    /// Fill columns `x_start..x_end` of row `y` without per-pixel bounds checks
    ///
    /// Computes the row offset once, then advances 4 bytes per column.
    ///
    /// # Safety
    /// Caller must guarantee `y < height` and `x_start <= x_end <= width`.
    #[inline]
    pub unsafe fn fill_span_unchecked(&mut self, y: u32, x_start: u32, x_end: u32, bgra: [u8; 4]) {
        debug_assert!(y < self.height);
        debug_assert!(x_start <= x_end && x_end <= self.width);
        if x_start == x_end {
            return;
        }
        let mut idx = self.pixel_index(x_start, y);
        for _ in x_start..x_end {
            *self.pixels.get_unchecked_mut(idx) = bgra[0];
            *self.pixels.get_unchecked_mut(idx + 1) = bgra[1];
            *self.pixels.get_unchecked_mut(idx + 2) = bgra[2];
            *self.pixels.get_unchecked_mut(idx + 3) = bgra[3];
            idx += BYTES_PER_PIXEL;
        }
        self.blank = false;
    }

    /// Get raw pixel data for texture upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Get mutable raw pixel data for whole-frame effects
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.blank = false;
        &mut self.pixels
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
