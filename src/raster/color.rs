//! Current draw colour
//!
//! Red, green and blue saturate at 255 when set. Alpha is kept exactly as
//! given; only its low byte reaches the pixel buffer.

/// The "current colour" used by every draw call that takes no explicit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawColor {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u32,
}

impl DrawColor {
    /// Opaque white
    pub const WHITE: Self = Self {
        red: 255,
        green: 255,
        blue: 255,
        alpha: 255,
    };

    /// Build a colour, clamping r, g, b to 255 and storing alpha verbatim
    pub fn new(red: u32, green: u32, blue: u32, alpha: u32) -> Self {
        Self {
            red: saturate(red),
            green: saturate(green),
            blue: saturate(blue),
            alpha,
        }
    }

    /// Opaque colour from r, g, b
    pub fn rgb(red: u32, green: u32, blue: u32) -> Self {
        Self::new(red, green, blue, 255)
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Alpha as it was set (may exceed 255)
    #[inline]
    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    /// Pixel bytes in buffer order (B, G, R, A)
    #[inline]
    pub fn bgra(&self) -> [u8; 4] {
        // Low byte only: a stored alpha of 256 writes 0
        [self.blue, self.green, self.red, self.alpha as u8]
    }
}

impl Default for DrawColor {
    fn default() -> Self {
        Self::WHITE
    }
}

#[inline]
fn saturate(channel: u32) -> u8 {
    channel.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_saturate() {
        let c = DrawColor::new(300, 256, 1000, 255);
        assert_eq!((c.red(), c.green(), c.blue()), (255, 255, 255));
    }

    #[test]
    fn test_alpha_is_not_clamped() {
        let c = DrawColor::new(10, 20, 30, 300);
        assert_eq!(c.alpha(), 300);
        assert_eq!(c.bgra(), [30, 20, 10, 300u32 as u8]);
    }

    #[test]
    fn test_same_values_give_same_state() {
        assert_eq!(DrawColor::new(1, 2, 3, 4), DrawColor::new(1, 2, 3, 4));
        assert_eq!(DrawColor::new(999, 0, 0, 255), DrawColor::rgb(255, 0, 0));
    }
}
