//! Frame buffer for the pixel matrix and the strip driver it is handed to.
//!
//! Pixels are stored in physical strip order. [`FrameBuffer::commit`] streams
//! them to an [`LedStripDriver`] as one 32-bit word per colour channel, green
//! first, with the channel value in the most significant byte.

use crate::config::LED_COUNT;
use palette::Srgb;

/// An 8-bit-per-channel RGB pixel.
pub type Pixel = Srgb<u8>;

/// A pixel with every channel off.
pub const PIXEL_OFF: Pixel = Pixel::new(0, 0, 0);

/// Trait for abstracting the addressable LED strip hardware.
///
/// Implement this for the transport that serialises words onto the data
/// line (PIO state machine, SPI, bit-banged GPIO, etc.).
pub trait LedStripDriver {
    /// Transmits one channel word.
    ///
    /// Blocks until the transport has accepted the word. Transport errors
    /// are the implementation's concern; this method cannot fail.
    fn write(&mut self, word: u32);
}

impl<D: LedStripDriver + ?Sized> LedStripDriver for &mut D {
    fn write(&mut self, word: u32) {
        (**self).write(word);
    }
}

/// Ordered store of the matrix pixels, indexed by physical position.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pixels: [Pixel; LED_COUNT],
}

impl FrameBuffer {
    /// Creates a buffer with every pixel off.
    pub const fn new() -> Self {
        Self {
            pixels: [PIXEL_OFF; LED_COUNT],
        }
    }

    /// Sets the pixel at physical `index`.
    ///
    /// # Panics
    /// If `index` is not below [`LED_COUNT`].
    #[inline]
    pub fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) {
        self.pixels[index] = Pixel::new(red, green, blue);
    }

    /// Sets the pixel at physical `index` to `color`.
    ///
    /// # Panics
    /// If `index` is not below [`LED_COUNT`].
    #[inline]
    pub fn set_color(&mut self, index: usize, color: Pixel) {
        self.pixels[index] = color;
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [PIXEL_OFF; LED_COUNT];
    }

    /// Returns the pixel at physical `index`, if in range.
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// All pixels in physical order.
    pub fn pixels(&self) -> &[Pixel; LED_COUNT] {
        &self.pixels
    }

    /// Number of pixels with any channel on.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p != PIXEL_OFF).count()
    }

    /// Streams the frame to `driver` in physical order, GRB per pixel.
    ///
    /// Returns after the driver has accepted all `3 * LED_COUNT` words.
    pub fn commit<D: LedStripDriver>(&self, driver: &mut D) {
        for pixel in &self.pixels {
            driver.write(Self::encode_word(pixel.green));
            driver.write(Self::encode_word(pixel.red));
            driver.write(Self::encode_word(pixel.blue));
        }
    }

    /// Places a channel value in the top byte of a transmit word.
    #[inline]
    pub const fn encode_word(channel: u8) -> u32 {
        (channel as u32) << 24
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
