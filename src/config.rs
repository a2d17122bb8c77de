//! Compile-time configuration shared by the controller and the firmware.

use crate::frame::Pixel;

/// Minimum spacing between two accepted edges of the same button (ms).
///
/// An edge is accepted only when strictly more than this has elapsed since
/// the last accepted edge.
pub const DEBOUNCE_MS: u64 = 200;

/// Period of the indicator blink timer (ms). Five toggles per second.
pub const BLINK_PERIOD_MS: u64 = 200;

/// Side length of the square pixel matrix.
pub const MATRIX_SIZE: usize = 5;

/// Number of addressable LEDs on the strip.
pub const LED_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Colour of lit glyph pixels.
pub const GLYPH_COLOR: Pixel = Pixel::new(0, 0, 255);
