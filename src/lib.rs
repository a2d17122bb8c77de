#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DisplayState`**: The shared counter and redraw flag, the only state both contexts see
//! - **`ButtonDispatcher`**: Interrupt-side handler for both buttons (debounce, then counter transition)
//! - **`Debouncer`**: Per-button filter rejecting edges within the debounce window
//! - **`DisplayController`**: Main-loop side that renders and transmits when a redraw is pending
//! - **`FrameBuffer`**: The 25 pixels in physical strip order
//! - **`LedStripDriver`**: Trait to implement for your addressable LED transport
//! - **`Blinker`**: Independent periodic toggle of one indicator line
//! - **`IndicatorLed`**: Trait to implement for your three-line indicator LED
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Pixels are `Srgb<u8>`. Glyphs are drawn in [`GLYPH_COLOR`] unless a
//! controller is built with another colour.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod config;
pub mod time;
pub mod types;
pub mod debounce;
pub mod state;
pub mod frame;
pub mod glyph;
pub mod blinker;
pub mod controller;

pub use blinker::{Blinker, IndicatorLed};
pub use config::{BLINK_PERIOD_MS, DEBOUNCE_MS, GLYPH_COLOR, LED_COUNT, MATRIX_SIZE};
pub use controller::{ButtonDispatcher, ButtonMap, DisplayController, EdgeOutcome};
pub use debounce::Debouncer;
pub use frame::{FrameBuffer, LedStripDriver, PIXEL_OFF, Pixel};
pub use glyph::{GLYPHS, Glyph, lit_indices, physical_index, render, render_with};
pub use state::{DisplayState, Redraw, Transition};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Button, Channel, Digit, DigitError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_bounds() {
        assert_eq!(Digit::new(9), Some(Digit::MAX));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::MAX.increment(), None);
        assert_eq!(Digit::MIN.decrement(), None);
        assert_eq!(Digit::try_from(42), Err(DigitError::OutOfRange(42)));
    }
}
