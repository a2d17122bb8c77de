//! Periodic indicator blink, independent of the digit display.

use crate::types::Channel;

/// Trait for abstracting the three-line indicator LED.
///
/// Each argument is the level of one colour line. Handle any hardware errors
/// internally - this method cannot fail.
pub trait IndicatorLed {
    /// Drives the three lines.
    fn set_lines(&mut self, red: bool, green: bool, blue: bool);
}

/// Toggles one indicator line each time it is ticked.
///
/// Meant to be owned by a periodic timer interrupt; it shares no state with
/// the display controller.
pub struct Blinker<L: IndicatorLed> {
    led: L,
    channel: Channel,
    lit: bool,
}

impl<L: IndicatorLed> Blinker<L> {
    /// Creates a blinker on `channel`. The LED is untouched until the first tick.
    pub fn new(led: L, channel: Channel) -> Self {
        Self {
            led,
            channel,
            lit: false,
        }
    }

    /// Flips the blink state and drives the lines: the active one follows the
    /// new state, the other two are forced low.
    ///
    /// Returns the new state.
    pub fn tick(&mut self) -> bool {
        self.lit = !self.lit;

        let lit = self.lit;
        match self.channel {
            Channel::Red => self.led.set_lines(lit, false, false),
            Channel::Green => self.led.set_lines(false, lit, false),
            Channel::Blue => self.led.set_lines(false, false, lit),
        }
        lit
    }

    /// Returns true if the active line was driven high by the last tick.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// The line being blinked.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns a reference to the indicator.
    pub fn led(&self) -> &L {
        &self.led
    }
}
