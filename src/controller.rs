//! The two halves of the display controller.
//!
//! [`ButtonDispatcher`] runs in the button interrupt: debounce, counter
//! transition, redraw request. [`DisplayController`] runs in the main loop:
//! poll the redraw request, render, transmit. They meet only in the shared
//! [`DisplayState`].

use crate::config::GLYPH_COLOR;
use crate::debounce::Debouncer;
use crate::frame::{FrameBuffer, LedStripDriver, Pixel};
use crate::glyph;
use crate::state::{DisplayState, Transition};
use crate::time::TimeInstant;
use crate::types::{Button, Digit};

/// What a single button edge amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge arrived inside the debounce window and was dropped.
    Bounced,

    /// Edge was accepted but the digit is already at the bound.
    Saturated(Digit),

    /// Edge moved the digit; a redraw is pending.
    Changed { from: Digit, to: Digit },
}

impl From<Transition> for EdgeOutcome {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Changed { from, to } => EdgeOutcome::Changed { from, to },
            Transition::Saturated(at) => EdgeOutcome::Saturated(at),
        }
    }
}

/// Which GPIO number belongs to which button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMap {
    pub increment_pin: u8,
    pub decrement_pin: u8,
}

impl ButtonMap {
    /// Creates a map; the two pins must differ.
    pub const fn new(increment_pin: u8, decrement_pin: u8) -> Self {
        assert!(increment_pin != decrement_pin);
        Self {
            increment_pin,
            decrement_pin,
        }
    }

    /// Resolves a pin number to its button.
    pub fn button(&self, pin: u8) -> Option<Button> {
        if pin == self.increment_pin {
            Some(Button::Increment)
        } else if pin == self.decrement_pin {
            Some(Button::Decrement)
        } else {
            None
        }
    }
}

/// Interrupt-side handler shared by both button lines.
///
/// Owns the debounce timestamps, which nothing else reads, and writes the
/// counter through the shared [`DisplayState`]. Never blocks and never
/// touches the LED strip.
pub struct ButtonDispatcher<'s, I: TimeInstant> {
    debouncer: Debouncer<I>,
    map: ButtonMap,
    state: &'s DisplayState,
}

impl<'s, I: TimeInstant> ButtonDispatcher<'s, I> {
    /// Creates a dispatcher with a fresh debouncer of `debounce_ms`.
    pub fn new(state: &'s DisplayState, map: ButtonMap, debounce_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
            map,
            state,
        }
    }

    /// Handles a falling edge reported for GPIO `pin`.
    ///
    /// Returns `None` for pins that are not mapped to a button.
    pub fn on_pin_edge(&mut self, pin: u8, now: I) -> Option<EdgeOutcome> {
        let button = self.map.button(pin)?;
        Some(self.on_edge(button, now))
    }

    /// Handles a falling edge of `button`.
    ///
    /// The debounce timestamp is refreshed on every accepted edge, including
    /// one that finds the digit saturated.
    pub fn on_edge(&mut self, button: Button, now: I) -> EdgeOutcome {
        if !self.debouncer.accept(button, now) {
            return EdgeOutcome::Bounced;
        }
        self.state.apply(button).into()
    }

    /// The debouncer, for diagnostics.
    pub fn debouncer(&self) -> &Debouncer<I> {
        &self.debouncer
    }
}

/// Main-loop side: keeps the strip in sync with the shared digit.
pub struct DisplayController<'s, D: LedStripDriver> {
    frame: FrameBuffer,
    driver: D,
    state: &'s DisplayState,
    color: Pixel,
}

impl<'s, D: LedStripDriver> DisplayController<'s, D> {
    /// Creates a controller drawing in [`GLYPH_COLOR`].
    pub fn new(driver: D, state: &'s DisplayState) -> Self {
        Self::with_color(driver, state, GLYPH_COLOR)
    }

    /// Creates a controller drawing in `color`.
    pub fn with_color(driver: D, state: &'s DisplayState, color: Pixel) -> Self {
        Self {
            frame: FrameBuffer::new(),
            driver,
            state,
            color,
        }
    }

    /// Draws the current digit unconditionally.
    ///
    /// Called once at boot. A pending redraw is consumed; otherwise the
    /// current digit is drawn without touching the shared redraw request.
    pub fn start(&mut self) -> Digit {
        if let Some(digit) = self.service() {
            return digit;
        }

        let digit = self.state.digit();
        self.draw(digit);
        digit
    }

    /// Redraws if the digit changed since the last draw.
    ///
    /// Returns the digit drawn, or `None` if the display was current.
    pub fn service(&mut self) -> Option<Digit> {
        let redraw = self.state.begin_redraw()?;
        self.draw(redraw.digit());
        self.state.finish_redraw(redraw);
        Some(redraw.digit())
    }

    /// Services the display forever.
    ///
    /// `each_pass` sees the result of every [`service`](Self::service) call,
    /// which is where the caller hooks in logging or housekeeping.
    pub fn run<F>(&mut self, mut each_pass: F) -> !
    where
        F: FnMut(Option<Digit>),
    {
        loop {
            let drawn = self.service();
            each_pass(drawn);
        }
    }

    fn draw(&mut self, digit: Digit) {
        glyph::render_with(digit, &mut self.frame, self.color);
        self.frame.commit(&mut self.driver);
    }

    /// The last rendered frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Returns a reference to the strip driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
