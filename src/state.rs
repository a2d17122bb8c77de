//! The bounded counter and the redraw handoff between interrupt and main loop.
//!
//! [`DisplayState`] is the one object both execution contexts see. The button
//! interrupt is its only writer for the counter and the `requested`
//! generation; the main loop is the only writer of the `drawn` generation.
//! Every field is a single atomic word touched with plain `load`/`store`, so
//! no read can observe a torn update and no compare-and-swap is needed.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use crate::types::{Button, Digit};

/// Result of feeding an accepted edge to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// The digit moved and a redraw was requested.
    Changed { from: Digit, to: Digit },

    /// The digit was already at the bound for this button; nothing changed.
    Saturated(Digit),
}

/// A redraw the main loop has committed to, see [`DisplayState::begin_redraw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw {
    generation: u32,
    digit: Digit,
}

impl Redraw {
    /// Digit to render.
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Request generation this redraw satisfies.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Counter value plus dirty flag, shared between contexts.
///
/// The dirty flag is a pair of generations: each transition bumps
/// `requested`, each finished redraw publishes the generation it observed as
/// `drawn`. The display is stale while they differ, so a transition landing
/// after the main loop sampled the flag but before it cleared it keeps the
/// flag raised.
#[derive(Debug)]
pub struct DisplayState {
    counter: AtomicU8,
    requested: AtomicU32,
    drawn: AtomicU32,
}

impl DisplayState {
    /// Boot state: digit 0, redraw pending.
    pub const fn new() -> Self {
        Self {
            counter: AtomicU8::new(0),
            requested: AtomicU32::new(1),
            drawn: AtomicU32::new(0),
        }
    }

    /// Current digit.
    pub fn digit(&self) -> Digit {
        // Only Digit values are ever stored.
        Digit::new(self.counter.load(Ordering::Relaxed)).unwrap_or(Digit::MAX)
    }

    /// Applies the transition for an accepted `button` edge.
    ///
    /// Must only be called from the single writer context (the button
    /// interrupt).
    pub fn apply(&self, button: Button) -> Transition {
        let from = self.digit();
        match from.step(button) {
            Some(to) => {
                self.counter.store(to.get(), Ordering::Relaxed);
                self.request_redraw();
                Transition::Changed { from, to }
            }
            None => Transition::Saturated(from),
        }
    }

    // Only called from `apply`, so it shares the interrupt's single-writer role.
    fn request_redraw(&self) {
        let next = self.requested.load(Ordering::Relaxed).wrapping_add(1);
        self.requested.store(next, Ordering::Release);
    }

    /// Returns true while a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.requested.load(Ordering::Acquire) != self.drawn.load(Ordering::Relaxed)
    }

    /// Samples the dirty flag; when set, returns the redraw to perform.
    ///
    /// The generation is read before the digit, so the returned digit is at
    /// least as new as the generation it claims to satisfy.
    pub fn begin_redraw(&self) -> Option<Redraw> {
        let generation = self.requested.load(Ordering::Acquire);
        if generation == self.drawn.load(Ordering::Relaxed) {
            return None;
        }

        Some(Redraw {
            generation,
            digit: self.digit(),
        })
    }

    /// Clears the dirty flag for the generation `redraw` covered.
    ///
    /// Requests made after [`begin_redraw`](Self::begin_redraw) sampled the
    /// flag stay pending.
    pub fn finish_redraw(&self, redraw: Redraw) {
        self.drawn.store(redraw.generation, Ordering::Release);
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
