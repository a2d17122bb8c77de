//! Per-button edge debouncing against a monotonic clock.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::Button;

/// Filters bouncing edges, one timestamp slot per [`Button`].
///
/// Holds no references and never allocates, so `accept` is safe to call
/// from an interrupt handler.
#[derive(Debug, Clone)]
pub struct Debouncer<I: TimeInstant> {
    last_accepted: [Option<I>; 2],
    window_ms: u64,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer that requires strictly more than `window_ms`
    /// between accepted edges of the same button.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            last_accepted: [None, None],
            window_ms,
        }
    }

    /// Decides whether an edge of `button` at `now` is genuine.
    ///
    /// The first edge of each button is always accepted. On acceptance `now`
    /// becomes the button's reference point; a rejected edge leaves the
    /// state untouched.
    pub fn accept(&mut self, button: Button, now: I) -> bool {
        let slot = &mut self.last_accepted[button.slot()];

        let accepted = match *slot {
            None => true,
            Some(last) => now.duration_since(last).as_millis() > self.window_ms,
        };

        if accepted {
            *slot = Some(now);
        }
        accepted
    }

    /// Returns the instant of the last accepted edge of `button`.
    pub fn last_accepted(&self, button: Button) -> Option<I> {
        self.last_accepted[button.slot()]
    }

    /// Returns the debounce window in milliseconds.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Forgets all timestamps; the next edge of each button is accepted.
    pub fn reset(&mut self) {
        self.last_accepted = [None, None];
    }
}
