//! Shared test infrastructure for digit-matrix integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use digit_matrix::{IndicatorLed, LED_COUNT, LedStripDriver, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Words in one committed frame
pub const FRAME_WORDS: usize = 3 * LED_COUNT;

/// Mock strip that records every word written, keeping the last two frames
pub struct MockStrip {
    words: heapless::Vec<u32, { 2 * FRAME_WORDS }>,
    total_words: usize,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            words: heapless::Vec::new(),
            total_words: 0,
        }
    }

    /// All words ever written, including dropped history
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of complete frames transmitted
    pub fn frames_sent(&self) -> usize {
        self.total_words / FRAME_WORDS
    }

    /// The words of the most recent complete frame
    pub fn last_frame(&self) -> &[u32] {
        let complete = self.words.len() - self.words.len() % FRAME_WORDS;
        &self.words[complete - FRAME_WORDS..complete]
    }

    /// Physical indices whose blue word is non-zero in the last frame
    pub fn lit_blue(&self) -> heapless::Vec<u8, LED_COUNT> {
        let mut lit = heapless::Vec::new();
        for (index, pixel) in self.last_frame().chunks(3).enumerate() {
            if pixel[2] != 0 {
                let _ = lit.push(index as u8);
            }
        }
        lit
    }
}

impl LedStripDriver for MockStrip {
    fn write(&mut self, word: u32) {
        if self.words.is_full() {
            // Keep only the newest frame once both slots are used.
            let newest: heapless::Vec<u32, { 2 * FRAME_WORDS }> =
                self.words[FRAME_WORDS..].iter().copied().collect();
            self.words = newest;
        }
        let _ = self.words.push(word);
        self.total_words += 1;
    }
}

// ============================================================================
// Mock Indicator LED
// ============================================================================

/// Mock indicator that records every line update
pub struct MockIndicator {
    history: heapless::Vec<(bool, bool, bool), 64>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_lines(&self) -> Option<(bool, bool, bool)> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[(bool, bool, bool)] {
        &self.history
    }
}

impl IndicatorLed for MockIndicator {
    fn set_lines(&mut self, red: bool, green: bool, blue: bool) {
        let _ = self.history.push((red, green, blue));
    }
}
