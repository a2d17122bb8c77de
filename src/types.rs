//! Core value types: buttons, the bounded digit and indicator channels.

/// One of the two momentary buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Raises the displayed digit ("A" on the board).
    Increment,

    /// Lowers the displayed digit ("B" on the board).
    Decrement,
}

impl Button {
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        match self {
            Button::Increment => 0,
            Button::Decrement => 1,
        }
    }
}

/// A displayable digit, always within `0..=9`.
///
/// The saturating [`increment`](Digit::increment) and
/// [`decrement`](Digit::decrement) are the only way the counter moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Smallest digit.
    pub const MIN: Digit = Digit(0);

    /// Largest digit.
    pub const MAX: Digit = Digit(9);

    /// Creates a digit, returning `None` when `value > 9`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next digit, or `None` at the upper bound.
    #[inline]
    pub const fn increment(self) -> Option<Self> {
        Digit::new(self.0 + 1)
    }

    /// Previous digit, or `None` at the lower bound.
    #[inline]
    pub const fn decrement(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(value) => Some(Digit(value)),
            None => None,
        }
    }

    /// Applies the transition belonging to `button`.
    #[inline]
    pub const fn step(self, button: Button) -> Option<Self> {
        match button {
            Button::Increment => self.increment(),
            Button::Decrement => self.decrement(),
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(DigitError::OutOfRange(value))
    }
}

/// Digit construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Value outside `0..=9`.
    OutOfRange(u8),
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange(value) => {
                write!(f, "digit {} is outside the displayable range 0-9", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}

/// One line of the three-line indicator LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}
