use digit_matrix::IndicatorLed;
use embedded_hal::digital::{OutputPin, PinState};

/// Three-line indicator LED driven straight from GPIO outputs
///
/// This wrapper implements the IndicatorLed trait required by the blinker,
/// handling common anode/cathode logic.
pub struct GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Create a new indicator
    ///
    /// # Arguments
    /// * `red` - output pin for the red line
    /// * `green` - output pin for the green line
    /// * `blue` - output pin for the blue line
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    fn level(&self, on: bool) -> PinState {
        PinState::from(on != self.common_anode)
    }
}

impl<R, G, B> IndicatorLed for GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn set_lines(&mut self, red: bool, green: bool, blue: bool) {
        let (red, green, blue) = (self.level(red), self.level(green), self.level(blue));

        // RP2040 SIO writes are infallible
        let _ = self.red.set_state(red);
        let _ = self.green.set_state(green);
        let _ = self.blue.set_state(blue);
    }
}
