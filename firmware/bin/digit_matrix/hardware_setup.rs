use digit_matrix::{BLINK_PERIOD_MS, ButtonMap};
use digit_matrix_firmware::indicator::GpioIndicator;
use digit_matrix_firmware::strip::PioStrip;
use fugit::MicrosDurationU32;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{
        FunctionPio0, FunctionSioInput, FunctionSioOutput, Interrupt::EdgeLow, Pin, PullDown,
        PullUp,
        bank0::{Gpio5, Gpio6, Gpio11, Gpio12, Gpio13},
    },
    pac,
    pio::{PIOExt, SM0},
    timer::{Alarm, Alarm0},
    watchdog::Watchdog,
};

/// GPIO of button A (increment).
pub const INCREMENT_PIN: u8 = 5;
/// GPIO of button B (decrement).
pub const DECREMENT_PIN: u8 = 6;
/// GPIO of the WS2812 data line.
pub const STRIP_PIN: u8 = 7;

pub const BUTTON_MAP: ButtonMap = ButtonMap::new(INCREMENT_PIN, DECREMENT_PIN);

/// Blink timer period in alarm units.
pub const BLINK_PERIOD: MicrosDurationU32 = MicrosDurationU32::millis(BLINK_PERIOD_MS as u32);

pub type Strip = PioStrip<pac::PIO0, SM0>;

pub type Indicator = GpioIndicator<
    Pin<Gpio13, FunctionSioOutput, PullDown>,
    Pin<Gpio12, FunctionSioOutput, PullDown>,
    Pin<Gpio11, FunctionSioOutput, PullDown>,
>;

/// The two button inputs, both armed for falling-edge interrupts.
pub struct Buttons {
    increment: Pin<Gpio5, FunctionSioInput, PullUp>,
    decrement: Pin<Gpio6, FunctionSioInput, PullUp>,
}

impl Buttons {
    /// Acknowledges pending falling edges and returns the GPIO numbers that fired.
    pub fn take_fired(&mut self) -> [Option<u8>; 2] {
        let mut fired = [None, None];
        if self.increment.interrupt_status(EdgeLow) {
            self.increment.clear_interrupt(EdgeLow);
            fired[0] = Some(self.increment.id().num);
        }
        if self.decrement.interrupt_status(EdgeLow) {
            self.decrement.clear_interrupt(EdgeLow);
            fired[1] = Some(self.decrement.id().num);
        }
        fired
    }
}

/// Hardware context containing all initialized peripherals
pub struct HardwareContext {
    pub strip: Strip,
    pub indicator: Indicator,
    pub buttons: Buttons,
    pub timer: Timer,
    pub blink_alarm: Alarm0,
}

/// Initialize all hardware peripherals
///
/// Any failure here is fatal: the board cannot run without its strip or timer.
pub fn init_hardware() -> HardwareContext {
    let mut pac = pac::Peripherals::take().expect("peripherals already taken");

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let Ok(clocks) = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) else {
        panic!("clock initialization failed");
    };

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Indicator LED lines
    let indicator = GpioIndicator::new(
        pins.gpio13.into_push_pull_output(),
        pins.gpio12.into_push_pull_output(),
        pins.gpio11.into_push_pull_output(),
        false,
    );

    // Buttons: active-low with internal pull-ups, one shared bank interrupt
    let increment = pins.gpio5.into_pull_up_input();
    let decrement = pins.gpio6.into_pull_up_input();
    increment.set_interrupt_enabled(EdgeLow, true);
    decrement.set_interrupt_enabled(EdgeLow, true);

    // WS2812 matrix data line on PIO0
    let data_pin = pins.gpio7.into_function::<FunctionPio0>();
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    debug_assert_eq!(data_pin.id().num, STRIP_PIN);
    let strip = PioStrip::new(
        STRIP_PIN,
        &mut pio,
        sm0,
        clocks.system_clock.freq(),
    )
    .expect("no room for the WS2812 program in PIO0");

    // Blink timer, first period starts now
    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut blink_alarm = timer.alarm_0().expect("alarm 0 already claimed");
    blink_alarm
        .schedule(BLINK_PERIOD)
        .expect("blink period out of alarm range");
    blink_alarm.enable_interrupt();

    HardwareContext {
        strip,
        indicator,
        buttons: Buttons {
            increment,
            decrement,
        },
        timer,
        blink_alarm,
    }
}

/// Unmask the button and blink interrupts in the NVIC
pub fn enable_interrupts() {
    // SAFETY: both handlers only touch state parked in critical-section
    // mutexes, which is installed before this is called.
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }
}
