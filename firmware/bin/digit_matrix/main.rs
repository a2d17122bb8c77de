#![no_std]
#![no_main]

mod hardware_setup;

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::pac::interrupt;
use rp_pico::hal::timer::{Alarm, Alarm0};
use rtt_target::{rprintln, rtt_init_print};

use digit_matrix::{
    Blinker, ButtonDispatcher, Channel, DEBOUNCE_MS, DisplayController, DisplayState,
    EdgeOutcome, TimeSource,
};
use digit_matrix_firmware::time::{HardwareTimer, Instant};

use hardware_setup::{BLINK_PERIOD, BUTTON_MAP, Buttons, Indicator};

/// Edge outcomes waiting to be logged; newer ones are dropped when full.
const EDGE_LOG_DEPTH: usize = 8;

/// Counter and redraw handoff shared by the button interrupt and the main loop.
static STATE: DisplayState = DisplayState::new();

struct ButtonContext {
    dispatcher: ButtonDispatcher<'static, Instant>,
    buttons: Buttons,
    timer: HardwareTimer,
}

struct BlinkContext {
    blinker: Blinker<Indicator>,
    alarm: Alarm0,
}

static BUTTONS: Mutex<RefCell<Option<ButtonContext>>> = Mutex::new(RefCell::new(None));
static BLINK: Mutex<RefCell<Option<BlinkContext>>> = Mutex::new(RefCell::new(None));
static EDGE_LOG: Mutex<RefCell<Deque<(u8, EdgeOutcome), EDGE_LOG_DEPTH>>> =
    Mutex::new(RefCell::new(Deque::new()));

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Digit Matrix ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();
    rprintln!(
        "Buttons on GPIO{} (+) and GPIO{} (-), matrix on GPIO{}",
        hardware_setup::INCREMENT_PIN,
        hardware_setup::DECREMENT_PIN,
        hardware_setup::STRIP_PIN
    );

    let timer = HardwareTimer::new(hw.timer);
    let mut display = DisplayController::new(hw.strip, &STATE);
    let shown = display.start();
    rprintln!("Showing {}", shown.get());

    critical_section::with(|cs| {
        BUTTONS.borrow(cs).replace(Some(ButtonContext {
            dispatcher: ButtonDispatcher::new(&STATE, BUTTON_MAP, DEBOUNCE_MS),
            buttons: hw.buttons,
            timer,
        }));
        BLINK.borrow(cs).replace(Some(BlinkContext {
            blinker: Blinker::new(hw.indicator, Channel::Red),
            alarm: hw.blink_alarm,
        }));
    });

    hardware_setup::enable_interrupts();
    rprintln!("=== Hardware Ready ===");

    display.run(|drawn| {
        while let Some((pin, outcome)) =
            critical_section::with(|cs| EDGE_LOG.borrow_ref_mut(cs).pop_front())
        {
            log_edge(pin, outcome);
        }
        if let Some(digit) = drawn {
            rprintln!("Showing {}", digit.get());
        }
    })
}

fn log_edge(pin: u8, outcome: EdgeOutcome) {
    match outcome {
        EdgeOutcome::Bounced => rprintln!("GPIO{}: bounce dropped", pin),
        EdgeOutcome::Saturated(at) => rprintln!("GPIO{}: already at {}", pin, at.get()),
        EdgeOutcome::Changed { from, to } => {
            rprintln!("GPIO{}: {} -> {}", pin, from.get(), to.get())
        }
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        let mut slot = BUTTONS.borrow_ref_mut(cs);
        let Some(ctx) = slot.as_mut() else {
            return;
        };

        let now = ctx.timer.now();
        let mut log = EDGE_LOG.borrow_ref_mut(cs);
        for pin in ctx.buttons.take_fired().into_iter().flatten() {
            if let Some(outcome) = ctx.dispatcher.on_pin_edge(pin, now) {
                // Dropped when the main loop falls behind.
                let _ = log.push_back((pin, outcome));
            }
        }
    });
}

#[interrupt]
fn TIMER_IRQ_0() {
    critical_section::with(|cs| {
        let mut slot = BLINK.borrow_ref_mut(cs);
        let Some(ctx) = slot.as_mut() else {
            return;
        };

        ctx.alarm.clear_interrupt();
        // The period is a compile-time constant well inside the alarm range.
        let _ = ctx.alarm.schedule(BLINK_PERIOD);
        ctx.blinker.tick();
    });
}
