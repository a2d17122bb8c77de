//! WS2812 strip driver on an RP2040 PIO state machine.
//!
//! The state machine autopulls 8 bits at a time from the top of each FIFO
//! word, which is exactly the word layout `FrameBuffer::commit` produces: one
//! colour channel per word, in the most significant byte.

use digit_matrix::LedStripDriver;
use fugit::HertzU32;
use rp_pico::hal::pio::{
    Buffers, InstallError, PIO, PIOBuilder, PIOExt, PinDir, Running, ShiftDirection,
    StateMachine, StateMachineIndex, Tx, UninitStateMachine,
};

/// Data rate of the WS2812 line.
pub const WS2812_BIT_RATE_HZ: u32 = 800_000;

// Bit timing in PIO cycles: low tail, high head, data-dependent middle.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// Assembles the WS2812 bit-banging program.
///
/// Side-set drives the data pin: every bit starts high for `T1` cycles, stays
/// high for `T2` more when the bit is 1, and ends low for `T3`.
fn ws2812_program() -> pio::Program<{ pio::RP2040_MAX_PROGRAM_SIZE }> {
    let side_set = pio::SideSet::new(false, 1, false);
    let mut a = pio::Assembler::new_with_side_set(side_set);

    let mut wrap_target = a.label();
    let mut wrap_source = a.label();
    let mut do_zero = a.label();

    a.bind(&mut wrap_target);
    a.out_with_delay_and_side_set(pio::OutDestination::X, 1, T3 - 1, 0);
    a.jmp_with_delay_and_side_set(pio::JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    a.jmp_with_delay_and_side_set(pio::JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    a.bind(&mut do_zero);
    a.nop_with_delay_and_side_set(T2 - 1, 0);
    a.bind(&mut wrap_source);

    a.assemble_with_wrap(wrap_source, wrap_target)
}

/// Splits the system clock into the PIO clock divisor for one WS2812 bit.
fn clock_divisor(clock_freq: HertzU32) -> (u16, u8) {
    let bit_freq = WS2812_BIT_RATE_HZ * CYCLES_PER_BIT;
    let sys = clock_freq.to_Hz();
    let int = sys / bit_freq;
    let frac = ((sys % bit_freq) * 256) / bit_freq;
    (int as u16, frac as u8)
}

/// Addressable LED strip on one PIO state machine.
pub struct PioStrip<P: PIOExt, SM: StateMachineIndex> {
    tx: Tx<(P, SM)>,
    _sm: StateMachine<(P, SM), Running>,
}

impl<P: PIOExt, SM: StateMachineIndex> PioStrip<P, SM> {
    /// Installs the WS2812 program and starts `sm` driving GPIO `pin_id`.
    ///
    /// The pin must already be switched to the PIO function.
    pub fn new(
        pin_id: u8,
        pio: &mut PIO<P>,
        sm: UninitStateMachine<(P, SM)>,
        clock_freq: HertzU32,
    ) -> Result<Self, InstallError> {
        let installed = pio.install(&ws2812_program())?;
        let (int, frac) = clock_divisor(clock_freq);

        let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
            .buffers(Buffers::OnlyTx)
            .side_set_pin_base(pin_id)
            .out_shift_direction(ShiftDirection::Left)
            .autopull(true)
            .pull_threshold(8)
            .clock_divisor_fixed_point(int, frac)
            .build(sm);
        sm.set_pindirs([(pin_id, PinDir::Output)]);

        Ok(Self {
            tx,
            _sm: sm.start(),
        })
    }
}

impl<P: PIOExt, SM: StateMachineIndex> LedStripDriver for PioStrip<P, SM> {
    fn write(&mut self, word: u32) {
        // Busy-wait until the FIFO has room.
        while !self.tx.write(word) {
            cortex_m::asm::nop();
        }
    }
}
