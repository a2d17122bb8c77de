//! Digit glyphs and their mapping onto the serpentine-wired matrix.
//!
//! Glyphs are drawn in logical orientation: row 0 is the top row, column 0
//! the left column. The matrix is mounted rotated by 180 degrees and its strip
//! snakes through the rows, so every logical coordinate goes through
//! [`physical_index`] before it reaches the [`FrameBuffer`].

use heapless::Vec;

use crate::config::{GLYPH_COLOR, LED_COUNT, MATRIX_SIZE};
use crate::frame::{FrameBuffer, Pixel};
use crate::types::Digit;

/// A 5x5 bitmap, one entry per row. Bit 4 is column 0, bit 0 is column 4.
pub type Glyph = [u8; MATRIX_SIZE];

/// Glyphs for digits 0-9.
pub const GLYPHS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b10100, 0b00100, 0b11111], // 1
    [0b11111, 0b00001, 0b11111, 0b10000, 0b11111], // 2
    [0b11111, 0b00001, 0b01111, 0b00001, 0b11111], // 3
    [0b10001, 0b10001, 0b11111, 0b00001, 0b00001], // 4
    [0b11111, 0b10000, 0b11111, 0b00001, 0b11111], // 5
    [0b11111, 0b10000, 0b11111, 0b10001, 0b11111], // 6
    [0b11111, 0b00001, 0b00110, 0b00100, 0b00100], // 7
    [0b11111, 0b10001, 0b11111, 0b10001, 0b11111], // 8
    [0b11111, 0b10001, 0b11111, 0b00001, 0b11111], // 9
];

const LAST: usize = MATRIX_SIZE - 1;

/// Returns the glyph for `digit`.
#[inline]
pub fn glyph(digit: Digit) -> &'static Glyph {
    &GLYPHS[digit.get() as usize]
}

/// Returns true if the glyph lights logical `(row, col)`.
#[inline]
pub fn is_lit(glyph: &Glyph, row: usize, col: usize) -> bool {
    glyph[row] & (1 << (LAST - col)) != 0
}

/// Maps a logical `(row, col)` to its physical strip index.
///
/// The coordinate is first rotated into the strip's orientation, then walked
/// in zigzag order: even physical rows run left to right, odd rows right to
/// left.
///
/// # Panics
/// If `row` or `col` is not below [`MATRIX_SIZE`].
pub const fn physical_index(row: usize, col: usize) -> usize {
    assert!(row < MATRIX_SIZE && col < MATRIX_SIZE);

    let pr = LAST - row;
    let pc = LAST - col;
    if pr % 2 == 0 {
        pr * MATRIX_SIZE + pc
    } else {
        pr * MATRIX_SIZE + (LAST - pc)
    }
}

/// Physical indices lit by `digit`, ascending.
pub fn lit_indices(digit: Digit) -> Vec<u8, LED_COUNT> {
    let glyph = glyph(digit);
    let mut lit = [false; LED_COUNT];
    for row in 0..MATRIX_SIZE {
        for col in 0..MATRIX_SIZE {
            if is_lit(glyph, row, col) {
                lit[physical_index(row, col)] = true;
            }
        }
    }

    let mut indices = Vec::new();
    for (index, _) in lit.iter().enumerate().filter(|(_, on)| **on) {
        // Capacity equals LED_COUNT, the push cannot overflow.
        let _ = indices.push(index as u8);
    }
    indices
}

/// Repaints `frame` with `digit` in [`GLYPH_COLOR`].
pub fn render(digit: Digit, frame: &mut FrameBuffer) {
    render_with(digit, frame, GLYPH_COLOR);
}

/// Repaints `frame` with `digit` in `color`.
///
/// The whole frame is cleared first, so nothing of the previous digit
/// survives.
pub fn render_with(digit: Digit, frame: &mut FrameBuffer, color: Pixel) {
    frame.clear();

    let glyph = glyph(digit);
    for row in 0..MATRIX_SIZE {
        for col in 0..MATRIX_SIZE {
            if is_lit(glyph, row, col) {
                frame.set_color(physical_index(row, col), color);
            }
        }
    }
}
