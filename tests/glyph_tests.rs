//! Integration tests for glyph rendering and the addressing transform

use digit_matrix::{
    Digit, FrameBuffer, GLYPH_COLOR, GLYPHS, Glyph, LED_COUNT, MATRIX_SIZE, PIXEL_OFF, Pixel,
    lit_indices, physical_index, render, render_with,
};

fn digit(value: u8) -> Digit {
    Digit::new(value).unwrap()
}

fn lit_in_frame(frame: &FrameBuffer) -> heapless::Vec<u8, LED_COUNT> {
    let mut lit = heapless::Vec::new();
    for (index, pixel) in frame.pixels().iter().enumerate() {
        if *pixel != PIXEL_OFF {
            lit.push(index as u8).unwrap();
        }
    }
    lit
}

#[test]
fn addressing_map_is_a_bijection() {
    let mut seen = [false; LED_COUNT];
    for row in 0..MATRIX_SIZE {
        for col in 0..MATRIX_SIZE {
            let index = physical_index(row, col);
            assert!(index < LED_COUNT, "({row}, {col}) mapped to {index}");
            assert!(!seen[index], "index {index} hit twice");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn physical_rows_alternate_direction() {
    // Logical row 4 is physical row 0, walked left to right from logical col 4.
    let row: [usize; 5] = core::array::from_fn(|col| physical_index(4, col));
    assert_eq!(row, [4, 3, 2, 1, 0]);

    // Logical row 3 is physical row 1, walked right to left.
    let row: [usize; 5] = core::array::from_fn(|col| physical_index(3, col));
    assert_eq!(row, [5, 6, 7, 8, 9]);
}

#[test]
#[should_panic]
fn physical_index_rejects_out_of_grid() {
    let _ = physical_index(MATRIX_SIZE, 0);
}

#[test]
fn zero_lights_its_ring() {
    assert_eq!(
        lit_indices(digit(0)).as_slice(),
        &[1, 2, 3, 5, 9, 10, 14, 15, 19, 21, 22, 23]
    );
}

#[test]
fn one_and_seven_match_their_wiring() {
    assert_eq!(
        lit_indices(digit(1)).as_slice(),
        &[0, 1, 2, 3, 4, 7, 12, 14, 16, 17, 22]
    );
    assert_eq!(
        lit_indices(digit(7)).as_slice(),
        &[2, 7, 11, 12, 19, 20, 21, 22, 23, 24]
    );
}

#[test]
fn render_paints_exactly_the_lit_indices() {
    for value in 0..=9 {
        let mut frame = FrameBuffer::new();
        render(digit(value), &mut frame);

        assert_eq!(lit_in_frame(&frame), lit_indices(digit(value)));
        assert!(
            frame
                .pixels()
                .iter()
                .all(|p| *p == PIXEL_OFF || *p == GLYPH_COLOR)
        );
    }
}

#[test]
fn render_is_deterministic_and_idempotent() {
    let mut first = FrameBuffer::new();
    render(digit(5), &mut first);

    let mut second = first.clone();
    render(digit(5), &mut second);
    assert_eq!(first, second);

    render(digit(5), &mut second);
    assert_eq!(first, second);
}

#[test]
fn render_clears_previous_digit() {
    let mut frame = FrameBuffer::new();
    render(digit(8), &mut frame);
    render(digit(1), &mut frame);

    let mut fresh = FrameBuffer::new();
    render(digit(1), &mut fresh);
    assert_eq!(frame, fresh);
}

#[test]
fn render_with_uses_the_given_colour() {
    let green = Pixel::new(0, 40, 0);
    let mut frame = FrameBuffer::new();
    render_with(digit(3), &mut frame, green);

    for index in lit_indices(digit(3)) {
        assert_eq!(frame.pixel(index as usize), Some(green));
    }
    assert_eq!(frame.lit_count(), lit_indices(digit(3)).len());
}

#[test]
fn eight_is_the_densest_glyph() {
    let counts: heapless::Vec<usize, 10> = (0..10u8)
        .map(|value| lit_indices(digit(value)).len())
        .collect();
    let eight = counts[8];
    assert!(counts.iter().all(|count| *count <= eight));
    assert_eq!(GLYPHS[8].iter().map(|row| row.count_ones()).sum::<u32>(), 19);
}

#[test]
fn glyph_table_is_reachable_from_the_crate_root() {
    let eight: &Glyph = &GLYPHS[8];
    let bits: u32 = eight.iter().map(|row| row.count_ones()).sum();
    assert_eq!(lit_indices(digit(8)).len(), bits as usize);

    let mut via_render = FrameBuffer::new();
    let mut via_render_with = FrameBuffer::new();
    render(digit(8), &mut via_render);
    render_with(digit(8), &mut via_render_with, GLYPH_COLOR);
    assert_eq!(via_render, via_render_with);
}
