//! Integration tests for the indicator Blinker

mod common;
use common::*;

use digit_matrix::{Blinker, Channel};

#[test]
fn does_not_touch_led_before_first_tick() {
    let blinker = Blinker::new(MockIndicator::new(), Channel::Red);
    assert!(!blinker.is_lit());
    assert_eq!(blinker.led().last_lines(), None);
}

#[test]
fn consecutive_ticks_alternate() {
    let mut blinker = Blinker::new(MockIndicator::new(), Channel::Red);

    let mut previous = blinker.is_lit();
    for _ in 0..10 {
        let state = blinker.tick();
        assert_eq!(state, !previous);
        assert_eq!(blinker.is_lit(), state);
        previous = state;
    }
}

#[test]
fn red_blinks_and_other_lines_stay_low() {
    let mut blinker = Blinker::new(MockIndicator::new(), Channel::Red);
    for _ in 0..4 {
        blinker.tick();
    }

    assert_eq!(
        blinker.led().history(),
        &[
            (true, false, false),
            (false, false, false),
            (true, false, false),
            (false, false, false),
        ]
    );
}

#[test]
fn inactive_lines_low_for_every_channel() {
    for channel in [Channel::Red, Channel::Green, Channel::Blue] {
        let mut blinker = Blinker::new(MockIndicator::new(), channel);
        for _ in 0..6 {
            let lit = blinker.tick();
            let (red, green, blue) = blinker.led().last_lines().unwrap();
            let expected = match channel {
                Channel::Red => (lit, false, false),
                Channel::Green => (false, lit, false),
                Channel::Blue => (false, false, lit),
            };
            assert_eq!((red, green, blue), expected);
        }
        assert_eq!(blinker.channel(), channel);
    }
}

#[test]
fn default_channel_is_red() {
    assert_eq!(Channel::default(), Channel::Red);
}
