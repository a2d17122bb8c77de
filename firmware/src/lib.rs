#![no_std]

pub mod indicator;
pub mod strip;
pub mod time;
