#![no_std]

pub mod analog;
pub mod buzzer;
pub mod matrix;
pub mod screen;
pub mod status_led;
pub mod time;
