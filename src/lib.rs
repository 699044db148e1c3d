#![no_std]

mod ema;
pub mod smoothing;

pub use ema::ShiftEma;
pub use smoothing::SmoothingExponent;
