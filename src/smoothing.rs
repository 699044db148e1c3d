//! Smoothing strength selectors.
//!
//! The filter weights each new sample by `1 / 2^k`, applied as a right
//! shift. Only the shift amounts listed here are supported, so the
//! divisor set is a closed enum rather than a raw integer.

/// Power-of-two smoothing divisor selector.
///
/// Each variant names the divisor of the new-sample weight; the
/// discriminant is the corresponding shift amount. `Div1` disables
/// smoothing entirely (the output tracks the input), `Div512` is the
/// strongest smoothing with the slowest response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingExponent {
    Div1 = 0,
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
    Div256 = 8,
    Div512 = 9,
}

impl SmoothingExponent {
    /// Shift amount `k` such that the new-sample weight is `1 / 2^k`.
    #[inline]
    pub const fn shift(self) -> usize {
        self as usize
    }

    /// The effective divisor `2^k`.
    #[inline]
    pub const fn divisor(self) -> u32 {
        1 << self.shift()
    }

    /// Look up the selector for a power-of-two divisor.
    ///
    /// Returns `None` for zero, non-powers of two, and divisors above 512.
    pub const fn from_divisor(divisor: u32) -> Option<Self> {
        match divisor {
            1 => Some(Self::Div1),
            2 => Some(Self::Div2),
            4 => Some(Self::Div4),
            8 => Some(Self::Div8),
            16 => Some(Self::Div16),
            32 => Some(Self::Div32),
            64 => Some(Self::Div64),
            128 => Some(Self::Div128),
            256 => Some(Self::Div256),
            512 => Some(Self::Div512),
            _ => None,
        }
    }
}
