use num_traits::{PrimInt, Signed};

use crate::smoothing::SmoothingExponent;

/// Fixed-point exponential moving average filter.
///
/// The running estimate is kept pre-multiplied by `2^scale_bits` so the
/// fractional sample weight survives integer arithmetic; it is rounded
/// back down to caller units only at read time. Every update is plain
/// add/subtract/shift, with no multiply, divide, or floating point.
///
/// `A` is the accumulator type. The default `i32` with the default scale
/// safely holds samples up to about ±2^26; instantiate `ShiftEma<i64>`
/// for wider inputs.
#[derive(Debug, Clone, Copy)]
pub struct ShiftEma<A = i32> {
    smoothing: SmoothingExponent,
    scale_bits: usize,
    acc: A,
    initialized: bool,
}

impl<A> ShiftEma<A>
where
    A: PrimInt + Signed,
{
    /// Fractional bits kept in the accumulator by `new`.
    pub const DEFAULT_SCALE_BITS: usize = 4;

    /// Create an unseeded filter with the default scale.
    pub fn new(smoothing: SmoothingExponent) -> Self {
        Self::with_scale_bits(smoothing, Self::DEFAULT_SCALE_BITS)
    }

    /// Create an unseeded filter keeping `scale_bits` fractional bits
    /// internally.
    ///
    /// `scale_bits` must be at least 1 (read-out rounds by adding
    /// `1 << (scale_bits - 1)`) and must leave headroom for the sample
    /// range in the accumulator width.
    pub fn with_scale_bits(smoothing: SmoothingExponent, scale_bits: usize) -> Self {
        debug_assert!(scale_bits >= 1);
        debug_assert!(scale_bits < core::mem::size_of::<A>() * 8 - 1);

        Self {
            smoothing,
            scale_bits,
            acc: A::zero(),
            initialized: false,
        }
    }

    /// Ingest one sample.
    ///
    /// The first sample after construction or `reset()` seeds the
    /// estimate directly, so the filter starts with zero lag instead of
    /// climbing up from zero. Every later sample moves the estimate by
    /// `1 / 2^k` of its distance from the current value.
    ///
    /// `sample << scale_bits` must fit in `A`: with the default `i32`
    /// accumulator and scale, keep samples within about ±2^26.
    pub fn update(&mut self, sample: A) {
        debug_assert!(sample <= A::max_value() >> self.scale_bits);
        debug_assert!(sample >= A::min_value() >> self.scale_bits);

        let scaled = sample << self.scale_bits;

        if !self.initialized {
            self.acc = scaled;
            self.initialized = true;
        } else {
            let k = self.smoothing.shift();
            self.acc = self.acc - (self.acc >> k) + (scaled >> k);
        }
    }

    /// Ingest one sample and return the updated rounded estimate.
    pub fn apply(&mut self, sample: A) -> A {
        self.update(sample);
        self.value()
    }

    /// Current estimate in caller units, rounded to nearest.
    ///
    /// Idempotent between updates. Before the first sample this reads 0,
    /// which is the unseeded placeholder, not a filtered measurement.
    pub fn value(&self) -> A {
        let half = A::one() << (self.scale_bits - 1);
        (self.acc + half) >> self.scale_bits
    }

    /// Current estimate at full internal precision, i.e. the value
    /// multiplied by `2^scale_bits`.
    ///
    /// Lets downstream math keep the fractional bits instead of paying
    /// the read-out rounding on every step.
    pub fn scaled_value(&self) -> A {
        self.acc
    }

    /// Discard the estimate and return to the unseeded state.
    ///
    /// Configuration is kept; the next `update()` seeds exactly like the
    /// first call on a fresh filter.
    pub fn reset(&mut self) {
        self.acc = A::zero();
        self.initialized = false;
    }

    /// The configured smoothing selector.
    pub fn smoothing(&self) -> SmoothingExponent {
        self.smoothing
    }

    /// Number of fractional bits kept internally.
    pub fn scale_bits(&self) -> usize {
        self.scale_bits
    }

    /// Whether a sample has been ingested since construction or the last
    /// reset.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_exactly() {
        let mut filter = ShiftEma::new(SmoothingExponent::Div4);
        assert_eq!(filter.apply(100), 100);
        assert_eq!(filter.scaled_value(), 100 << 4);
        assert!(filter.is_initialized());
    }

    #[test]
    fn recurrence_matches_worked_example() {
        let mut filter = ShiftEma::new(SmoothingExponent::Div4);
        filter.update(100);

        // acc = 1600 - (1600 >> 2) + ((200 << 4) >> 2) = 2000
        filter.update(200);
        assert_eq!(filter.scaled_value(), 2000);
        // (2000 + 8) >> 4 = 125
        assert_eq!(filter.value(), 125);
    }

    #[test]
    fn reads_are_idempotent() {
        let mut filter = ShiftEma::new(SmoothingExponent::Div8);
        filter.update(100);
        filter.update(250);

        let first = filter.value();
        let first_scaled = filter.scaled_value();
        for _ in 0..5 {
            assert_eq!(filter.value(), first);
            assert_eq!(filter.scaled_value(), first_scaled);
        }
    }

    #[test]
    fn unseeded_filter_reads_zero() {
        let filter: ShiftEma = ShiftEma::new(SmoothingExponent::Div16);
        assert!(!filter.is_initialized());
        assert_eq!(filter.value(), 0);
        assert_eq!(filter.scaled_value(), 0);
    }

    #[test]
    fn reset_restores_seeding() {
        let mut filter = ShiftEma::new(SmoothingExponent::Div4);
        filter.update(100);
        filter.update(900);
        filter.update(300);

        filter.reset();
        assert!(!filter.is_initialized());

        // After reset the next sample seeds, exactly like a fresh filter
        assert_eq!(filter.apply(42), 42);
        assert_eq!(filter.scaled_value(), 42 << 4);
    }

    #[test]
    fn divisor_one_tracks_input() {
        let mut filter = ShiftEma::new(SmoothingExponent::Div1);
        filter.update(0);

        // Full new-sample weight means no smoothing at all
        assert_eq!(filter.apply(500), 500);
        assert_eq!(filter.apply(-300), -300);
    }

    #[test]
    fn negative_samples_round_to_nearest() {
        let mut filter = ShiftEma::new(SmoothingExponent::Div4);
        filter.update(-100);

        // acc = -1600 - (-1600 >> 2) + ((-200 << 4) >> 2) = -2000
        filter.update(-200);
        assert_eq!(filter.scaled_value(), -2000);
        assert_eq!(filter.value(), -125);
    }

    #[test]
    fn configuration_is_preserved() {
        let filter: ShiftEma = ShiftEma::with_scale_bits(SmoothingExponent::Div32, 6);
        assert_eq!(filter.smoothing(), SmoothingExponent::Div32);
        assert_eq!(filter.scale_bits(), 6);
    }
}
