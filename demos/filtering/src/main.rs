//! Demonstrates integer EMA smoothing with shift-ema
//!
//! Feeds one noisy ADC-style sample series through filters of different
//! smoothing strengths and prints the resulting tables.

use shift_ema::{ShiftEma, SmoothingExponent};

fn main() {
    println!("=== shift-ema Filtering Examples ===\n");

    let noisy_samples = [2048, 2100, 2000, 2080, 1990, 2050, 2020, 2060];

    // Example 1: Divisor 1 (for comparison - no smoothing)
    println!("1. Divisor 1 (raw passthrough)");
    let mut filter = ShiftEma::new(SmoothingExponent::Div1);

    println!("   Input → Output");
    for &sample in &noisy_samples {
        let output = filter.apply(sample);
        println!("   {:4} → {:4}", sample, output);
    }
    println!();

    // Example 2: Light smoothing
    println!("2. Divisor 4 (light smoothing)");
    let mut filter = ShiftEma::new(SmoothingExponent::Div4);

    println!("   Input → Output (filtered)");
    for &sample in &noisy_samples {
        let output = filter.apply(sample);
        println!("   {:4} → {:4}", sample, output);
    }
    println!();

    // Example 3: Heavy smoothing
    println!("3. Divisor 16 (heavy smoothing)");
    let mut filter = ShiftEma::new(SmoothingExponent::Div16);

    println!("   Input → Output (filtered)");
    for &sample in &noisy_samples {
        let output = filter.apply(sample);
        println!("   {:4} → {:4}", sample, output);
    }
    println!();

    // Example 4: Split read-out with full internal precision
    println!("4. Divisor 16, rounded vs. scaled read-out");
    let mut filter = ShiftEma::new(SmoothingExponent::Div16);

    println!("   First sample seeds the filter, later ones blend in at 1/16 weight");
    println!("   Input → Rounded (scaled accumulator)");
    for &sample in &noisy_samples {
        filter.update(sample);
        println!(
            "   {:4} → {:4} ({:5})",
            sample,
            filter.value(),
            filter.scaled_value()
        );
    }
}
