//! Tests for the FIR filter family.
//!
//! These tests verify the FIR, gain, and binomial specializations of
//! the linear engine for:
//! - Convolution over feedforward taps with no feedback term
//! - Pure scalar multiplication through the gain filter
//! - Internally generated binomial taps
//! - Degenerate all-zero tap vectors
//!
//! ## Test Organization
//!
//! 1. **FIR** - Convolution sums, reset delegation
//! 2. **Gain** - Scalar multiplication
//! 3. **Binomial** - Tap generation and smoothing output
//! 4. **Degenerate Cases** - All-zero taps

use approx::assert_relative_eq;

use streamfilt::prelude::*;

// ============================================================================
// FIR Tests
// ============================================================================

/// Test FIR output is the tap-weighted sum of recent inputs.
///
/// With taps [0.5, 0.25]: y(0) = 0.5*4 = 2; y(1) = 0.5*8 + 0.25*4 = 5.
#[test]
fn test_fir_convolution() {
    let mut fir = FirFilter::new(2, vec![0.5, 0.25]).unwrap();

    assert_eq!(fir.filter(4.0).unwrap(), 2.0);
    assert_eq!(fir.filter(8.0).unwrap(), 5.0);
}

/// Test FIR has no feedback: outputs never influence later outputs.
///
/// A constant input through averaging taps settles at the input scaled
/// by the tap sum.
#[test]
fn test_fir_no_feedback_settles() {
    let mut fir = FirFilter::new(3, vec![0.25, 0.5, 0.25]).unwrap();

    fir.filter(2.0).unwrap();
    fir.filter(2.0).unwrap();
    for _ in 0..5 {
        assert_eq!(fir.filter(2.0).unwrap(), 2.0);
    }
}

/// Test the recorded single-step FIR output.
#[test]
fn test_fir_recorded_output() {
    let mut fir = FirFilter::new(2, vec![23_423_523.234_23, -0.002_234_234_2]).unwrap();

    assert_relative_eq!(
        fir.filter(2_345_256.234_234_23).unwrap(),
        5.493_416_389_280_824e13,
        max_relative = 1e-9
    );
}

/// Test reset delegates to the engine and restores fresh behavior.
#[test]
fn test_fir_reset() {
    let mut fir = FirFilter::new(2, vec![0.5, 0.25]).unwrap();
    fir.filter(4.0).unwrap();
    fir.filter(8.0).unwrap();

    fir.reset();

    assert_eq!(fir.filter(4.0).unwrap(), 2.0);
}

/// Test the steady-state reset of an FIR filter.
///
/// With no feedback, output_sum = r * sum(b).
#[test]
fn test_fir_reset_with() {
    let mut fir = FirFilter::new(2, vec![0.5, 0.25]).unwrap();

    fir.reset_with(4.0).unwrap();

    // Next output adds the baselines: b(0)*x - (r*sum(b)) + r
    // = 0.5*2.0 + 4.0 - 3.0 = 2.0.
    assert_eq!(fir.filter(2.0).unwrap(), 2.0);
}

// ============================================================================
// Gain Tests
// ============================================================================

/// Test gain multiplies every input by the configured scalar.
#[test]
fn test_gain_multiplies() {
    let mut gain = GainFilter::new(4.0).unwrap();

    assert_eq!(gain.filter(2.5).unwrap(), 10.0);
    assert_eq!(gain.filter(-1.0).unwrap(), -4.0);
    assert_eq!(gain.gain(), 4.0);
}

/// Test a zero gain returns zero for every input.
#[test]
fn test_gain_zero() {
    let mut gain = GainFilter::new(0.0).unwrap();

    for value in [1.0, -7.5, 1e12] {
        assert_eq!(gain.filter(value).unwrap(), 0.0);
    }
}

/// Test gain rejects a non-finite input.
#[test]
fn test_gain_rejects_nan() {
    let mut gain = GainFilter::new(2.0).unwrap();

    assert!(matches!(
        gain.filter(f64::NAN),
        Err(FilterError::MissingValue { .. })
    ));
}

// ============================================================================
// Binomial Tests
// ============================================================================

/// Test binomial taps are generated internally.
#[test]
fn test_binomial_taps() {
    let binomial = BinomialFilter::<f64>::new(5).unwrap();

    assert_eq!(binomial.taps(), &[1.0, 5.0, 10.0, 10.0, 5.0]);
}

/// Test binomial filtering weights recent inputs by Pascal's row.
///
/// With order 3 (taps [1, 3, 3]): y(2) = 1*c + 3*b + 3*a for inputs
/// a, b, c.
#[test]
fn test_binomial_filter_output() {
    let mut binomial = BinomialFilter::new(3).unwrap();

    assert_eq!(binomial.filter(1.0).unwrap(), 1.0);
    assert_eq!(binomial.filter(2.0).unwrap(), 5.0);
    assert_eq!(binomial.filter(4.0).unwrap(), 13.0);
}

/// Test an order-zero binomial filter reports its empty tap vector.
#[test]
fn test_binomial_order_zero_errors_on_filter() {
    let mut binomial = BinomialFilter::<f64>::new(0).unwrap();

    assert!(matches!(
        binomial.filter(1.0),
        Err(FilterError::EmptyCollection { name: "b" })
    ));
}

// ============================================================================
// Degenerate Cases
// ============================================================================

/// Test all-zero taps return zero for every input.
///
/// Covers the FIR family with degenerate coefficient vectors.
#[test]
fn test_all_zero_taps_return_zero() {
    let mut fir = FirFilter::new(3, vec![0.0, 0.0, 0.0]).unwrap();

    for value in [300.0, -2.5, 1e9, 0.0] {
        assert_eq!(fir.filter(value).unwrap(), 0.0);
    }
}
