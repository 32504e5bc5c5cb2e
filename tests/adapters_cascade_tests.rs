//! Tests for cascade composition.
//!
//! These tests verify the filter cascade for:
//! - Threading values through heterogeneous stages in list order
//! - The recorded average → FIR → max reference pipeline
//! - Checked conversions and typed mismatches at stage boundaries
//! - Partial-failure semantics and whole-pipeline reset
//!
//! ## Test Organization
//!
//! 1. **Composition** - Stage ordering, recorded pipeline, state flow
//! 2. **Type Mismatches** - Wrong input type, wrong output request
//! 3. **Construction and Reset** - Empty builds, per-stage reset

use approx::assert_relative_eq;

use streamfilt::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// The recorded reference pipeline: average → FIR(2) → max.
fn make_reference_cascade() -> FilterCascade {
    CascadeBuilder::new()
        .stage(AveragingFilter::<f64>::new())
        .stage(FirFilter::new(2, vec![23_423_523.234_23, -0.002_234_234_2]).unwrap())
        .stage(MaxFilter::<f64>::new())
        .build()
        .unwrap()
}

// ============================================================================
// Composition Tests
// ============================================================================

/// Test the recorded composed output.
///
/// Verifies a single value through the reference pipeline produces the
/// recorded composition of all three stages.
#[test]
fn test_cascade_recorded_output() {
    let mut cascade = make_reference_cascade();

    let output: f64 = cascade.filter(2_345_256.234_234_23).unwrap();

    assert_relative_eq!(output, 5.493_416_389_280_824e13, max_relative = 1e-9);
}

/// Test stages are applied in list order.
///
/// gain(2) then gain(3) is multiplication by 6, and each stage's
/// output feeds the next stage's input.
#[test]
fn test_cascade_stage_order() {
    let mut cascade = CascadeBuilder::new()
        .stage(GainFilter::new(2.0).unwrap())
        .stage(GainFilter::new(3.0).unwrap())
        .build()
        .unwrap();

    let output: f64 = cascade.filter(1.5).unwrap();
    assert_eq!(output, 9.0);
    assert_eq!(cascade.len(), 2);
}

/// Test stage state evolves independently across calls.
///
/// An averaging stage feeding a running maximum keeps the maximum at
/// the largest mean seen so far.
#[test]
fn test_cascade_state_evolves() {
    let mut cascade = CascadeBuilder::new()
        .stage(AveragingFilter::<f64>::new())
        .stage(MaxFilter::<f64>::new())
        .build()
        .unwrap();

    let first: f64 = cascade.filter(10.0).unwrap();
    let second: f64 = cascade.filter(0.0).unwrap();

    assert_eq!(first, 10.0);
    assert_eq!(second, 10.0, "Max should retain the earlier mean");
}

// ============================================================================
// Type Mismatch Tests
// ============================================================================

/// Test an incompatible input type reports a typed mismatch.
///
/// Verifies the mismatch carries the stage index and expected type
/// instead of surfacing an unrelated runtime fault.
#[test]
fn test_cascade_input_type_mismatch() {
    let mut cascade = make_reference_cascade();

    let err = cascade.filter::<i64, f64>(23_423_425).unwrap_err();

    assert!(matches!(
        err,
        FilterError::TypeMismatch { stage: 0, .. }
    ));
    assert_eq!(cascade.input_type(), Some("f64"));
}

/// Test requesting the wrong output type reports a mismatch past the
/// last stage.
#[test]
fn test_cascade_output_type_mismatch() {
    let mut cascade = make_reference_cascade();

    let err = cascade.filter::<f64, i64>(1.0).unwrap_err();

    assert!(matches!(
        err,
        FilterError::TypeMismatch { stage: 3, .. }
    ));
}

/// Test a mid-pipeline failure leaves earlier stages mutated.
///
/// A stage error at stage 1 (NaN produced by no stage here, so the
/// mismatch is forced by requesting a wrong output) does not roll back
/// the averaging stage's accumulators.
#[test]
fn test_cascade_partial_failure_keeps_earlier_state() {
    let mut cascade = CascadeBuilder::new()
        .stage(AveragingFilter::<f64>::new())
        .stage(MaxFilter::<f64>::new())
        .build()
        .unwrap();

    // Both stages mutate, then the output conversion fails.
    cascade.filter::<f64, i64>(10.0).unwrap_err();

    // The averaging stage retained the earlier call: mean of [10, 0]
    // is 5, and the maximum already saw 10.
    let output: f64 = cascade.filter(0.0).unwrap();
    assert_eq!(output, 10.0);
}

// ============================================================================
// Construction and Reset Tests
// ============================================================================

/// Test building an empty cascade fails.
#[test]
fn test_empty_cascade_rejected() {
    let res = CascadeBuilder::new().build();

    assert!(matches!(
        res,
        Err(FilterError::EmptyCollection { name: "stages" })
    ));
}

/// Test reset restores every stage to its fresh state.
#[test]
fn test_cascade_reset_all_stages() {
    let mut cascade = CascadeBuilder::new()
        .stage(AveragingFilter::<f64>::new())
        .stage(MaxFilter::<f64>::new())
        .build()
        .unwrap();
    cascade.filter::<f64, f64>(100.0).unwrap();

    cascade.reset();

    let output: f64 = cascade.filter(4.0).unwrap();
    assert_eq!(output, 4.0, "Reset should clear every stage's state");
}

/// Test a stage-level validation failure propagates with its original
/// context.
#[test]
fn test_cascade_propagates_stage_errors() {
    let mut cascade = CascadeBuilder::new()
        .stage(AveragingFilter::<f64>::new())
        .build()
        .unwrap();

    let err = cascade.filter::<f64, f64>(f64::NAN).unwrap_err();

    assert!(matches!(
        err,
        FilterError::MissingValue { name: "input", .. }
    ));
}
