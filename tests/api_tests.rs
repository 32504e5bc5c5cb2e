//! Tests for the high-level API surface.
//!
//! These tests verify the fluent builders and the prelude exports for:
//! - Linear filter construction with inferred boundary coefficients
//! - Builder validation of coefficient vectors
//! - End-to-end assembly of a pipeline through the public surface only
//!
//! ## Test Organization
//!
//! 1. **Linear Builder** - Inference, equivalence, validation
//! 2. **Public Surface** - Prelude-only pipeline assembly

use approx::assert_relative_eq;

use streamfilt::prelude::*;

// ============================================================================
// Linear Builder Tests
// ============================================================================

/// Test the builder infers boundary coefficients from vector lengths.
#[test]
fn test_builder_infers_bounds() {
    let filter = LinearFilterBuilder::new()
        .feedback(vec![0.0, 0.5])
        .feedforward(vec![1.0, 2.0, 3.0])
        .build()
        .unwrap();

    assert_eq!(filter.output_bound(), 2);
    assert_eq!(filter.input_bound(), 3);
}

/// Test built filters behave identically to direct construction.
#[test]
fn test_builder_matches_direct_construction() {
    let mut built = LinearFilterBuilder::new()
        .feedback(vec![0.0, 0.75])
        .feedforward(vec![2.0, 5.0])
        .build()
        .unwrap();
    let mut direct =
        LinearDifferenceFilter::new(2, 2, vec![0.0, 0.75], vec![2.0, 5.0]).unwrap();

    for value in [1.0, 4.0, -2.5] {
        assert_relative_eq!(
            built.filter(value).unwrap(),
            direct.filter(value).unwrap(),
            max_relative = 1e-12
        );
    }
}

/// Test the builder rejects non-finite coefficients at build time.
#[test]
fn test_builder_validates_coefficients() {
    let res = LinearFilterBuilder::new()
        .feedforward(vec![1.0, f64::NAN])
        .build();

    assert!(matches!(res, Err(FilterError::MissingValue { .. })));
}

/// Test a default builder produces the degenerate empty filter.
///
/// With both vectors empty, filtering reports the empty feedforward
/// vector.
#[test]
fn test_builder_default_is_degenerate() {
    let mut filter = LinearFilterBuilder::<f64>::default().build().unwrap();

    assert!(matches!(
        filter.filter(1.0),
        Err(FilterError::EmptyCollection { name: "b" })
    ));
}

// ============================================================================
// Public Surface Tests
// ============================================================================

/// Test a full pipeline assembled through the prelude alone.
///
/// Builds a binomial smoother feeding a rolling maximum without
/// touching any internal layer.
#[test]
fn test_prelude_pipeline_assembly() {
    let mut cascade = CascadeBuilder::new()
        .stage(BinomialFilter::<f64>::new(3).unwrap())
        .stage(MaxFilterN::<f64>::new(2))
        .build()
        .unwrap();

    // Binomial taps [1, 3, 3]: outputs 1, 5, 13 for inputs 1, 2, 4.
    let first: f64 = cascade.filter(1.0).unwrap();
    let second: f64 = cascade.filter(2.0).unwrap();
    let third: f64 = cascade.filter(4.0).unwrap();

    assert_eq!(first, 1.0);
    assert_eq!(second, 5.0);
    assert_eq!(third, 13.0);
}

/// Test every reset capability is reachable through the prelude traits.
#[test]
fn test_prelude_reset_capabilities() {
    fn reset_all<F: Reset>(filter: &mut F) {
        filter.reset();
    }

    let mut gain = GainFilter::new(2.0).unwrap();
    let mut min = MinFilterN::<f64>::new(4);
    gain.filter(1.0).unwrap();
    min.filter(1.0).unwrap();

    reset_all(&mut gain);
    reset_all(&mut min);

    assert_eq!(gain.filter(3.0).unwrap(), 6.0);
    assert!(min.is_empty());
}
