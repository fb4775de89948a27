//! Property-based tests for pick
//!
//! This module uses proptest to verify core invariants of the expression
//! resolver and the line I/O driver. Property-based testing generates
//! hundreds of random inputs to verify that certain properties always hold
//! true.

use std::io::Cursor;

use pick::{resolve_expression, run, PickError};

// Import proptest macro
use proptest::prelude::*;

/// A single expression part that resolves without error against any line
/// count: dash ranges (always positive, capping absorbs overshoot), the
/// always-valid bare indices 0 and -1, and arbitrary slices with a nonzero
/// step.
fn valid_part() -> impl Strategy<Value = String> {
    let slice_field = proptest::option::of(-25i64..25);
    prop_oneof![
        (1usize..30, 1usize..30).prop_map(|(a, b)| format!("{a}-{b}")),
        Just("0".to_string()),
        Just("-1".to_string()),
        (
            slice_field.clone(),
            slice_field,
            proptest::option::of((-5i64..5).prop_filter("step must be nonzero", |s| *s != 0)),
        )
            .prop_map(|(start, stop, step)| {
                let field = |v: Option<i64>| v.map(|v| v.to_string()).unwrap_or_default();
                format!("{}:{}:{}", field(start), field(stop), field(step))
            }),
    ]
}

// ============================================================================
// Property 1: Full-range expressions are the identity / reversal
// ============================================================================

proptest! {
    /// ":" and "::" select every line in original order
    #[test]
    fn prop_full_slice_is_identity(n in 0usize..200) {
        let expected: Vec<usize> = (1..=n).collect();
        prop_assert_eq!(resolve_expression(":", n).unwrap(), expected.clone());
        prop_assert_eq!(resolve_expression("::", n).unwrap(), expected);
    }

    /// "::-1" selects every line in reverse order
    #[test]
    fn prop_reverse_slice_reverses(n in 0usize..200) {
        let expected: Vec<usize> = (1..=n).rev().collect();
        prop_assert_eq!(resolve_expression("::-1", n).unwrap(), expected);
    }
}

// ============================================================================
// Property 2: Dash-range semantics
// ============================================================================

proptest! {
    /// An in-bounds ascending range selects exactly a..=b
    #[test]
    fn prop_ascending_range_in_bounds(
        (a, b, n) in (1usize..50, 1usize..50, 1usize..100)
            .prop_filter("a < b <= n", |(a, b, n)| a < b && b <= n)
    ) {
        let expected: Vec<usize> = (a..=b).collect();
        prop_assert_eq!(resolve_expression(&format!("{a}-{b}"), n).unwrap(), expected);
    }

    /// An in-bounds descending range selects exactly a..=b reversed
    #[test]
    fn prop_descending_range_in_bounds(
        (a, b, n) in (1usize..50, 1usize..50, 1usize..100)
            .prop_filter("b <= a <= n", |(a, b, n)| b <= a && a <= n)
    ) {
        let expected: Vec<usize> = (b..=a).rev().collect();
        prop_assert_eq!(resolve_expression(&format!("{a}-{b}"), n).unwrap(), expected);
    }

    /// Out-of-range endpoints truncate instead of erroring
    #[test]
    fn prop_range_caps_never_error(a in 1usize..1000, b in 1usize..1000, n in 0usize..50) {
        let plan = resolve_expression(&format!("{a}-{b}"), n).unwrap();
        prop_assert!(plan.iter().all(|&idx| idx >= 1 && idx <= n));
    }
}

// ============================================================================
// Property 3: Resolver invariants for arbitrary valid expressions
// ============================================================================

proptest! {
    /// Every resolved index lies in [1, line_count]
    #[test]
    fn prop_resolved_indices_in_bounds(
        parts in proptest::collection::vec(valid_part(), 1..6),
        n in 0usize..50
    ) {
        let expression = parts.join(",");
        let plan = resolve_expression(&expression, n).unwrap();
        prop_assert!(
            plan.iter().all(|&idx| idx >= 1 && idx <= n),
            "{:?} with n={} produced {:?}", expression, n, plan
        );
    }

    /// Comma concatenation resolves to the concatenation of the parts
    #[test]
    fn prop_comma_is_concatenation(
        left in valid_part(),
        right in valid_part(),
        n in 0usize..50
    ) {
        let mut expected = resolve_expression(&left, n).unwrap();
        expected.extend(resolve_expression(&right, n).unwrap());
        let combined = resolve_expression(&format!("{left},{right}"), n).unwrap();
        prop_assert_eq!(combined, expected);
    }

    /// Strings of letters never match either grammar
    #[test]
    fn prop_junk_is_rejected(junk in "[a-z]{1,8}", n in 0usize..50) {
        let err = resolve_expression(&junk, n).unwrap_err();
        prop_assert!(matches!(err, PickError::InvalidExpression(_)));
    }
}

// ============================================================================
// Property 4: Driver round-trips bytes
// ============================================================================

proptest! {
    /// A full-range selection reproduces the input byte-for-byte
    #[test]
    fn prop_full_selection_round_trips(
        lines in proptest::collection::vec("[ -~]{0,20}", 0..30)
    ) {
        let input: String = lines.iter().map(|l| format!("{l}\n")).collect();

        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        run(":", &mut reader, &mut output).unwrap();

        prop_assert_eq!(output, input.into_bytes());
    }

    /// Reversing twice restores the original line order
    #[test]
    fn prop_reverse_selection_reverses_lines(
        lines in proptest::collection::vec("[ -~]{0,20}", 0..30)
    ) {
        let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let reversed: String = lines.iter().rev().map(|l| format!("{l}\n")).collect();

        let mut reader = Cursor::new(input.into_bytes());
        let mut output = Vec::new();
        run("::-1", &mut reader, &mut output).unwrap();

        prop_assert_eq!(output, reversed.into_bytes());
    }
}
