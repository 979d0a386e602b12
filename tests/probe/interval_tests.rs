use sitecheck::core::probe::interval::{parse_interval, DEFAULT_INTERVAL_MS};

#[test]
fn test_combined_units() {
    assert_eq!(parse_interval("1h30m"), 5_400_000);
    assert_eq!(parse_interval("1h30m5s"), 5_405_000);
    assert_eq!(parse_interval("2m10s"), 130_000);
}

#[test]
fn test_unit_order_does_not_matter() {
    assert_eq!(parse_interval("5s1h"), parse_interval("1h5s"));
    assert_eq!(parse_interval("30m1h"), 5_400_000);
}

#[test]
fn test_surrounding_text_is_ignored() {
    assert_eq!(parse_interval("every 2h please"), 7_200_000);
    assert_eq!(parse_interval(" 15m "), 900_000);
}

#[test]
fn test_fallback_to_default() {
    for input in ["", "   ", "soon", "h", "0h", "0h0m0s", "10x"] {
        assert_eq!(
            parse_interval(input),
            DEFAULT_INTERVAL_MS,
            "Failed for input: {:?}",
            input
        );
    }
}

#[test]
fn test_zero_unit_does_not_cancel_others() {
    assert_eq!(parse_interval("0h5m"), 300_000);
}

#[test]
fn test_huge_values_saturate() {
    assert_eq!(parse_interval("99999999999999999999999h"), u64::MAX);
}

#[test]
fn test_result_is_never_zero() {
    for input in ["", "0s", "1s", "abc", "0m0s", "1h"] {
        assert!(parse_interval(input) > 0, "Zero interval for {:?}", input);
    }
}
