use super::*;

#[test]
fn format_measure_joins_value_and_unit() {
    assert_eq!(format_measure(Some(140.0), Some("kg")), "140 kg");
}

#[test]
fn format_measure_handles_missing_halves() {
    assert_eq!(format_measure(Some(5.0), None), "5");
    assert_eq!(format_measure(None, Some("km")), "");
    assert_eq!(format_measure(None, None), "");
}
