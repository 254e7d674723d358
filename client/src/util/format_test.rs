use super::*;

#[test]
fn groups_thousands() {
    assert_eq!(format_naira(5000.0), "₦5,000");
    assert_eq!(format_naira(230_000.0), "₦230,000");
    assert_eq!(format_naira(1_234_567.0), "₦1,234,567");
    assert_eq!(format_naira(999.0), "₦999");
    assert_eq!(format_naira(0.0), "₦0");
}

#[test]
fn shows_kobo_only_when_present() {
    assert_eq!(format_naira(5000.5), "₦5,000.50");
    assert_eq!(format_naira(12.346), "₦12.35");
}

#[test]
fn handles_negative_and_non_finite() {
    assert_eq!(format_naira(-1500.0), "-₦1,500");
    assert_eq!(format_naira(f64::NAN), "₦0");
}

#[test]
fn bid_count_label_pluralizes() {
    assert_eq!(bid_count_label(0), "(0 bids)");
    assert_eq!(bid_count_label(1), "(1 bid)");
    assert_eq!(bid_count_label(6), "(6 bids)");
}
