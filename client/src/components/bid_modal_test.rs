use super::*;

#[test]
fn validate_bid_amount_accepts_higher_bid() {
    assert_eq!(validate_bid_amount("6000", 5000.0), Ok(6000.0));
    assert_eq!(validate_bid_amount(" ₦6,500.50 ", 5000.0), Ok(6500.5));
}

#[test]
fn validate_bid_amount_rejects_non_numeric() {
    assert_eq!(validate_bid_amount("abc", 5000.0), Err("Enter a valid amount."));
    assert_eq!(validate_bid_amount("", 5000.0), Err("Enter a valid amount."));
    assert_eq!(validate_bid_amount("-10", 0.0), Err("Enter a valid amount."));
}

#[test]
fn validate_bid_amount_requires_exceeding_current_price() {
    assert_eq!(
        validate_bid_amount("5000", 5000.0),
        Err("Bid must be higher than the current price.")
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dispatch_bid_clears_busy_when_no_request_is_sent() {
    let busy = RwSignal::new(true);
    let closed = RwSignal::new(false);
    dispatch_bid(
        CreateBidRequest {
            auction_id: "a1".to_owned(),
            amount: 6000.0,
        },
        busy,
        Callback::new(move |()| closed.set(true)),
    );
    assert!(!busy.get_untracked());
    assert!(!closed.get_untracked());
}
