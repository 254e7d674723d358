use super::*;

#[test]
fn api_response_defaults_missing_envelope_fields() {
    let parsed: ApiResponse<LoginToken> = serde_json::from_str(r#"{"data":{"token":"abc"}}"#).unwrap();
    assert!(parsed.success);
    assert_eq!(parsed.status_code, 200);
    assert_eq!(parsed.message, None);
    let token = parsed.data.unwrap();
    assert_eq!(token.token, "abc");
    assert_eq!(token.token_type, "Bearer");
}

#[test]
fn error_response_detail_text_handles_string_and_list() {
    let plain: ErrorResponse = serde_json::from_str(r#"{"status_code":401,"detail":"Unauthenticated"}"#).unwrap();
    assert_eq!(plain.detail_text(), "Unauthenticated");

    let list: ErrorResponse = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
    assert_eq!(list.detail_text(), r#"[{"msg":"field required"}]"#);

    let bare: ErrorResponse = serde_json::from_str(r#"{"message":"Failed"}"#).unwrap();
    assert_eq!(bare.detail_text(), "Failed");
}

#[test]
fn user_display_name_prefers_full_name() {
    let mut user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "username": "blessed",
        "first_name": "Blessed",
        "last_name": "Ayo",
        "email": "b@example.com"
    }))
    .unwrap();
    assert_eq!(user.display_name(), "Blessed Ayo");
    assert!(!user.email_verified);

    user.first_name.clear();
    user.last_name = "  ".to_owned();
    assert_eq!(user.display_name(), "blessed");
}

#[test]
fn auction_status_uses_backend_spelling() {
    let status: AuctionStatus = serde_json::from_str(r#""cancled""#).unwrap();
    assert_eq!(status, AuctionStatus::Cancelled);
    assert_eq!(serde_json::to_string(&AuctionStatus::Active).unwrap(), r#""active""#);
}

#[test]
fn auction_display_price_falls_back_to_start_price() {
    let mut auction: Auction = serde_json::from_value(serde_json::json!({
        "id": "a1",
        "user_id": "u1",
        "item_id": "i1",
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": "2024-01-05T00:00:00Z",
        "status": "active",
        "start_price": 5000.0
    }))
    .unwrap();
    assert_eq!(auction.display_price(), 5000.0);
    assert_eq!(auction.title(), "Untitled item");
    assert_eq!(auction.image_url(), None);

    auction.current_price = Some(6500.0);
    assert_eq!(auction.display_price(), 6500.0);
}

#[test]
fn paged_response_tolerates_missing_counters() {
    let page: PagedResponse<Category> =
        serde_json::from_str(r#"{"data":[{"id":"c1","name":"Phones"}],"pages":3}"#).unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pages, 3);
    assert_eq!(page.total, 0);
}

fn auction_json(items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "a1",
        "user_id": "u1",
        "item_id": "i1",
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": "2024-01-05T00:00:00Z",
        "start_price": 100.0,
        "items": items
    })
}

#[test]
fn auction_treats_empty_item_object_as_absent() {
    let auction: Auction = serde_json::from_value(auction_json(serde_json::json!({}))).unwrap();
    assert_eq!(auction.items, None);

    let auction: Auction = serde_json::from_value(auction_json(serde_json::Value::Null)).unwrap();
    assert_eq!(auction.items, None);
}

#[test]
fn auction_decodes_joined_item() {
    let auction: Auction = serde_json::from_value(auction_json(serde_json::json!({
        "id": "i1",
        "sellers_id": "u1",
        "name": "iPhone 13",
        "starting_price": 100.0,
        "image_link": {"link": "https://img/i.png", "public_id": "p"}
    })))
    .unwrap();
    assert_eq!(auction.title(), "iPhone 13");
    assert_eq!(auction.image_url().as_deref(), Some("https://img/i.png"));
}

#[test]
fn paged_auctions_survive_a_bare_row() {
    let body = serde_json::json!({
        "data": [auction_json(serde_json::json!({})), auction_json(serde_json::json!({}))],
        "pages": 1
    });
    let page: PagedResponse<Auction> = serde_json::from_value(body).unwrap();
    assert_eq!(page.data.len(), 2);
}
