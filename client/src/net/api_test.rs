use super::*;
use crate::net::types::Category;

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(LOGIN_PATH, "/users/login");
    assert_eq!(REGISTER_PATH, "/users/register");
    assert_eq!(PROFILE_PATH, "/users/profile");
    assert_eq!(LOGOUT_PATH, "/users/logout");
    assert_eq!(CATEGORIES_PATH, "/categories/");
    assert_eq!(BIDS_PATH, "/bids/");
    assert_eq!(ITEMS_PATH, "/items/");
    assert_eq!(TRENDING_AUCTIONS_PATH, "/landing/trending_auctions");
}

#[test]
fn auctions_endpoint_targets_trending_listing_and_clamps_paging() {
    assert_eq!(auctions_endpoint(2, 8), "/landing/trending_auctions?page=2&per_page=8");
    assert_eq!(auctions_endpoint(0, 0), "/landing/trending_auctions?page=1&per_page=1");
    assert_eq!(auctions_endpoint(1, 500), "/landing/trending_auctions?page=1&per_page=100");
}

fn listed(id: &str) -> Auction {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "user_id": "u1",
        "item_id": "i1",
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": "2024-01-05T00:00:00Z",
        "start_price": 10.0,
        "items": {}
    }))
    .unwrap()
}

#[test]
fn auction_page_uses_served_counters() {
    let paged: PagedResponse<Auction> =
        decode_paged(200, &serde_json::json!({"data": [listed("a")], "pages": 4, "page_number": 1}).to_string())
            .unwrap();
    let page = auction_page(paged, 3, 8);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.items.len(), 1);
}

#[test]
fn auction_page_derives_missing_counters() {
    let paged: PagedResponse<Auction> =
        decode_paged(200, &serde_json::json!({"data": [], "total": 17, "per_page": 8}).to_string()).unwrap();
    let page = auction_page(paged, 2, 8);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);

    let empty: PagedResponse<Auction> = decode_paged(200, r#"{"data":[]}"#).unwrap();
    assert_eq!(auction_page(empty, 0, 8).total_pages, 1);
}

#[test]
fn find_auction_matches_trimmed_id() {
    let found = find_auction(vec![listed("a"), listed("b")], " b ").unwrap();
    assert_eq!(found.id, "b");
    assert_eq!(
        find_auction(vec![listed("a")], "z"),
        Err(ApiError::Status {
            status: 404,
            detail: "auction z not found".to_owned()
        })
    );
}

#[test]
fn decode_envelope_returns_data() {
    let token: LoginToken =
        decode_envelope(200, r#"{"message":"Success","success":true,"data":{"token":"t","token_type":"Bearer"}}"#)
            .unwrap();
    assert_eq!(token.token, "t");
}

#[test]
fn decode_envelope_maps_error_status() {
    let err = decode_envelope::<LoginToken>(401, r#"{"status_code":401,"detail":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            detail: "Invalid credentials".to_owned()
        }
    );
}

#[test]
fn decode_envelope_rejects_missing_data_and_bad_json() {
    assert!(matches!(
        decode_envelope::<User>(200, r#"{"success":true}"#),
        Err(ApiError::Decode(_))
    ));
    assert!(matches!(decode_envelope::<User>(200, "<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_paged_reads_page_counters() {
    let page: PagedResponse<Category> =
        decode_paged(200, r#"{"data":[{"id":"c","name":"Phones"}],"pages":4,"page_number":2}"#).unwrap();
    assert_eq!(page.pages, 4);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.data[0].name, "Phones");
    assert!(matches!(decode_paged::<Category>(500, "oops"), Err(ApiError::Status { status: 500, .. })));
}

#[test]
fn decode_status_only_checks_code() {
    assert_eq!(decode_status(204, ""), Ok(()));
    assert!(decode_status(403, r#"{"detail":"Unauthorized"}"#).is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stubs_report_unavailable() {
    let result = futures::executor::block_on(fetch_profile());
    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(logout()), Err(ApiError::Unavailable));
}
