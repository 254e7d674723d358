//! REST helpers for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! calls are only meaningful in the browser.
//!
//! AUTH TRANSPORT
//! ==============
//! A single bearer-token strategy: login stores the token in `localStorage`
//! and every authenticated call sends `Authorization: Bearer <token>`.
//! Cookie credentials are never used.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` and decide whether to log; nothing here
//! panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::types::{ApiResponse, PagedResponse};
use super::types::{Auction, Bid, Category, CreateBidRequest, CreateItemRequest, Item, LoginToken, RegisterRequest, User};
use crate::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::pagination::page_count;

/// One page of auctions as served, with the page the server actually returned.
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionPage {
    pub items: Vec<Auction>,
    pub page: u32,
    pub total_pages: u32,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_PATH: &str = "/users/login";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const REGISTER_PATH: &str = "/users/register";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const PROFILE_PATH: &str = "/users/profile";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGOUT_PATH: &str = "/users/logout";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const CATEGORIES_PATH: &str = "/categories/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const BIDS_PATH: &str = "/bids/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const ITEMS_PATH: &str = "/items/";

/// The backend's only public auction listing. It serves active, non-private
/// auctions; the paging query follows `PagedQuery` bounds.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const TRENDING_AUCTIONS_PATH: &str = "/landing/trending_auctions";

/// `PagedQuery` caps `per_page` at this value.
#[cfg(any(test, feature = "hydrate"))]
const MAX_PER_PAGE: u32 = 100;

#[cfg(any(test, feature = "hydrate"))]
fn auctions_endpoint(page: u32, per_page: u32) -> String {
    format!(
        "{TRENDING_AUCTIONS_PATH}?page={}&per_page={}",
        page.max(1),
        per_page.clamp(1, MAX_PER_PAGE)
    )
}

/// Reduce a paged auction body to what the listing pages track. Counters the
/// backend leaves at zero fall back to the request and the item total.
#[cfg(any(test, feature = "hydrate"))]
fn auction_page(paged: PagedResponse<Auction>, requested_page: u32, per_page: u32) -> AuctionPage {
    let page = if paged.page_number == 0 { requested_page.max(1) } else { paged.page_number };
    let total_pages = if paged.pages == 0 {
        let per_page = if paged.per_page == 0 { per_page } else { paged.per_page };
        page_count(paged.total, per_page)
    } else {
        paged.pages
    };
    AuctionPage {
        items: paged.data,
        page,
        total_pages,
    }
}

/// Pick one auction out of a listing by id.
#[cfg(any(test, feature = "hydrate"))]
fn find_auction(auctions: Vec<Auction>, auction_id: &str) -> Result<Auction, ApiError> {
    let wanted = auction_id.trim();
    auctions
        .into_iter()
        .find(|a| a.id == wanted)
        .ok_or_else(|| ApiError::Status {
            status: 404,
            detail: format!("auction {wanted} not found"),
        })
}

/// Decode an `ApiResponse<T>` body, mapping non-2xx statuses to errors.
#[cfg(any(test, feature = "hydrate"))]
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    let envelope: ApiResponse<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response has no data".to_owned()))
}

/// Decode a `PagedResponse<T>` body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_paged<T: DeserializeOwned>(status: u16, body: &str) -> Result<PagedResponse<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check only the status of a response whose body is not needed.
#[cfg(any(test, feature = "hydrate"))]
fn decode_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body))
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};

    use crate::config::api_url;
    use crate::error::ApiError;
    use crate::util::token::TokenStore;

    pub(super) fn get(path: &str) -> RequestBuilder {
        gloo_net::http::Request::get(&api_url(path))
    }

    pub(super) fn post(path: &str) -> RequestBuilder {
        gloo_net::http::Request::post(&api_url(path))
    }

    /// Attach the stored bearer token, failing if none is stored.
    pub(super) fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let header = TokenStore::browser().authorization().ok_or(ApiError::MissingToken)?;
        Ok(builder.header("Authorization", &header))
    }

    pub(super) async fn send_json<B: serde::Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<(u16, String), ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<(u16, String), ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    async fn read(resp: Response) -> Result<(u16, String), ApiError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }
}

/// Sign in via `POST /users/login`. `identifier` is a username or email.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response has no token.
pub async fn login(identifier: &str, password: &str) -> Result<LoginToken, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest {
            identifier: identifier.to_owned(),
            password: password.to_owned(),
        };
        let (status, body) = http::send_json(http::post(LOGIN_PATH), &payload).await?;
        decode_envelope(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /users/register`. The backend emails an OTP
/// and answers with a confirmation message.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send_json(http::post(REGISTER_PATH), request).await?;
        decode_status(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's profile from `GET /users/profile`.
///
/// # Errors
///
/// Returns `MissingToken` when nobody is signed in, or a request/decode error.
pub async fn fetch_profile() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send(http::authorized(http::get(PROFILE_PATH))?).await?;
        decode_envelope(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// End the server-side session via `POST /users/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send(http::authorized(http::post(LOGOUT_PATH))?).await?;
        decode_status(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// List product categories from `GET /categories/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send(http::get(CATEGORIES_PATH)).await?;
        decode_envelope(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of active auctions from `GET /landing/trending_auctions`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_auctions(page: u32, per_page: u32) -> Result<AuctionPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send(http::get(&auctions_endpoint(page, per_page))).await?;
        let paged: PagedResponse<Auction> = decode_paged(status, &body)?;
        Ok(auction_page(paged, page, per_page))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, per_page);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single auction (with its item).
///
/// The backend exposes no single-auction read, so this looks the id up in the
/// largest page of the public listing.
///
/// # Errors
///
/// Returns a 404 `Status` error when the id is not listed, or a request/decode
/// error.
pub async fn fetch_auction(auction_id: &str) -> Result<Auction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send(http::get(&auctions_endpoint(1, MAX_PER_PAGE))).await?;
        let paged: PagedResponse<Auction> = decode_paged(status, &body)?;
        find_auction(paged.data, auction_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auction_id;
        Err(ApiError::Unavailable)
    }
}

/// Place a bid via `POST /bids/`.
///
/// # Errors
///
/// Returns `MissingToken` when nobody is signed in, or a request/decode error.
pub async fn place_bid(request: &CreateBidRequest) -> Result<Bid, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send_json(http::authorized(http::post(BIDS_PATH))?, request).await?;
        decode_envelope(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// List a new item via `POST /items/`.
///
/// # Errors
///
/// Returns `MissingToken` when nobody is signed in, or a request/decode error.
pub async fn create_item(request: &CreateItemRequest) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = http::send_json(http::authorized(http::post(ITEMS_PATH))?, request).await?;
        decode_envelope(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
