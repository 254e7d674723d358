//! Wire DTOs for the marketplace backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response envelopes and schemas. Optional
//! or late-added fields carry `#[serde(default)]` so older deployments still
//! decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

fn default_true() -> bool {
    true
}

fn default_ok_status() -> u16 {
    200
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// The backend defaults a missing joined item to `{}`. Anything that does not
/// decode as a full `Item` reads as absent so one bare row cannot fail a list.
fn item_or_empty<'de, D>(deserializer: D) -> Result<Option<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// Standard success envelope: every endpoint wraps its payload in `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default = "default_ok_status")]
    pub status_code: u16,
    pub data: Option<T>,
}

/// Paged list envelope used by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub per_page: u32,
}

/// Failure envelope. `detail` is a string for domain errors and a list of
/// objects for request validation errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Human-readable detail for logs.
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => self.message.clone().unwrap_or_default(),
            other => other.to_string(),
        }
    }
}

/// Body for `POST /users/login`. `identifier` is a username or email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Token returned by a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

/// Body for `POST /users/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// The signed-in user's profile as returned by `GET /users/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// "First Last", falling back to the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// A top-level product category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Hosted image reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLink {
    pub link: String,
    #[serde(default)]
    pub public_id: String,
}

/// A product offered for auction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub sellers_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub starting_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub image_link: Option<ImageLink>,
    /// Category name, when the backend joins it onto the item.
    #[serde(default)]
    pub category: Option<String>,
}

/// Body for `POST /items/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub sellers_id: String,
    pub name: String,
    pub description: String,
    pub starting_price: f64,
    pub image_link: ImageLink,
}

/// Lifecycle state of an auction. `Cancelled` keeps the backend's spelling on
/// the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
    #[serde(rename = "cancled")]
    Cancelled,
    #[default]
    Pending,
}

/// An auction listing with its item joined in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    #[serde(default)]
    pub private: bool,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub status: AuctionStatus,
    pub start_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub buy_now: bool,
    #[serde(default)]
    pub buy_now_price: Option<f64>,
    #[serde(default, deserialize_with = "item_or_empty")]
    pub items: Option<Item>,
    #[serde(default)]
    pub bid_count: u32,
}

impl Auction {
    /// Current price if bidding has started, else the opening price.
    pub fn display_price(&self) -> f64 {
        self.current_price.unwrap_or(self.start_price)
    }

    /// Item name, or a placeholder when the item was not joined in.
    pub fn title(&self) -> String {
        self.items
            .as_ref()
            .map_or_else(|| "Untitled item".to_owned(), |item| item.name.clone())
    }

    pub fn image_url(&self) -> Option<String> {
        self.items
            .as_ref()
            .and_then(|item| item.image_link.as_ref())
            .map(|img| img.link.clone())
    }
}

/// Body for `POST /bids/`. The server fills in the bidder from the token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateBidRequest {
    pub auction_id: String,
    pub amount: f64,
}

/// A placed bid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub auction_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub amount: f64,
}
