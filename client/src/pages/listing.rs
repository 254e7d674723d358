//! Shared auction-list loading for the home, listing and category pages.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::api::AuctionPage;
use crate::net::types::Auction;

/// One fetched page of auctions plus request status.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub items: Vec<Auction>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            loading: false,
        }
    }
}

impl ListingState {
    /// Apply a finished fetch. Items, page and page count change together and
    /// only on success; the loading flag is always cleared.
    pub fn finish(&mut self, result: Result<AuctionPage, ApiError>) {
        if let Ok(loaded) = result {
            self.items = loaded.items;
            self.page = loaded.page;
            self.total_pages = loaded.total_pages.max(1);
        }
        self.loading = false;
    }
}

/// Fetch `page` into `listing`. Failures are logged and leave the previous
/// page in place.
pub fn load_page(listing: RwSignal<ListingState>, page: u32, per_page: u32) {
    listing.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_auctions(page, per_page).await;
        if let Err(e) = &result {
            log::error!("fetch auctions page {page} failed: {e}");
        }
        listing.update(|s| s.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, per_page);
        listing.update(|s| s.finish(Err(ApiError::Unavailable)));
    }
}
