//! Client-side filtering and ordering of auction listings.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::Auction;
use crate::state::search::SearchState;

/// Listing order offered by the "Sorted by" control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    MostPopular,
    EndingSoon,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [
        Self::MostPopular,
        Self::EndingSoon,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MostPopular => "Most Popular",
            Self::EndingSoon => "Ending Soon",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
        }
    }
}

/// Keep auctions matching the search term (item name or description,
/// case-insensitive) and the selected category. Blank filters match all.
///
/// The category filter only applies when at least one listed item carries a
/// category; the backend's item schema has none, and a filter nothing can
/// satisfy would empty every page.
pub fn filter_listings(auctions: &[Auction], search: &SearchState) -> Vec<Auction> {
    let terms = search.search_terms.trim().to_lowercase();
    let category = if auctions.iter().any(|a| item_category(a).is_some()) {
        search.category.trim()
    } else {
        ""
    };
    auctions
        .iter()
        .filter(|auction| matches_terms(auction, &terms) && matches_category(auction, category))
        .cloned()
        .collect()
}

fn matches_terms(auction: &Auction, terms: &str) -> bool {
    if terms.is_empty() {
        return true;
    }
    auction.items.as_ref().is_some_and(|item| {
        item.name.to_lowercase().contains(terms) || item.description.to_lowercase().contains(terms)
    })
}

fn item_category(auction: &Auction) -> Option<&str> {
    auction.items.as_ref().and_then(|item| item.category.as_deref())
}

fn matches_category(auction: &Auction, category: &str) -> bool {
    category.is_empty() || item_category(auction).is_some_and(|c| c.eq_ignore_ascii_case(category))
}

/// Sort auctions in place. Ties keep their server order.
pub fn sort_listings(auctions: &mut [Auction], order: SortOrder) {
    match order {
        SortOrder::MostPopular => auctions.sort_by(|a, b| b.bid_count.cmp(&a.bid_count)),
        // ISO-8601 timestamps in one offset order lexically.
        SortOrder::EndingSoon => auctions.sort_by(|a, b| a.end_date.cmp(&b.end_date)),
        SortOrder::PriceLowToHigh => auctions.sort_by(|a, b| a.display_price().total_cmp(&b.display_price())),
        SortOrder::PriceHighToLow => auctions.sort_by(|a, b| b.display_price().total_cmp(&a.display_price())),
    }
}
