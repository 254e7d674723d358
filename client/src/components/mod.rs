//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and interaction surfaces while
//! reading/writing shared stores from Leptos context providers.

pub mod auth_input;
pub mod bid_modal;
pub mod breadcrumbs;
pub mod category_card;
pub mod category_filter;
pub mod item_bid;
pub mod nav;
pub mod pagination;
pub mod product_card;
pub mod protected_route;
