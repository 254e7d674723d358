//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, navigation) and
//! delegates rendering details to `components`.

pub mod add_product;
pub mod category;
pub mod dashboard;
pub mod detail;
pub mod home;
pub(crate) mod listing;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
pub mod view_all;
