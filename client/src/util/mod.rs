//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page and component logic to improve reuse and testability.

pub mod breadcrumbs;
pub mod countdown;
pub mod format;
pub mod listing;
pub mod pagination;
pub mod session_cache;
pub mod storage;
pub mod token;
