//! Client-side state containers.
//!
//! DESIGN
//! ======
//! Each store is a plain struct with setter methods. `App` wraps one instance
//! of each in an `RwSignal` and provides it through context, so components
//! share a single instance while tests construct isolated ones directly.

pub mod auth;
pub mod search;
pub mod ui;
