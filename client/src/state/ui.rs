//! Layout mode state.
//!
//! DESIGN
//! ======
//! Kept apart from auth and search so presentation switches never touch
//! domain state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::MOBILE_BREAKPOINT_PX;

/// Viewport-driven layout flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Narrow layout: auth forms show an inline "switch form" link instead
    /// of the side panel.
    pub is_mobile: bool,
}

impl UiState {
    /// Build state for a viewport `width` in CSS pixels.
    pub fn for_viewport(width: f64) -> Self {
        Self {
            is_mobile: is_mobile_width(width),
        }
    }

    /// Build state from the browser window; desktop layout outside the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(MOBILE_BREAKPOINT_PX);
            Self::for_viewport(width)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

/// Whether `width` falls below the mobile breakpoint.
pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}
