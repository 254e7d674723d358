//! Page-window math for the listing paginator.
//!
//! The window always shows the current page and its immediate neighbours.
//! Page 1 is pinned at the front once the current page is past 3, with an
//! ellipsis between once it is past 4; the last page is pinned symmetrically.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::fmt;

/// One marker in the rendered page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Compute the page selector entries for `current_page` of `total_pages`.
///
/// Out-of-range input is clamped: `total_pages` to at least 1, and
/// `current_page` into `[1, total_pages]`.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    let (cur, last) = (i64::from(current), i64::from(total));

    let mut pages = Vec::with_capacity(7);

    if cur > 3 {
        pages.push(PageEntry::Page(1));
        if cur > 4 {
            pages.push(PageEntry::Ellipsis);
        }
    }

    for n in current.saturating_sub(1).max(1)..=current.saturating_add(1).min(total) {
        pages.push(PageEntry::Page(n));
    }

    if cur < last - 2 {
        if cur < last - 3 {
            pages.push(PageEntry::Ellipsis);
        }
        pages.push(PageEntry::Page(total));
    }

    pages
}

/// Whether `page` is a valid navigation target. Clicks outside
/// `[1, total_pages]` are ignored.
pub fn is_selectable(page: i64, total_pages: u32) -> bool {
    page >= 1 && page <= i64::from(total_pages)
}

/// Number of pages needed to show `total_items` at `per_page` per page.
pub fn page_count(total_items: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    total_items.div_ceil(per_page).max(1)
}
