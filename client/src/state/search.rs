//! Search-filter state shared by the nav bar, category panel and results page.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Free-text search term and selected category. The fields are independent
/// and neither is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub search_terms: String,
    pub category: String,
}

impl SearchState {
    pub fn set_search_terms(&mut self, search_terms: impl Into<String>) {
        self.search_terms = search_terms.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }
}
