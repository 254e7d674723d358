use super::*;

fn search(terms: &str, category: &str) -> SearchState {
    SearchState {
        search_terms: terms.to_owned(),
        category: category.to_owned(),
    }
}

#[test]
fn results_heading_covers_filter_combinations() {
    assert_eq!(results_heading(&search("", "")), "All Categories");
    assert_eq!(results_heading(&search("", "smartwatch")), "Smartwatch");
    assert_eq!(results_heading(&search(" ps5 ", "")), "Results for \"ps5\"");
    assert_eq!(results_heading(&search("nikon", "camera")), "Results for \"nikon\" in Camera");
}
