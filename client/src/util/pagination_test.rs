use super::*;

use PageEntry::{Ellipsis, Page};

#[test]
fn middle_page_of_ten_has_both_ellipses() {
    assert_eq!(
        page_window(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn small_total_has_no_ellipses() {
    assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(page_window(1, 3), vec![Page(1), Page(2)]);
    assert_eq!(page_window(3, 3), vec![Page(2), Page(3)]);
    assert_eq!(page_window(1, 1), vec![Page(1)]);
}

#[test]
fn first_page_of_many() {
    assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
}

#[test]
fn last_page_of_many() {
    assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
}

#[test]
fn head_without_ellipsis_at_page_four() {
    assert_eq!(page_window(4, 10), vec![Page(1), Page(3), Page(4), Page(5), Ellipsis, Page(10)]);
}

#[test]
fn tail_without_ellipsis_three_from_end() {
    assert_eq!(page_window(7, 10), vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(10)]);
}

#[test]
fn window_always_contains_current_page() {
    for total in 1..=25 {
        for current in 1..=total {
            assert!(
                page_window(current, total).contains(&Page(current)),
                "current={current} total={total}"
            );
        }
    }
}

#[test]
fn window_starts_with_one_then_ellipsis_past_page_four() {
    for total in 5..=25 {
        for current in 5..=total {
            let window = page_window(current, total);
            assert_eq!(&window[..2], &[Page(1), Ellipsis], "current={current} total={total}");
        }
    }
}

#[test]
fn window_ends_with_ellipsis_then_last_page() {
    for total in 5..=25_u32 {
        for current in 1..total.saturating_sub(3) {
            let window = page_window(current, total);
            assert_eq!(
                &window[window.len() - 2..],
                &[Ellipsis, Page(total)],
                "current={current} total={total}"
            );
        }
    }
}

#[test]
fn page_numbers_are_strictly_increasing() {
    for total in 1..=25 {
        for current in 1..=total {
            let pages: Vec<u32> = page_window(current, total).into_iter().filter_map(|e| match e { Page(n) => Some(n), Ellipsis => None }).collect();
            assert!(pages.windows(2).all(|w| w[0] < w[1]), "current={current} total={total}");
        }
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(page_window(0, 10), page_window(1, 10));
    assert_eq!(page_window(99, 10), page_window(10, 10));
    assert_eq!(page_window(3, 0), vec![Page(1)]);
}

#[test]
fn is_selectable_guards_bounds() {
    assert!(!is_selectable(0, 5));
    assert!(is_selectable(1, 5));
    assert!(is_selectable(5, 5));
    assert!(!is_selectable(6, 5));
    assert!(!is_selectable(-1, 5));
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 8), 1);
    assert_eq!(page_count(8, 8), 1);
    assert_eq!(page_count(9, 8), 2);
    assert_eq!(page_count(10, 0), 1);
}

#[test]
fn entries_render_as_labels() {
    assert_eq!(Page(7).to_string(), "7");
    assert_eq!(Ellipsis.to_string(), "...");
}
