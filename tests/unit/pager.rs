//! Pager window and pager model tests.

use crate::common::memory_store;
use serpkit::{
    offset_for_page, select_page_window, select_window, PageWindow, Pager, PagerError,
    ResultRange, SearchSettings, DEFAULT_WINDOW_SIZE,
};

// ============================================================================
// WINDOW SELECTION
// ============================================================================

#[test]
fn test_documented_windows() {
    assert_eq!(select_page_window(20, 5, 5).unwrap(), vec![3, 4, 5, 6, 7]);
    assert_eq!(select_page_window(20, 1, 5).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(select_page_window(20, 20, 5).unwrap(), vec![16, 17, 18, 19, 20]);
}

#[test]
fn test_near_edges_keep_full_width() {
    assert_eq!(select_page_window(20, 2, 5).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(select_page_window(20, 19, 5).unwrap(), vec![16, 17, 18, 19, 20]);
    assert_eq!(select_page_window(20, 20, 4).unwrap(), vec![17, 18, 19, 20]);
}

#[test]
fn test_default_window_walk() {
    let windows: Vec<Vec<u32>> = (1..=6)
        .map(|current| select_page_window(6, current, DEFAULT_WINDOW_SIZE).unwrap())
        .collect();
    assert_eq!(
        windows,
        vec![
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![2, 3, 4, 5],
            vec![3, 4, 5, 6],
            vec![3, 4, 5, 6],
        ]
    );
}

#[test]
fn test_window_over_labels() {
    let labels = ["a", "b", "c", "d", "e", "f"];
    assert_eq!(select_window(&labels, &"d", 3).unwrap(), &["c", "d", "e"]);
    assert!(matches!(
        select_window(&labels, &"z", 3),
        Err(PagerError::PageNotFound { .. })
    ));
}

#[test]
fn test_single_page() {
    assert_eq!(select_page_window(1, 1, 4).unwrap(), vec![1]);
    assert_eq!(select_page_window(1, 1, 1).unwrap(), vec![1]);
}

// ============================================================================
// PAGER MODEL
// ============================================================================

#[test]
fn test_page_window_validation() {
    assert_eq!(PageWindow::new(1, 0, 4), Err(PagerError::NoPages));
    assert_eq!(
        PageWindow::new(6, 5, 4),
        Err(PagerError::PageOutOfRange {
            current: 6,
            total: 5
        })
    );
    assert_eq!(PageWindow::new(1, 5, 0), Err(PagerError::EmptyWindow));
}

#[test]
fn test_ellipsis_until_the_tail_is_visible() {
    // total 10, window 4: shown while current - 1 < 10 - 2.5
    assert!(Pager::new(1, 10, 4).unwrap().ellipsis);
    assert!(Pager::new(8, 10, 4).unwrap().ellipsis);
    assert!(!Pager::new(9, 10, 4).unwrap().ellipsis);
    assert!(!Pager::new(10, 10, 4).unwrap().ellipsis);
}

#[test]
fn test_pager_serializes_camel_case() {
    let pager = Pager::new(2, 3, 4).unwrap();
    let json = serde_json::to_value(&pager).unwrap();
    assert_eq!(json["currentPage"], 2);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["pages"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["previous"], 1);
    assert_eq!(json["next"], 3);
}

#[test]
fn test_pager_from_results_agrees_with_settings() {
    let mut settings = SearchSettings::with_limit(16);
    settings.go_to_page(3).unwrap();

    let pager = Pager::for_results(settings.offset(), 16, 37, DEFAULT_WINDOW_SIZE)
        .unwrap()
        .unwrap();
    assert_eq!(pager.current_page, 3);
    assert_eq!(pager.total_pages, 3);
    assert_eq!(pager.next, None);

    assert_eq!(Pager::for_results(0, 16, 0, 4), Ok(None));
    assert_eq!(Pager::for_results(0, 0, 10, 4), Err(PagerError::ZeroLimit));
}

#[test]
fn test_result_range_summary() {
    let range = ResultRange::new(offset_for_page(3, 16), Some(16), 37).unwrap();
    assert_eq!(range.to_string(), "Showing 33-37 of 37 results");

    let range = ResultRange::new(0, None, 5).unwrap();
    assert_eq!((range.first, range.last), (1, 5));
    assert_eq!(ResultRange::new(0, Some(16), 0), None);
}

#[test]
fn test_result_range_survives_hostile_url_offset() {
    let store = memory_store("yext_offset=18446744073709551615&yext_limit=16");
    let settings = store.read().unwrap();
    assert_eq!(settings.offset(), u64::MAX);

    let range = ResultRange::new(settings.offset(), settings.limit(), 10).unwrap();
    assert_eq!(range.first, u64::MAX);
    assert_eq!(range.last, 10);
}
