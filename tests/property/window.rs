//! Window selection properties.

use proptest::prelude::*;
use serpkit::{select_page_window, Pager};

// ============================================================================
// STRATEGIES
// ============================================================================

/// `(total, current, window)` with `1 <= current <= total` and `1 <= window <= total`.
fn window_case() -> impl Strategy<Value = (u32, u32, usize)> {
    (1u32..300).prop_flat_map(|total| (Just(total), 1..=total, 1..=total as usize))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Exactly `min(w, N)` contiguous in-range pages containing the current one.
    #[test]
    fn prop_window_is_full_contiguous_and_holds_current((total, current, window) in window_case()) {
        let pages = select_page_window(total, current, window).unwrap();

        prop_assert_eq!(pages.len(), window.min(total as usize));
        prop_assert!(pages.contains(&current));
        prop_assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(pages[0] >= 1);
        prop_assert!(*pages.last().unwrap() <= total);
    }

    /// Away from the ends the current page sits at index `w / 2`.
    #[test]
    fn prop_window_is_centered_away_from_edges((total, current, window) in window_case()) {
        let half = (window / 2) as u32;
        let fits_left = current > half;
        let fits_right = u64::from(current - half.min(current)) + window as u64 - 1 <= u64::from(total);
        prop_assume!(fits_left && fits_right);

        let pages = select_page_window(total, current, window).unwrap();
        prop_assert_eq!(pages[0], current - half);
    }

    /// A window at least as large as the page count shows every page.
    #[test]
    fn prop_oversized_window_shows_everything(total in 1u32..100, extra in 0usize..20, pick in any::<prop::sample::Index>()) {
        let current = pick.index(total as usize) as u32 + 1;
        let pages = select_page_window(total, current, total as usize + extra).unwrap();
        prop_assert_eq!(pages, (1..=total).collect::<Vec<_>>());
    }

    /// Previous/next exist exactly when the current page is not at that end.
    #[test]
    fn prop_pager_neighbors((total, current, window) in window_case()) {
        let pager = Pager::new(current, total, window).unwrap();
        prop_assert_eq!(pager.previous.is_some(), current > 1);
        prop_assert_eq!(pager.next.is_some(), current < total);
        prop_assert_eq!(pager.pages, select_page_window(total, current, window).unwrap());
    }
}
