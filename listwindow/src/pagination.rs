use crate::RenderWindow;

/// Trailing margin, in items, at which the next page should be requested: the trigger fires once
/// the window's end index reaches `total_items - FETCH_MARGIN`.
pub const FETCH_MARGIN: usize = 10;

/// Decides whether a "fetch more" request should be issued for the current render window.
///
/// The decision is stateless: at-most-once-per-crossing follows from the external data layer
/// flipping `is_fetching_next_page` to `true` immediately after the fetch is started, and
/// `has_next_page == false` permanently disables pagination.
///
/// When fewer than [`FETCH_MARGIN`] items are loaded the threshold saturates to zero, so a short
/// initial page eagerly requests the next one. An empty window (zero items) never triggers,
/// regardless of `has_next_page`.
pub fn should_request_next_page(
    window: &RenderWindow,
    total_items: usize,
    has_next_page: bool,
    is_fetching_next_page: bool,
) -> bool {
    if window.is_empty() || !has_next_page || is_fetching_next_page {
        return false;
    }
    window.end_index >= total_items.saturating_sub(FETCH_MARGIN)
}
