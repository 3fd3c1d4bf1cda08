use alloc::sync::Arc;

use crate::GeometryError;
use crate::window::ListWindow;

/// A callback fired when the engine's state changes.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&ListWindow, bool) + Send + Sync>;

/// The "fetch more" collaborator supplied by an external data layer.
///
/// The engine never awaits the fetch or inspects its outcome; it only decides *when* to invoke
/// this. Outstanding-request bookkeeping stays with the data layer, which reports it back through
/// the `is_fetching_next_page` flag passed to
/// [`ListWindow::request_next_page_if_needed`].
pub type FetchNextPage = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`ListWindow`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so hosts can tweak a few fields and call
/// `ListWindow::set_options` without reallocating closures.
pub struct WindowOptions {
    /// Number of items currently loaded. The engine does not own the collection; hosts update
    /// this as pages arrive.
    pub total_items: usize,
    /// Uniform pixel height of every item. Must be positive.
    pub item_height: u32,
    /// Pixel height of the scroll container. Must be positive.
    pub viewport_height: u32,
    /// Extra items rendered beyond the visible slice on each side, to hide pop-in during fast
    /// scrolling.
    pub overscan: usize,
    /// Quiet period after the last scroll event before `is_scrolling` resets to `false`.
    pub scroll_settle_delay_ms: u64,
    /// Scroll offset applied at construction.
    pub initial_scroll_top: u64,
    /// Optional callback fired when the engine's state changes.
    pub on_change: Option<OnChangeCallback>,
    /// Optional pagination collaborator, see [`FetchNextPage`].
    pub fetch_next_page: Option<FetchNextPage>,
}

impl WindowOptions {
    pub fn new(total_items: usize, item_height: u32, viewport_height: u32) -> Self {
        Self {
            total_items,
            item_height,
            viewport_height,
            overscan: 5,
            scroll_settle_delay_ms: 150,
            initial_scroll_top: 0,
            on_change: None,
            fetch_next_page: None,
        }
    }

    /// Checks the geometry preconditions the range math relies on.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.item_height == 0 {
            return Err(GeometryError::ZeroItemHeight);
        }
        if self.viewport_height == 0 {
            return Err(GeometryError::ZeroViewportHeight);
        }
        Ok(())
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_scroll_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_settle_delay_ms = delay_ms;
        self
    }

    pub fn with_initial_scroll_top(mut self, scroll_top: u64) -> Self {
        self.initial_scroll_top = scroll_top;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_fetch_next_page(
        mut self,
        fetch_next_page: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.fetch_next_page = fetch_next_page.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            total_items: self.total_items,
            item_height: self.item_height,
            viewport_height: self.viewport_height,
            overscan: self.overscan,
            scroll_settle_delay_ms: self.scroll_settle_delay_ms,
            initial_scroll_top: self.initial_scroll_top,
            on_change: self.on_change.clone(),
            fetch_next_page: self.fetch_next_page.clone(),
        }
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("total_items", &self.total_items)
            .field("item_height", &self.item_height)
            .field("viewport_height", &self.viewport_height)
            .field("overscan", &self.overscan)
            .field("scroll_settle_delay_ms", &self.scroll_settle_delay_ms)
            .field("initial_scroll_top", &self.initial_scroll_top)
            .finish_non_exhaustive()
    }
}
