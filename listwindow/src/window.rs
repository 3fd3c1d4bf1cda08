use alloc::sync::Arc;
use core::cell::Cell;
use core::cmp;

use crate::{
    GeometryError, RenderWindow, ScrollState, WindowOptions, should_request_next_page,
};

/// A headless windowed-list rendering engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never fetches data.
/// - A host drives it with viewport geometry, scroll offsets, and loaded-item counts.
/// - Rendering queries (`window`, `window_for`) are pure functions of the supplied inputs.
///
/// For the scroll-surface seam (mount/unmount, smooth scroll-to-item), see the
/// `listwindow-adapter` crate.
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: WindowOptions,
    scroll_top: u64,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ListWindow {
    /// Creates a new engine from options.
    ///
    /// Fails fast on geometry precondition violations (`item_height == 0` or
    /// `viewport_height == 0`) instead of deferring a division by zero to render time.
    pub fn new(options: WindowOptions) -> Result<Self, GeometryError> {
        options.validate()?;
        lw_debug!(
            total_items = options.total_items,
            item_height = options.item_height,
            viewport_height = options.viewport_height,
            overscan = options.overscan,
            "ListWindow::new"
        );
        Ok(Self {
            scroll_top: options.initial_scroll_top,
            is_scrolling: false,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the whole option set, re-validating the geometry.
    pub fn set_options(&mut self, options: WindowOptions) -> Result<(), GeometryError> {
        options.validate()?;
        self.options = options;
        lw_trace!(
            total_items = self.options.total_items,
            item_height = self.options.item_height,
            viewport_height = self.options.viewport_height,
            "ListWindow::set_options"
        );
        self.notify();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut WindowOptions),
    ) -> Result<(), GeometryError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_fetch_next_page(
        &mut self,
        fetch_next_page: Option<impl Fn() + Send + Sync + 'static>,
    ) {
        self.options.fetch_next_page = fetch_next_page.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// A scroll event typically updates the offset and the scrolling flag together; without
    /// batching each setter would fire `on_change`, which usually drives a re-render.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn total_items(&self) -> usize {
        self.options.total_items
    }

    /// Updates the loaded-item count, e.g. after a page of data arrives.
    pub fn set_total_items(&mut self, total_items: usize) {
        if self.options.total_items == total_items {
            return;
        }
        self.options.total_items = total_items;
        self.notify();
    }

    pub fn item_height(&self) -> u32 {
        self.options.item_height
    }

    pub fn set_item_height(&mut self, item_height: u32) -> Result<(), GeometryError> {
        if item_height == 0 {
            return Err(GeometryError::ZeroItemHeight);
        }
        if self.options.item_height != item_height {
            self.options.item_height = item_height;
            self.notify();
        }
        Ok(())
    }

    pub fn viewport_height(&self) -> u32 {
        self.options.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) -> Result<(), GeometryError> {
        if viewport_height == 0 {
            return Err(GeometryError::ZeroViewportHeight);
        }
        if self.options.viewport_height != viewport_height {
            self.options.viewport_height = viewport_height;
            self.notify();
        }
        Ok(())
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn set_scroll_top(&mut self, scroll_top: u64) {
        if self.scroll_top == scroll_top {
            return;
        }
        self.scroll_top = scroll_top;
        self.notify();
    }

    pub fn set_scroll_top_clamped(&mut self, scroll_top: u64) {
        self.set_scroll_top(self.clamp_scroll_top(scroll_top));
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Marks a scroll event at `now_ms` and (re)arms the settle timer.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Applies a scroll offset update from the host (wheel/drag), marking the engine as
    /// scrolling. Coalesces into a single `on_change` notification.
    pub fn apply_scroll_event(&mut self, scroll_top: u64, now_ms: u64) {
        lw_trace!(scroll_top, now_ms, "apply_scroll_event");
        self.batch_update(|w| {
            w.set_scroll_top(scroll_top);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_event`, but clamps the offset to the scrollable range.
    pub fn apply_scroll_event_clamped(&mut self, scroll_top: u64, now_ms: u64) {
        lw_trace!(scroll_top, now_ms, "apply_scroll_event_clamped");
        self.batch_update(|w| {
            w.set_scroll_top_clamped(scroll_top);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Resets `is_scrolling` once the settle delay has elapsed with no new scroll events.
    ///
    /// The settle flag is advisory only (hosts may use it to skip expensive per-frame work); it
    /// never gates `window()`, which always reflects the latest offset.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.scroll_settle_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Returns a snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            scroll_top: self.scroll_top,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// When `state.is_scrolling` is `true`, the settle timer is armed as if a scroll event
    /// happened at `now_ms`.
    pub fn restore_scroll_state(&mut self, state: ScrollState, now_ms: u64) {
        if state.is_scrolling {
            self.apply_scroll_event_clamped(state.scroll_top, now_ms);
            return;
        }
        self.batch_update(|w| {
            w.set_scroll_top_clamped(state.scroll_top);
            w.set_is_scrolling(false);
        });
    }

    /// Pixel height of the full list: `total_items * item_height`, exactly.
    pub fn total_height(&self) -> u64 {
        self.options.total_items as u64 * self.options.item_height as u64
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.options.viewport_height as u64)
    }

    pub fn clamp_scroll_top(&self, scroll_top: u64) -> u64 {
        scroll_top.min(self.max_scroll_top())
    }

    /// Computes the render window for the current scroll offset.
    pub fn window(&self) -> RenderWindow {
        self.window_for(self.scroll_top)
    }

    /// Computes the render window for an arbitrary scroll offset.
    ///
    /// Pure and idempotent: identical inputs yield identical output. Offsets beyond the
    /// scrollable range are clamped first, which keeps `start_index <= end_index` for any
    /// `scroll_top`. Increasing `scroll_top` never decreases `start_index`.
    pub fn window_for(&self, scroll_top: u64) -> RenderWindow {
        let total_items = self.options.total_items;
        if total_items == 0 {
            return RenderWindow::default();
        }

        let item_height = self.options.item_height as u64;
        let scroll_top = self.clamp_scroll_top(scroll_top);

        let first_visible = (scroll_top / item_height) as usize;
        let visible_count = (self.options.viewport_height as u64).div_ceil(item_height) as usize;
        let overscan = self.options.overscan;

        let start_index = first_visible.saturating_sub(overscan);
        let end_index = cmp::min(
            total_items - 1,
            first_visible
                .saturating_add(visible_count)
                .saturating_add(overscan),
        );

        RenderWindow {
            start_index,
            end_index,
            len: end_index - start_index + 1,
            total_height: total_items as u64 * item_height,
            offset_y: start_index as u64 * item_height,
        }
    }

    /// The target offset for placing `index` at the top of the viewport, clamped to the
    /// scrollable range.
    ///
    /// This only computes the offset; actually moving a scroll surface (with smooth motion) is
    /// the adapter's job.
    pub fn scroll_to_index_offset(&self, index: usize) -> u64 {
        if self.options.total_items == 0 {
            return 0;
        }
        let index = index.min(self.options.total_items - 1);
        self.clamp_scroll_top(index as u64 * self.options.item_height as u64)
    }

    /// Invokes the configured `fetch_next_page` collaborator when the current window has reached
    /// the trailing threshold, more pages exist, and no fetch is outstanding.
    ///
    /// Returns whether the callback fired. `has_next_page` and `is_fetching_next_page` are owned
    /// and reported by the external data layer; the engine holds no fetch state of its own, so a
    /// second call with `is_fetching_next_page == true` is a no-op.
    pub fn request_next_page_if_needed(
        &self,
        has_next_page: bool,
        is_fetching_next_page: bool,
    ) -> bool {
        let window = self.window();
        if !should_request_next_page(
            &window,
            self.options.total_items,
            has_next_page,
            is_fetching_next_page,
        ) {
            return false;
        }
        let Some(fetch) = &self.options.fetch_next_page else {
            return false;
        };
        lw_debug!(
            end_index = window.end_index,
            total_items = self.options.total_items,
            "request_next_page_if_needed: firing fetch_next_page"
        );
        fetch();
        true
    }
}
