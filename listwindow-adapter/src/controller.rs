use listwindow::{GeometryError, ListWindow, RenderWindow, WindowOptions};

use crate::{Easing, ScrollBehavior, ScrollSurface, SmoothMotion};

/// A controller that mounts a [`ListWindow`] onto a host scroll surface.
///
/// It owns the three stateful responsibilities around the pure range math:
/// - **Scroll tracking**: the host forwards native scroll signals to [`Self::on_scroll`]; the
///   controller reads the surface offset and publishes it (with `is_scrolling = true`), and
///   [`Self::tick`] settles the flag after the quiet period.
/// - **Scroll-to-item**: [`Self::scroll_to_item`] issues a smooth, fire-and-forget scroll
///   command; [`Self::glide_to_item`] is the tick-driven fallback for surfaces without native
///   smooth scrolling.
/// - **Teardown**: [`Self::detach`] cancels pending motion and the settle timer in one step, so
///   no callback ever fires against a disposed surface. All entry points are benign no-ops while
///   unmounted.
#[derive(Clone, Debug)]
pub struct SurfaceController<S> {
    window: ListWindow,
    surface: Option<S>,
    motion: Option<SmoothMotion>,
}

impl<S: ScrollSurface> SurfaceController<S> {
    pub fn new(options: WindowOptions) -> Result<Self, GeometryError> {
        Ok(Self {
            window: ListWindow::new(options)?,
            surface: None,
            motion: None,
        })
    }

    pub fn from_window(window: ListWindow) -> Self {
        Self {
            window,
            surface: None,
            motion: None,
        }
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut ListWindow {
        &mut self.window
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mounts a scroll surface, syncing the engine to its current offset.
    ///
    /// Returns the previously mounted surface, if any. The subscription is per mounted surface:
    /// one `attach`, one matching [`Self::detach`].
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.window.set_scroll_top_clamped(surface.scroll_top());
        self.surface.replace(surface)
    }

    /// Unmounts the surface, synchronously cancelling pending motion and the settle timer.
    ///
    /// After this returns, scroll signals and ticks no longer produce state updates.
    pub fn detach(&mut self) -> Option<S> {
        self.motion = None;
        self.window.set_is_scrolling(false);
        self.surface.take()
    }

    pub fn is_gliding(&self) -> bool {
        self.motion.is_some()
    }

    pub fn cancel_glide(&mut self) {
        self.motion = None;
    }

    /// Forwards a native scroll signal: reads the surface's current offset and publishes it.
    ///
    /// A user scroll takes priority over any in-flight glide. No-op while unmounted, so a stray
    /// signal after teardown is harmless.
    pub fn on_scroll(&mut self, now_ms: u64) {
        let Some(surface) = &self.surface else {
            return;
        };
        let offset = surface.scroll_top();
        self.motion = None;
        self.window.apply_scroll_event(offset, now_ms);
    }

    /// Scrolls the surface so `index` lands at the top of the viewport, with smooth motion.
    ///
    /// Fire-and-forget: the surface animates on its own and no completion is reported. Calling
    /// this before a surface is mounted is a silent no-op (a common race during initial render).
    pub fn scroll_to_item(&mut self, index: usize) {
        let target = self.window.scroll_to_index_offset(index);
        let Some(surface) = &mut self.surface else {
            return;
        };
        surface.scroll_to(target, ScrollBehavior::Smooth);
    }

    /// Starts a tick-driven glide toward `index`, for surfaces without native smooth scrolling.
    ///
    /// Returns the clamped target offset, or `None` while unmounted. An in-flight glide is
    /// retargeted from its current position.
    pub fn glide_to_item(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<u64> {
        if self.surface.is_none() {
            return None;
        }
        let to = self.window.scroll_to_index_offset(index);
        match &mut self.motion {
            Some(motion) => motion.retarget(now_ms, to, duration_ms),
            None => {
                self.motion = Some(SmoothMotion::new(
                    self.window.scroll_top(),
                    to,
                    now_ms,
                    duration_ms,
                    easing,
                ));
            }
        }
        Some(to)
    }

    /// Advances the controller by one host frame.
    ///
    /// - With a glide in flight: pushes the interpolated offset to the surface and the engine,
    ///   and returns the new offset.
    /// - Otherwise: runs settle debouncing and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let Some(motion) = self.motion else {
            self.window.update_scrolling(now_ms);
            return None;
        };
        let Some(surface) = &mut self.surface else {
            return None;
        };

        let offset = motion.position_at(now_ms);
        surface.scroll_to(offset, ScrollBehavior::Auto);
        self.window.apply_scroll_event_clamped(offset, now_ms);

        if motion.finished(now_ms) {
            self.motion = None;
            self.window.set_is_scrolling(false);
        }

        Some(self.window.scroll_top())
    }

    /// The render window for the engine's current state.
    pub fn render_window(&self) -> RenderWindow {
        self.window.window()
    }

    /// Polls the pagination trigger against the current window.
    ///
    /// Both flags are owned by the external data layer; this only invokes the engine's
    /// `fetch_next_page` collaborator when the trailing threshold has been crossed.
    pub fn poll_next_page(&self, has_next_page: bool, is_fetching_next_page: bool) -> bool {
        self.window
            .request_next_page_if_needed(has_next_page, is_fetching_next_page)
    }
}
