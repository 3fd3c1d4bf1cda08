/// The computed slice of the list to render, derived from scroll state and viewport geometry.
///
/// A `RenderWindow` is recomputed from scratch on every relevant state change and never mutated
/// in place. `end_index` is **inclusive**; an empty window (a list with zero items) has
/// `len == 0` and both indices set to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderWindow {
    /// First renderable index (overscan included).
    pub start_index: usize,
    /// Last renderable index, inclusive (overscan included). Only meaningful when `len > 0`.
    pub end_index: usize,
    /// Number of indices in the window.
    pub len: usize,
    /// Pixel height of the full list (`total_items * item_height`). Used to size the spacer.
    pub total_height: u64,
    /// Pixel translation of the rendered slice (`start_index * item_height`), so the slice lands
    /// at its true position inside the full-height spacer.
    pub offset_y: u64,
}

impl RenderWindow {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The ordered renderable indices, without allocating.
    pub fn indices(&self) -> core::ops::Range<usize> {
        self.start_index..self.start_index.saturating_add(self.len)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.len > 0 && index >= self.start_index && index <= self.end_index
    }
}
