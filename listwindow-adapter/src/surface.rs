/// How a programmatic scroll command should move the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump to the offset immediately.
    Auto,
    /// Animate to the offset. Fire-and-forget: no completion signal is reported back.
    Smooth,
}

/// The host-owned scrollable element a [`crate::SurfaceController`] is mounted on.
///
/// While mounted, the surface handle is exclusively owned by the controller; everything else in
/// the pipeline sees only the derived numeric state.
pub trait ScrollSurface {
    /// The surface's current scroll offset, in pixels.
    fn scroll_top(&self) -> u64;

    /// Requests the surface move to `offset`.
    ///
    /// With [`ScrollBehavior::Smooth`] the surface animates on its own; the caller makes no
    /// guarantee about motion completion and does not wait for it.
    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior);
}
