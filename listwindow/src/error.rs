/// Precondition violations in the viewport geometry.
///
/// The range math divides by `item_height`, so a zero height is rejected at construction time
/// rather than producing a runtime default. Oversized `overscan` is not an error; it is clamped
/// by the window bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("item_height must be greater than zero")]
    ZeroItemHeight,
    #[error("viewport_height must be greater than zero")]
    ZeroViewportHeight,
}
