//! Frame identifier type.

use std::fmt;

/// Identifies a physical frame (a slot in a [`ResidentSet`]).
///
/// Using `usize` so frame metadata can live in a `Vec` indexed directly:
/// `counters[frame_id.0]`.
///
/// [`ResidentSet`]: crate::replacer::ResidentSet
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let hand = FrameId::new(2);
/// assert_eq!(hand.advance(3), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The next frame in a circular pool of `frames` slots.
    #[inline]
    pub fn advance(self, frames: usize) -> Self {
        FrameId((self.0 + 1) % frames)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
