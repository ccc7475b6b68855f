//! CLOCK (Second Chance) replacement policy.

use log::trace;

use super::{Access, PolicyKind, Replacer, ResidentSet};
use crate::common::{Capacity, FrameId, PageId};

/// Approximates LRU with one reference bit per frame and a rotating hand.
///
/// On a hit the frame's bit is set; the hand does not move. On a fault the
/// hand sweeps forward from its current position: a referenced frame has its
/// bit cleared and is skipped, and the first empty or unreferenced frame
/// receives the new page. The hand then rests just past that frame.
///
/// A sweep clears every bit it passes, so a fault visits at most
/// `2 * capacity` frames.
#[derive(Debug, Clone)]
pub struct ClockReplacer {
    frames: ResidentSet,

    /// Reference bit of each frame's page.
    referenced: Vec<bool>,

    /// Next frame to inspect.
    hand: FrameId,
}

impl ClockReplacer {
    /// Create a new CLOCK replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: ResidentSet::new(capacity),
            referenced: vec![false; capacity.get()],
            hand: FrameId::new(0),
        }
    }

    /// Current hand position.
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Reference bit of `page`, or `None` if it is not resident.
    pub fn is_referenced(&self, page: PageId) -> Option<bool> {
        self.frames
            .frame_of(page)
            .map(|frame| self.referenced[frame.0])
    }
}

impl Replacer for ClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn reference(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
        if let Some(frame) = self.frames.frame_of(page) {
            self.referenced[frame.0] = true;
            return Access::Hit;
        }

        let cap = self.frames.capacity();
        loop {
            let frame = self.hand;
            self.hand = frame.advance(cap);

            let occupied = self.frames.get(frame).is_some();
            if occupied && self.referenced[frame.0] {
                // second chance
                self.referenced[frame.0] = false;
                continue;
            }

            trace!("CLOCK: loading {} into {}", page, frame);
            self.referenced[frame.0] = true;
            let evicted = self.frames.place(frame, page);
            return Access::Fault { evicted };
        }
    }

    fn resident(&self) -> &ResidentSet {
        &self.frames
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.referenced.iter_mut().for_each(|bit| *bit = false);
        self.hand = FrameId::new(0);
    }
}
