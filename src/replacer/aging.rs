//! Aging replacement policy.

use log::trace;

use super::{select_min, Access, PolicyKind, Replacer, ResidentSet};
use crate::common::config::AGING_REFERENCED_BIT;
use crate::common::{Capacity, PageId};

/// Approximates LRU with an 8-bit history counter per frame.
///
/// Each reference is one tick. At the start of a tick every counter shifts
/// right by one bit; the referenced page then gets
/// [`AGING_REFERENCED_BIT`] set. A counter therefore reads as a bitmap of
/// the last eight ticks, newest in the high bit, and the smallest counter
/// belongs to the page referenced least recently (approximately).
///
/// ```text
/// tick:        t-0 t-1 t-2 ... t-7
/// counter bit:  7   6   5  ...  0
/// ```
#[derive(Debug, Clone)]
pub struct AgingReplacer {
    frames: ResidentSet,

    /// Aging counter of each frame's page.
    counters: Vec<u8>,
}

impl AgingReplacer {
    /// Create a new Aging replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: ResidentSet::new(capacity),
            counters: vec![0; capacity.get()],
        }
    }

    /// Aging counter of `page`, or `None` if it is not resident.
    pub fn counter(&self, page: PageId) -> Option<u8> {
        self.frames
            .frame_of(page)
            .map(|frame| self.counters[frame.0])
    }

    fn age(&mut self) {
        for (frame, _) in self.frames.iter() {
            self.counters[frame.0] >>= 1;
        }
    }
}

impl Replacer for AgingReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Aging
    }

    fn reference(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
        self.age();

        if let Some(frame) = self.frames.frame_of(page) {
            self.counters[frame.0] |= AGING_REFERENCED_BIT;
            return Access::Hit;
        }

        let frame = self.frames.first_empty().unwrap_or_else(|| {
            let victim = select_min(&self.frames, |frame, _| self.counters[frame.0]);
            trace!(
                "AGING: {} has the smallest counter ({:#010b})",
                victim,
                self.counters[victim.0]
            );
            victim
        });

        self.counters[frame.0] = AGING_REFERENCED_BIT;
        let evicted = self.frames.place(frame, page);
        Access::Fault { evicted }
    }

    fn resident(&self) -> &ResidentSet {
        &self.frames
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.counters.iter_mut().for_each(|counter| *counter = 0);
    }
}
