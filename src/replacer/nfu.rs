//! NFU (Not Frequently Used) replacement policy.

use log::trace;

use super::{select_min, Access, PolicyKind, Replacer, ResidentSet};
use crate::common::{Capacity, PageId};

/// Evicts the page referenced the fewest times since it was loaded.
///
/// Every reference bumps its page's counter. Counters never decay; a
/// counter is dropped only when its page is evicted, so a page that comes
/// back starts again from one.
#[derive(Debug, Clone)]
pub struct NfuReplacer {
    frames: ResidentSet,

    /// Reference count of each frame's page.
    frequency: Vec<u64>,
}

impl NfuReplacer {
    /// Create a new NFU replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: ResidentSet::new(capacity),
            frequency: vec![0; capacity.get()],
        }
    }

    /// Reference count of `page`, or `None` if it is not resident.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.frames
            .frame_of(page)
            .map(|frame| self.frequency[frame.0])
    }
}

impl Replacer for NfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Nfu
    }

    fn reference(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
        if let Some(frame) = self.frames.frame_of(page) {
            self.frequency[frame.0] += 1;
            return Access::Hit;
        }

        let frame = self.frames.first_empty().unwrap_or_else(|| {
            let victim = select_min(&self.frames, |frame, _| self.frequency[frame.0]);
            trace!(
                "NFU: {} has the lowest count ({})",
                victim,
                self.frequency[victim.0]
            );
            victim
        });

        self.frequency[frame.0] = 1;
        let evicted = self.frames.place(frame, page);
        Access::Fault { evicted }
    }

    fn resident(&self) -> &ResidentSet {
        &self.frames
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.frequency.iter_mut().for_each(|count| *count = 0);
    }
}
