//! FIFO (First-In-First-Out) replacement policy.

use log::trace;

use super::{Access, PolicyKind, Replacer, ResidentSet};
use crate::common::{Capacity, FrameId, PageId};

/// Evicts pages in the order they arrived.
///
/// Hits do not reorder anything. Frames are filled in slot order and a
/// faulting page always takes the victim's frame, so arrival order is a
/// rotation of the frames: `next_victim` marks the oldest arrival once the
/// set is full.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    frames: ResidentSet,

    /// Frame holding the oldest arrival (frame 0 until the first eviction).
    next_victim: FrameId,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: ResidentSet::new(capacity),
            next_victim: FrameId::new(0),
        }
    }

    /// Resident pages, oldest arrival first.
    pub fn arrival_order(&self) -> Vec<PageId> {
        let cap = self.frames.capacity();
        (0..cap)
            .map(|offset| FrameId::new((self.next_victim.0 + offset) % cap))
            .filter_map(|frame| self.frames.get(frame))
            .collect()
    }
}

impl Replacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn reference(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
        if self.frames.contains(page) {
            return Access::Hit;
        }

        let frame = match self.frames.first_empty() {
            Some(frame) => frame,
            None => {
                let victim = self.next_victim;
                self.next_victim = victim.advance(self.frames.capacity());
                trace!("FIFO: oldest arrival is in {}", victim);
                victim
            }
        };

        let evicted = self.frames.place(frame, page);
        Access::Fault { evicted }
    }

    fn resident(&self) -> &ResidentSet {
        &self.frames
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.next_victim = FrameId::new(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn fifo(frames: usize) -> FifoReplacer {
        FifoReplacer::new(Capacity::new(frames).unwrap())
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = fifo(3);

        for id in [0, 1, 2] {
            assert_eq!(
                replacer.reference(PageId::new(id), &[]),
                Access::Fault { evicted: None }
            );
        }

        // Should evict in FIFO order
        assert_eq!(replacer.reference(PageId::new(3), &[]).evicted(), Some(PageId::new(0)));
        assert_eq!(replacer.reference(PageId::new(4), &[]).evicted(), Some(PageId::new(1)));
        assert_eq!(replacer.reference(PageId::new(5), &[]).evicted(), Some(PageId::new(2)));
        assert_eq!(replacer.arrival_order(), pages(&[3, 4, 5]));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = fifo(2);

        replacer.reference(PageId::new(0), &[]);
        replacer.reference(PageId::new(1), &[]);
        assert_eq!(replacer.reference(PageId::new(0), &[]), Access::Hit);

        // Page 0 arrived first, so it goes first despite the recent hit
        assert_eq!(replacer.reference(PageId::new(2), &[]).evicted(), Some(PageId::new(0)));
        assert_eq!(replacer.arrival_order(), pages(&[1, 2]));
    }

    #[test]
    fn test_fifo_victim_frame_is_reused() {
        let mut replacer = fifo(3);
        for id in [7, 0, 1, 2] {
            replacer.reference(PageId::new(id), &[]);
        }
        assert_eq!(format!("{}", replacer.frames()), "[2, 0, 1]");
        assert_eq!(replacer.arrival_order(), pages(&[0, 1, 2]));
    }

    #[test]
    fn test_fifo_partial_fill_arrival_order() {
        let mut replacer = fifo(4);
        replacer.reference(PageId::new(9), &[]);
        replacer.reference(PageId::new(8), &[]);
        assert_eq!(replacer.arrival_order(), pages(&[9, 8]));
    }

    #[test]
    fn test_fifo_reset() {
        let mut replacer = fifo(1);
        replacer.reference(PageId::new(1), &[]);
        replacer.reference(PageId::new(2), &[]);

        replacer.reset();

        assert!(replacer.frames().is_empty());
        assert!(replacer.arrival_order().is_empty());
        assert_eq!(
            replacer.reference(PageId::new(2), &[]),
            Access::Fault { evicted: None }
        );
    }
}
