//! LRU (Least Recently Used) replacement policy.

use log::trace;

use super::{select_min, Access, PolicyKind, Replacer, ResidentSet};
use crate::common::{Capacity, PageId};

/// Evicts the page whose last reference is oldest.
///
/// Each frame carries the logical time of its last reference. Time advances
/// on every reference, hits included, so recency is a strict total order.
#[derive(Debug, Clone)]
pub struct LruReplacer {
    frames: ResidentSet,

    /// Logical time of the last reference to each frame's page.
    last_used: Vec<u64>,

    /// Logical clock, one tick per reference.
    time: u64,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: ResidentSet::new(capacity),
            last_used: vec![0; capacity.get()],
            time: 0,
        }
    }

    /// Resident pages, least recently used first.
    pub fn recency_order(&self) -> Vec<PageId> {
        let mut resident: Vec<_> = self.frames.iter().collect();
        resident.sort_by_key(|(frame, _)| self.last_used[frame.0]);
        resident.into_iter().map(|(_, page)| page).collect()
    }

    fn tick(&mut self) -> u64 {
        self.time += 1;
        self.time
    }
}

impl Replacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn reference(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
        let now = self.tick();

        if let Some(frame) = self.frames.frame_of(page) {
            self.last_used[frame.0] = now;
            return Access::Hit;
        }

        let frame = self.frames.first_empty().unwrap_or_else(|| {
            let victim = select_min(&self.frames, |frame, _| self.last_used[frame.0]);
            trace!(
                "LRU: {} last used at t={}",
                victim,
                self.last_used[victim.0]
            );
            victim
        });

        self.last_used[frame.0] = now;
        let evicted = self.frames.place(frame, page);
        Access::Fault { evicted }
    }

    fn resident(&self) -> &ResidentSet {
        &self.frames
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.last_used.iter_mut().for_each(|t| *t = 0);
        self.time = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lru(frames: usize) -> LruReplacer {
        LruReplacer::new(Capacity::new(frames).unwrap())
    }

    fn touch(replacer: &mut LruReplacer, ids: &[i64]) {
        for &id in ids {
            replacer.reference(PageId::new(id), &[]);
        }
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = lru(3);
        touch(&mut replacer, &[1, 2, 3]);

        assert_eq!(replacer.reference(PageId::new(4), &[]).evicted(), Some(PageId::new(1)));
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut replacer = lru(3);
        touch(&mut replacer, &[1, 2, 3, 1]);

        // 2 is now the least recently used, not 1
        assert_eq!(replacer.reference(PageId::new(4), &[]).evicted(), Some(PageId::new(2)));
        let order: Vec<i64> = replacer.recency_order().iter().map(|p| p.0).collect();
        assert_eq!(order, vec![3, 1, 4]);
    }

    #[test]
    fn test_lru_single_frame() {
        let mut replacer = lru(1);
        touch(&mut replacer, &[5]);
        assert_eq!(replacer.reference(PageId::new(5), &[]), Access::Hit);
        assert_eq!(replacer.reference(PageId::new(6), &[]).evicted(), Some(PageId::new(5)));
    }

    #[test]
    fn test_lru_reset() {
        let mut replacer = lru(2);
        touch(&mut replacer, &[1, 2, 3]);
        replacer.reset();

        assert!(replacer.recency_order().is_empty());
        assert!(replacer.frames().is_empty());
    }
}
