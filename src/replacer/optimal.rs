//! Optimal (Belady's MIN) replacement policy.

use std::cmp::Reverse;

use log::trace;

use super::{select_min, Access, PolicyKind, Replacer, ResidentSet};
use crate::common::{Capacity, PageId};

/// Evicts the page whose next reference lies furthest in the future.
///
/// A page that is never referenced again counts as infinitely far away, so
/// it goes first. This policy is offline: it needs the rest of the trace,
/// which it receives as `upcoming` on every reference. It yields the fewest
/// faults achievable for a given trace and capacity and serves as the
/// baseline for the online policies.
///
/// Look-ahead is a linear scan per resident page, so a run costs
/// O(trace length² × capacity) in the worst case.
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    frames: ResidentSet,
}

impl OptimalReplacer {
    /// Create a new Optimal replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: ResidentSet::new(capacity),
        }
    }
}

/// Distance to the next reference of `page` in `upcoming`, `None` if never.
fn next_use(page: PageId, upcoming: &[PageId]) -> Option<usize> {
    upcoming.iter().position(|&p| p == page)
}

impl Replacer for OptimalReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn reference(&mut self, page: PageId, upcoming: &[PageId]) -> Access {
        if self.frames.contains(page) {
            return Access::Hit;
        }

        let frame = self.frames.first_empty().unwrap_or_else(|| {
            // Largest distance wins; never-used-again beats everything.
            let victim = select_min(&self.frames, |_, resident| {
                Reverse(next_use(resident, upcoming).unwrap_or(usize::MAX))
            });
            trace!(
                "OPTIMAL: {} next used at {:?}",
                victim,
                self.frames
                    .get(victim)
                    .and_then(|resident| next_use(resident, upcoming))
            );
            victim
        });

        let evicted = self.frames.place(frame, page);
        Access::Fault { evicted }
    }

    fn resident(&self) -> &ResidentSet {
        &self.frames
    }

    fn reset(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn optimal(frames: usize) -> OptimalReplacer {
        OptimalReplacer::new(Capacity::new(frames).unwrap())
    }

    fn fill(replacer: &mut OptimalReplacer, ids: &[i64]) {
        for &id in ids {
            replacer.reference(PageId::new(id), &[]);
        }
    }

    #[test]
    fn test_next_use() {
        let upcoming = pages(&[4, 2, 1, 2]);
        assert_eq!(next_use(PageId::new(2), &upcoming), Some(1));
        assert_eq!(next_use(PageId::new(1), &upcoming), Some(2));
        assert_eq!(next_use(PageId::new(9), &upcoming), None);
    }

    #[test]
    fn test_optimal_evicts_furthest_next_use() {
        let mut replacer = optimal(3);
        fill(&mut replacer, &[1, 2, 3]);

        let upcoming = pages(&[2, 1, 5, 3]);
        assert_eq!(
            replacer.reference(PageId::new(4), &upcoming).evicted(),
            Some(PageId::new(3))
        );
        assert_eq!(format!("{}", replacer.frames()), "[1, 2, 4]");
    }

    #[test]
    fn test_optimal_never_used_again_goes_first() {
        let mut replacer = optimal(3);
        fill(&mut replacer, &[1, 2, 3]);

        // 2 is never used again even though 1 is further than 3
        let upcoming = pages(&[3, 1]);
        assert_eq!(
            replacer.reference(PageId::new(4), &upcoming).evicted(),
            Some(PageId::new(2))
        );
    }

    #[test]
    fn test_optimal_tie_on_never_used_goes_to_first_frame() {
        let mut replacer = optimal(3);
        fill(&mut replacer, &[1, 2, 3]);

        assert_eq!(replacer.reference(PageId::new(4), &[]).evicted(), Some(PageId::new(1)));
    }

    #[test]
    fn test_optimal_reset() {
        let mut replacer = optimal(2);
        fill(&mut replacer, &[1, 2]);
        replacer.reset();
        assert!(replacer.frames().is_empty());
    }
}
