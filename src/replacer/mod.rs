//! Eviction policy implementations (replacers).
//!
//! Every policy owns a [`ResidentSet`] plus whatever per-frame metadata it
//! needs, and is driven one reference at a time through [`Replacer`].
//! Nothing is shared between replacers, so runs of different policies over
//! the same trace are independent and can happen on different threads.
//!
//! Implements:
//! - [`FifoReplacer`] - evict the oldest arrival
//! - [`LruReplacer`] - evict the least recently referenced page
//! - [`ClockReplacer`] - second chance via a reference bit and a rotating hand
//! - [`NfuReplacer`] - evict the page with the fewest references
//! - [`AgingReplacer`] - evict the page with the smallest 8-bit aging counter
//! - [`OptimalReplacer`] - Belady's offline policy, evict the page needed furthest ahead
//!
//! # Faults
//! A reference faults exactly when its page is not resident. All policies
//! share this definition, so their fault counts are comparable.
//!
//! # Tie-breaks
//! Empty frames are filled lowest-numbered first (Clock fills the frame under
//! its hand). When several frames tie for eviction, the first one in slot
//! order is chosen.

mod aging;
mod clock;
mod fifo;
mod lru;
mod nfu;
mod optimal;
mod resident_set;

use std::fmt;
use std::str::FromStr;

pub use aging::AgingReplacer;
pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use nfu::NfuReplacer;
pub use optimal::OptimalReplacer;
pub use resident_set::{ResidentSet, Snapshot};

use crate::common::{Capacity, Error, FrameId, PageId, Result};
use crate::simulation::{self, FaultReport};
use crate::trace::ReferenceTrace;

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,

    /// The page had to be loaded. `evicted` is the page it displaced, or
    /// `None` if an empty frame was used.
    Fault { evicted: Option<PageId> },
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// Page displaced by this reference, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Access::Fault { evicted } => *evicted,
            Access::Hit => None,
        }
    }
}

/// A page replacement policy.
///
/// Implementors keep all of their state privately, starting empty.
/// Feeding the same references to a fresh replacer always yields the same
/// sequence of [`Access`] results.
pub trait Replacer {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Reference `page`.
    ///
    /// `upcoming` holds the references that follow this one in the trace.
    /// Online policies ignore it; [`OptimalReplacer`] looks ahead in it.
    fn reference(&mut self, page: PageId, upcoming: &[PageId]) -> Access;

    /// The frames this policy manages.
    fn resident(&self) -> &ResidentSet;

    /// Drop every resident page and all metadata.
    fn reset(&mut self);

    /// Number of frames.
    fn capacity(&self) -> usize {
        self.resident().capacity()
    }

    /// Current frame contents.
    fn frames(&self) -> Snapshot {
        self.resident().snapshot()
    }

    /// Replay `trace` from an empty state and report the faults.
    fn run(&mut self, trace: &ReferenceTrace) -> FaultReport
    where
        Self: Sized,
    {
        self.reset();
        simulation::replay(self, trace, false)
    }
}

/// First occupied frame minimizing `key`, scanning in slot order.
///
/// Used for victim selection once every frame is occupied. Ties keep the
/// earlier frame.
pub(crate) fn select_min<K: Ord>(
    frames: &ResidentSet,
    key: impl Fn(FrameId, PageId) -> K,
) -> FrameId {
    let mut best: Option<(FrameId, K)> = None;
    for (frame, page) in frames.iter() {
        let k = key(frame, page);
        if best.as_ref().map_or(true, |(_, best_key)| k < *best_key) {
            best = Some((frame, k));
        }
    }
    best.map_or(FrameId::new(0), |(frame, _)| frame)
}

/// The six supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Clock,
    Nfu,
    Aging,
    Optimal,
}

impl PolicyKind {
    /// All policies, in reporting order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Clock,
        PolicyKind::Nfu,
        PolicyKind::Aging,
        PolicyKind::Optimal,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Clock => "CLOCK",
            PolicyKind::Nfu => "NFU",
            PolicyKind::Aging => "AGING",
            PolicyKind::Optimal => "OPTIMAL",
        }
    }

    /// False only for Optimal, which needs the whole trace in advance.
    pub fn is_online(self) -> bool {
        self != PolicyKind::Optimal
    }

    /// Build an empty replacer for this policy.
    pub fn replacer(self, capacity: Capacity) -> Box<dyn Replacer> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new(capacity)),
            PolicyKind::Lru => Box::new(LruReplacer::new(capacity)),
            PolicyKind::Clock => Box::new(ClockReplacer::new(capacity)),
            PolicyKind::Nfu => Box::new(NfuReplacer::new(capacity)),
            PolicyKind::Aging => Box::new(AgingReplacer::new(capacity)),
            PolicyKind::Optimal => Box::new(OptimalReplacer::new(capacity)),
        }
    }

    /// Replay `trace` on `capacity` frames with a fresh replacer.
    ///
    /// # Example
    /// ```
    /// use pagesim::{Capacity, PolicyKind, ReferenceTrace};
    ///
    /// let trace = ReferenceTrace::from_ids(&[7, 0, 1, 2, 0, 3, 0, 4]);
    /// let report = PolicyKind::Lru.run(&trace, Capacity::new(3).unwrap());
    /// assert_eq!(report.faults(), 6);
    /// ```
    pub fn run(self, trace: &ReferenceTrace, capacity: Capacity) -> FaultReport {
        let mut replacer = self.replacer(capacity);
        simulation::replay(replacer.as_mut(), trace, false)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "clock" | "second-chance" => Ok(PolicyKind::Clock),
            "nfu" => Ok(PolicyKind::Nfu),
            "aging" => Ok(PolicyKind::Aging),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
