//! Replaying traces through replacers.
//!
//! # Components
//! - [`Simulation`] - step-by-step replay, one [`Step`] per reference
//! - [`run`] / [`replay`] - replay a whole trace into a [`FaultReport`]
//! - [`Comparison`] - all six policies over the same trace
//! - [`RunStats`] - hit/fault/eviction counters

mod compare;
mod report;
mod stats;

pub use compare::Comparison;
pub use report::FaultReport;
pub use stats::RunStats;

use log::{debug, info};

use crate::common::{Capacity, PageId, SimulationConfig};
use crate::replacer::{Access, PolicyKind, Replacer, Snapshot};
use crate::trace::ReferenceTrace;

/// One reference and its effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Index of the reference in the trace.
    pub position: usize,

    pub page: PageId,

    pub access: Access,

    /// Frame contents after the reference.
    pub frames: Snapshot,
}

/// Feed the reference at `position` to `replacer`.
fn advance<R: Replacer + ?Sized>(
    replacer: &mut R,
    trace: &ReferenceTrace,
    position: usize,
) -> Option<(PageId, Access)> {
    let page = trace.get(position)?;
    let access = replacer.reference(page, trace.upcoming(position));

    match access {
        Access::Hit => debug!("{} #{}: hit {}", replacer.kind(), position, page),
        Access::Fault { evicted: Some(victim) } => debug!(
            "{} #{}: fault {} (evicted {}) -> {}",
            replacer.kind(),
            position,
            page,
            victim,
            replacer.frames()
        ),
        Access::Fault { evicted: None } => debug!(
            "{} #{}: fault {} -> {}",
            replacer.kind(),
            position,
            page,
            replacer.frames()
        ),
    }

    Some((page, access))
}

/// Replay all of `trace` through `replacer`, from its current state.
///
/// Pass a freshly built (or reset) replacer to get an independent run.
pub fn replay<R: Replacer + ?Sized>(
    replacer: &mut R,
    trace: &ReferenceTrace,
    record_snapshots: bool,
) -> FaultReport {
    let mut stats = RunStats::default();
    let mut snapshots = record_snapshots.then(|| Vec::with_capacity(trace.len()));

    for position in 0..trace.len() {
        if let Some((_, access)) = advance(replacer, trace, position) {
            stats.record(access);
            if let Some(snapshots) = snapshots.as_mut() {
                snapshots.push(replacer.frames());
            }
        }
    }

    info!(
        "{}: {} faults over {} references with {} frames",
        replacer.kind(),
        stats.faults,
        stats.references,
        replacer.capacity()
    );

    FaultReport::new(
        replacer.kind(),
        replacer.capacity(),
        stats,
        replacer.frames(),
        snapshots,
    )
}

/// Replay `trace` under `policy` with a fresh replacer.
///
/// # Example
/// ```
/// use pagesim::{simulation, PolicyKind, ReferenceTrace, SimulationConfig};
///
/// let trace = ReferenceTrace::from_ids(&[1, 2, 1, 3]);
/// let config = SimulationConfig::new(2).unwrap().with_snapshots(true);
/// let report = simulation::run(PolicyKind::Fifo, &trace, &config);
///
/// assert_eq!(report.faults(), 3);
/// assert_eq!(report.snapshots().unwrap().len(), 4);
/// ```
pub fn run(policy: PolicyKind, trace: &ReferenceTrace, config: &SimulationConfig) -> FaultReport {
    let mut replacer = policy.replacer(config.capacity);
    replay(replacer.as_mut(), trace, config.record_snapshots)
}

/// Step-by-step replay of a trace.
///
/// Yields one [`Step`] per reference and ends with the trace. The iterator
/// owns its replacer; build a new `Simulation` to replay again from scratch.
///
/// # Example
/// ```
/// use pagesim::{Capacity, PolicyKind, ReferenceTrace, Simulation};
///
/// let trace = ReferenceTrace::from_ids(&[1, 2, 1]);
/// let mut sim = Simulation::new(PolicyKind::Lru, &trace, Capacity::new(2).unwrap());
///
/// let frames: Vec<String> = sim.by_ref().map(|step| step.frames.to_string()).collect();
/// assert_eq!(frames, ["[1, -]", "[1, 2]", "[1, 2]"]);
/// assert_eq!(sim.finish().faults(), 2);
/// ```
pub struct Simulation<'t> {
    replacer: Box<dyn Replacer>,
    trace: &'t ReferenceTrace,
    position: usize,
    stats: RunStats,
}

impl<'t> Simulation<'t> {
    /// Start replaying `trace` under `policy` on `capacity` frames.
    pub fn new(policy: PolicyKind, trace: &'t ReferenceTrace, capacity: Capacity) -> Self {
        Self::with_replacer(policy.replacer(capacity), trace)
    }

    /// Start replaying `trace` through `replacer`, after resetting it.
    pub fn with_replacer(mut replacer: Box<dyn Replacer>, trace: &'t ReferenceTrace) -> Self {
        replacer.reset();
        Self {
            replacer,
            trace,
            position: 0,
            stats: RunStats::default(),
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Index of the next reference.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The replacer being driven.
    pub fn replacer(&self) -> &dyn Replacer {
        self.replacer.as_ref()
    }

    /// Replay whatever is left and report.
    pub fn finish(mut self) -> FaultReport {
        self.by_ref().for_each(drop);
        FaultReport::new(
            self.replacer.kind(),
            self.replacer.capacity(),
            self.stats,
            self.replacer.frames(),
            None,
        )
    }
}

impl Iterator for Simulation<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let position = self.position;
        let (page, access) = advance(self.replacer.as_mut(), self.trace, position)?;

        self.position += 1;
        self.stats.record(access);

        Some(Step {
            position,
            page,
            access,
            frames: self.replacer.frames(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.trace.len().saturating_sub(self.position);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Simulation<'_> {}
