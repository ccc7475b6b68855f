//! Outcome of one policy run.

use std::fmt;

use crate::replacer::{PolicyKind, Snapshot};
use crate::simulation::RunStats;

/// Result of replaying one trace under one policy at one capacity.
///
/// Reports are built once, at the end of a run, and never change after.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultReport {
    policy: PolicyKind,
    capacity: usize,
    stats: RunStats,
    final_frames: Snapshot,
    snapshots: Option<Vec<Snapshot>>,
}

impl FaultReport {
    pub(crate) fn new(
        policy: PolicyKind,
        capacity: usize,
        stats: RunStats,
        final_frames: Snapshot,
        snapshots: Option<Vec<Snapshot>>,
    ) -> Self {
        Self {
            policy,
            capacity,
            stats,
            final_frames,
            snapshots,
        }
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> usize {
        self.stats.faults as usize
    }

    #[inline]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Frame contents after the last reference.
    #[inline]
    pub fn final_frames(&self) -> &Snapshot {
        &self.final_frames
    }

    /// Frame contents after every reference, if recording was enabled.
    pub fn snapshots(&self) -> Option<&[Snapshot]> {
        self.snapshots.as_deref()
    }
}

impl fmt::Display for FaultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} faults / {} references ({} frames, final {})",
            self.policy,
            self.stats.faults,
            self.stats.references,
            self.capacity,
            self.final_frames
        )
    }
}
