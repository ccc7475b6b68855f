//! Running every policy against the same trace.

use std::fmt;
use std::thread;

use parking_lot::Mutex;

use crate::common::SimulationConfig;
use crate::replacer::PolicyKind;
use crate::simulation::{self, FaultReport};
use crate::trace::ReferenceTrace;

/// Fault reports of all six policies for one trace and capacity.
///
/// Reports are kept in [`PolicyKind::ALL`] order whichever way they were
/// produced.
///
/// # Example
/// ```
/// use pagesim::{Comparison, PolicyKind, ReferenceTrace, SimulationConfig};
///
/// let trace = ReferenceTrace::from_ids(&[1, 2, 3, 4, 2, 1, 5, 3, 2, 4, 6]);
/// let comparison = Comparison::run(&trace, &SimulationConfig::default());
///
/// assert_eq!(comparison.best().policy(), PolicyKind::Optimal);
/// assert_eq!(comparison.fault_counts()[0], ("FIFO", 10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    trace_len: usize,
    reports: Vec<FaultReport>,
}

impl Comparison {
    /// Run the policies one after another.
    pub fn run(trace: &ReferenceTrace, config: &SimulationConfig) -> Self {
        let reports = PolicyKind::ALL
            .into_iter()
            .map(|kind| simulation::run(kind, trace, config))
            .collect();

        Self {
            trace_len: trace.len(),
            reports,
        }
    }

    /// Run each policy on its own thread.
    ///
    /// Every run owns its replacer, so the threads share nothing but the
    /// read-only trace and the result list. The outcome is identical to
    /// [`Comparison::run`].
    pub fn run_parallel(trace: &ReferenceTrace, config: &SimulationConfig) -> Self {
        let results: Mutex<Vec<FaultReport>> = Mutex::new(Vec::with_capacity(PolicyKind::ALL.len()));

        thread::scope(|s| {
            for kind in PolicyKind::ALL {
                let results = &results;
                s.spawn(move || {
                    let report = simulation::run(kind, trace, config);
                    results.lock().push(report);
                });
            }
        });

        let mut reports = results.into_inner();
        reports.sort_by_key(|report| report.policy());

        Self {
            trace_len: trace.len(),
            reports,
        }
    }

    /// All reports, in [`PolicyKind::ALL`] order.
    pub fn reports(&self) -> &[FaultReport] {
        &self.reports
    }

    /// Report for one policy.
    pub fn report(&self, policy: PolicyKind) -> Option<&FaultReport> {
        self.reports.iter().find(|report| report.policy() == policy)
    }

    /// `(policy name, fault count)` pairs, ready for a chart or table.
    pub fn fault_counts(&self) -> Vec<(&'static str, usize)> {
        self.reports
            .iter()
            .map(|report| (report.policy().name(), report.faults()))
            .collect()
    }

    /// Report with the fewest faults; the earliest policy wins ties.
    pub fn best(&self) -> &FaultReport {
        // `reports` always holds one entry per policy
        let mut best = &self.reports[0];
        for report in &self.reports[1..] {
            if report.faults() < best.faults() {
                best = report;
            }
        }
        best
    }

    /// Number of references replayed by each policy.
    pub fn trace_len(&self) -> usize {
        self.trace_len
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8} {:>7} {:>9}", "policy", "faults", "hit rate")?;
        for report in &self.reports {
            writeln!(
                f,
                "{:<8} {:>7} {:>8.2}%",
                report.policy().name(),
                report.faults(),
                report.stats().hit_rate() * 100.0
            )?;
        }
        Ok(())
    }
}
