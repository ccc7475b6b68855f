//! Per-run counters.

use std::fmt;

use crate::replacer::Access;

/// Counters collected while replaying a trace.
///
/// `references == hits + faults` always holds, and `evictions <= faults`
/// (faults that land in an empty frame evict nothing).
///
/// # Example
/// ```
/// use pagesim::RunStats;
///
/// let stats = RunStats { references: 10, hits: 7, faults: 3, evictions: 1 };
/// assert_eq!(stats.hit_rate(), 0.7);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub references: u64,
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
}

impl RunStats {
    /// Count one reference.
    pub fn record(&mut self, access: Access) {
        self.references += 1;
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    #[test]
    fn test_stats_new() {
        let stats = RunStats::default();
        assert_eq!(stats.references, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = RunStats::default();
        stats.record(Access::Fault { evicted: None });
        stats.record(Access::Hit);
        stats.record(Access::Fault {
            evicted: Some(PageId::new(1)),
        });
        stats.record(Access::Hit);

        assert_eq!(stats.references, 4);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.fault_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let stats = RunStats {
            references: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
