//! Configuration constants and run settings for pagesim.

use crate::common::{Capacity, Result};

/// Frame count used when none is given.
///
/// Three frames is the textbook setting for hand-traceable examples and
/// the setting the demo workload was designed around.
pub const DEFAULT_CAPACITY: usize = 3;

/// Most-significant bit of an 8-bit aging counter.
///
/// Set when a page is referenced during the current tick. Every tick shifts
/// the counter right, so older references carry less weight.
pub const AGING_REFERENCED_BIT: u8 = 0x80;

/// Reference workload replayed by the comparison demo.
pub const DEMO_TRACE: [i64; 11] = [1, 2, 3, 4, 2, 1, 5, 3, 2, 4, 6];

/// Settings for one simulation run.
///
/// # Example
/// ```
/// use pagesim::SimulationConfig;
///
/// let config = SimulationConfig::new(4).unwrap().with_snapshots(true);
/// assert_eq!(config.capacity.get(), 4);
/// assert!(config.record_snapshots);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of physical frames.
    pub capacity: Capacity,

    /// Keep the frame contents after every reference in the report.
    pub record_snapshots: bool,
}

impl SimulationConfig {
    /// Create a config for `frames` frames, snapshots off.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        Ok(Self::with_capacity(Capacity::new(frames)?))
    }

    /// Create a config from an already validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            capacity,
            record_snapshots: false,
        }
    }

    /// Enable or disable per-step snapshots.
    pub fn with_snapshots(mut self, record: bool) -> Self {
        self.record_snapshots = record;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
    }
}
