//! pagesim - A page replacement simulator.
//!
//! Replays a sequence of page references against a fixed number of physical
//! frames under six classical eviction policies, counting page faults so the
//! policies can be compared on the same workload.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Simulation Layer (simulation/)                │   │
//! │  │   Simulation (steps) → FaultReport → Comparison          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Replacers (replacer/)                       │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  FIFO | LRU | CLOCK | NFU | AGING | OPTIMAL      │   │   │
//! │  │   │      (one private ResidentSet per run)           │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Workload (trace/) + primitives (common/)          │   │
//! │  │     ReferenceTrace, PageId, FrameId, Capacity, Error     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Capacity, Error, config)
//! - [`trace`] - Reference traces
//! - [`replacer`] - The eviction policies and the resident frame set
//! - [`simulation`] - Replay, reports and policy comparison
//!
//! # Quick Start
//! ```
//! use pagesim::{Comparison, PolicyKind, ReferenceTrace, SimulationConfig};
//!
//! let trace: ReferenceTrace = "7 0 1 2 0 3 0 4".parse().unwrap();
//! let config = SimulationConfig::new(3).unwrap();
//!
//! let comparison = Comparison::run(&trace, &config);
//! for (policy, faults) in comparison.fault_counts() {
//!     println!("{policy}: {faults}");
//! }
//! assert_eq!(comparison.report(PolicyKind::Fifo).unwrap().faults(), 7);
//! ```

pub mod common;
pub mod replacer;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, DEMO_TRACE};
pub use common::{Capacity, Error, FrameId, PageId, Result, SimulationConfig};

pub use replacer::{
    Access, AgingReplacer, ClockReplacer, FifoReplacer, LruReplacer, NfuReplacer,
    OptimalReplacer, PolicyKind, Replacer, ResidentSet, Snapshot,
};
pub use simulation::{Comparison, FaultReport, RunStats, Simulation, Step};
pub use trace::ReferenceTrace;
