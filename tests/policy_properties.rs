//! Property tests that hold for every trace and capacity.

use pagesim::{Capacity, Comparison, PolicyKind, ReferenceTrace, SimulationConfig, Simulation};
use proptest::prelude::*;

fn trace_strategy() -> impl Strategy<Value = ReferenceTrace> {
    prop::collection::vec(0i64..8, 0..60).prop_map(ReferenceTrace::from)
}

fn capacity_strategy() -> impl Strategy<Value = Capacity> {
    (1usize..7).prop_map(|frames| Capacity::new(frames).unwrap())
}

proptest! {
    #[test]
    fn prop_optimal_is_lower_bound(trace in trace_strategy(), capacity in capacity_strategy()) {
        let optimal = PolicyKind::Optimal.run(&trace, capacity).faults();
        for kind in PolicyKind::ALL {
            prop_assert!(optimal <= kind.run(&trace, capacity).faults(), "{}", kind);
        }
    }

    #[test]
    fn prop_faults_bounded_by_trace(trace in trace_strategy(), capacity in capacity_strategy()) {
        let distinct = trace.distinct_pages();
        for kind in PolicyKind::ALL {
            let report = kind.run(&trace, capacity);
            prop_assert!(report.faults() <= trace.len());
            prop_assert!(report.faults() >= distinct);
            prop_assert_eq!(report.stats().hits + report.stats().faults, trace.len() as u64);
            prop_assert!(report.final_frames().pages().len() <= capacity.get());
        }
    }

    #[test]
    fn prop_no_evictions_when_everything_fits(trace in trace_strategy()) {
        let capacity = Capacity::new(trace.distinct_pages().max(1)).unwrap();
        for kind in PolicyKind::ALL {
            let report = kind.run(&trace, capacity);
            prop_assert_eq!(report.faults(), trace.distinct_pages());
            prop_assert_eq!(report.stats().evictions, 0);
        }
    }

    #[test]
    fn prop_lru_and_optimal_monotone_in_capacity(trace in trace_strategy(), frames in 1usize..6) {
        let small = Capacity::new(frames).unwrap();
        let large = Capacity::new(frames + 1).unwrap();
        for kind in [PolicyKind::Lru, PolicyKind::Optimal] {
            prop_assert!(kind.run(&trace, large).faults() <= kind.run(&trace, small).faults(), "{}", kind);
        }
    }

    #[test]
    fn prop_runs_are_deterministic(trace in trace_strategy(), capacity in capacity_strategy()) {
        for kind in PolicyKind::ALL {
            let first: Vec<_> = Simulation::new(kind, &trace, capacity).collect();
            let second: Vec<_> = Simulation::new(kind, &trace, capacity).collect();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_pages_never_duplicated(trace in trace_strategy(), capacity in capacity_strategy()) {
        for kind in PolicyKind::ALL {
            for step in Simulation::new(kind, &trace, capacity) {
                let mut pages = step.frames.pages();
                let resident = pages.len();
                pages.sort();
                pages.dedup();
                prop_assert_eq!(pages.len(), resident);
                prop_assert!(step.frames.contains(step.page));
            }
        }
    }

    #[test]
    fn prop_parallel_comparison_matches_sequential(trace in trace_strategy(), capacity in capacity_strategy()) {
        let config = SimulationConfig::with_capacity(capacity);
        prop_assert_eq!(
            Comparison::run_parallel(&trace, &config),
            Comparison::run(&trace, &config)
        );
    }
}
