//! Cross-strategy agreement and the driver scenario inputs.

use std::thread;

use dropfloor_solver::{closed_form, Error, Solver, SolverConfig, Strategy};

/// Deep recursion needs more than the default test-thread stack.
fn with_big_stack<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(f)
        .expect("spawn solver thread")
        .join()
        .expect("solver thread panicked")
}

fn solver(strategy: Strategy) -> Solver {
    Solver::with_strategy(strategy).unwrap()
}

#[test]
fn strategies_agree_over_broad_range() {
    let costs: Vec<Vec<u64>> = with_big_stack(|| {
        Strategy::ALL
            .iter()
            .map(|&strategy| {
                let mut s = solver(strategy);
                // solve the top first so recursive strategies fill the table
                // from one deep call, then read every entry back
                s.solve(900).unwrap();
                (0..=900).map(|n| s.solve(n).unwrap()).collect()
            })
            .collect()
    });

    for n in 0..=900u64 {
        let i = n as usize;
        let reference = costs[2][i];
        assert_eq!(costs[0][i], reference, "two-pass disagrees at {}", n);
        assert_eq!(costs[1][i], reference, "one-pass disagrees at {}", n);
        assert_eq!(reference, closed_form::min_attempts(n), "closed form disagrees at {}", n);
    }
}

#[test]
fn small_scenarios() {
    let cases = [(0, 0), (1, 1), (2, 2), (3, 2), (6, 3), (100, 14)];
    for strategy in Strategy::ALL {
        let mut s = solver(strategy);
        for (floors, want) in cases {
            assert_eq!(s.solve(floors).unwrap(), want, "{} f({})", strategy, floors);
        }
    }
}

#[test]
fn reference_inputs_bottom_up() {
    let mut s = solver(Strategy::BottomUp);
    for (floors, want) in [(10, 4), (21, 6), (5_365, 104), (5_850, 108), (8_045, 127), (16_090, 179)] {
        assert_eq!(s.solve(floors).unwrap(), want, "f({})", floors);
        assert_eq!(want, closed_form::min_attempts(floors));
    }
}

#[test]
fn deep_recursion_with_raised_limit() {
    let results = with_big_stack(|| {
        [Strategy::TwoPass, Strategy::OnePass].map(|strategy| {
            let config = SolverConfig::default()
                .with_strategy(strategy)
                .with_max_depth(6_000);
            let mut s = Solver::new(config).unwrap();
            let cost = s.solve(5_365).unwrap();
            (cost, s.stats().max_depth_reached)
        })
    });

    for (cost, depth) in results {
        assert_eq!(cost, 104);
        // first explored path walks 5365, 5364, ..., 3
        assert_eq!(depth, 5_365 - 2);
    }
}

#[test]
fn default_depth_limit_stops_large_recursive_requests() {
    for strategy in [Strategy::TwoPass, Strategy::OnePass] {
        let config = SolverConfig::default()
            .with_strategy(strategy)
            .with_max_depth(256);
        let mut s = Solver::new(config).unwrap();
        match s.solve(16_090) {
            Err(Error::RecursionLimit { depth, limit, .. }) => {
                assert_eq!(limit, 256);
                assert_eq!(depth, 257);
            }
            other => panic!("{} expected recursion limit, got {:?}", strategy, other),
        }
    }
}

#[test]
fn capacity_applies_to_every_strategy() {
    for strategy in Strategy::ALL {
        let config = SolverConfig::default().with_capacity(64).with_strategy(strategy);
        let mut s = Solver::new(config).unwrap();
        assert_eq!(
            s.solve(65),
            Err(Error::CapacityExceeded { floors: 65, capacity: 64 })
        );
        assert_eq!(
            s.best_step(1_000),
            Err(Error::CapacityExceeded { floors: 1_000, capacity: 64 })
        );
        assert_eq!(s.solve(64).unwrap(), 11);
    }
}

#[test]
fn config_from_lookup_drives_solver() {
    let config = SolverConfig::from_lookup(|key| match key {
        "DROPFLOOR_STRATEGY" => Some("one-pass".to_string()),
        "DROPFLOOR_CAPACITY" => Some("200".to_string()),
        _ => None,
    })
    .unwrap();
    let mut s = Solver::new(config).unwrap();
    assert_eq!(s.strategy(), Strategy::OnePass);
    assert_eq!(s.capacity(), 200);
    assert_eq!(s.solve(200).unwrap(), 20);
}
