//! Dropfloor driver binary
//!
//! Runs every strategy over the reference floor counts and logs the
//! results. Each strategy gets a fresh solver so no memo store is shared
//! between them.
//!
//! Environment:
//!   DROPFLOOR_CAPACITY   Largest accepted floor count (default: 32768)
//!   DROPFLOOR_MAX_DEPTH  Recursion bound for recursive strategies (default: 1024)
//!   RUST_LOG             Log filter (default: dropfloor=info)

use dropfloor_solver::{closed_form, Solver, SolverConfig, Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Floor counts solved on every run.
const SCENARIOS: [u64; 6] = [5_365, 5_850, 8_045, 16_090, 10, 21];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropfloor=info,dropfloor_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base = SolverConfig::from_env()?;
    tracing::info!(
        capacity = base.capacity,
        max_depth = base.max_depth,
        "Starting dropfloor driver"
    );

    for strategy in Strategy::ALL {
        let mut solver = Solver::new(base.with_strategy(strategy))?;

        for floors in SCENARIOS {
            match solver.solve(floors) {
                Ok(attempts) => {
                    let expected = closed_form::min_attempts(floors);
                    if attempts == expected {
                        tracing::info!(%strategy, floors, attempts, "solved");
                    } else {
                        tracing::error!(%strategy, floors, attempts, expected, "closed form mismatch");
                    }
                }
                Err(e) => tracing::warn!(%strategy, floors, "not solved: {}", e),
            }
        }

        let stats = solver.stats();
        tracing::info!(
            %strategy,
            computed = stats.computed,
            cache_hits = stats.cache_hits,
            evaluations = stats.evaluations,
            max_depth = stats.max_depth_reached,
            "strategy finished"
        );
    }

    Ok(())
}
