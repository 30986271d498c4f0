//! Process setup read from the environment.
//!
//! `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`) sizes the worker pool;
//! `RUST_LOG` sets the log filter.

use tracing_subscriber::EnvFilter;

/// Read the requested thread count, if any.
fn requested_threads() -> Option<usize> {
    std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n: &usize| n > 0)
}

/// Build the rayon global thread pool. Tolerates an already-initialized pool.
/// Returns the thread count in effect.
pub fn init_rayon_threads() -> usize {
    if let Some(num_threads) = requested_threads() {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // May fail if already initialized
    }
    rayon::current_num_threads()
}

/// Install the stderr log subscriber (default filter `info`).
/// Stdout is left to the rendered table.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
