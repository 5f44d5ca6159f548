use std::{num::NonZeroUsize, thread};

/// Runtime knobs of [crate::BatchSqrtEngine].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of parallel workers, i.e. number of static chunks.
    pub workers: usize,
}

impl EngineConfig {
    pub fn with_workers(workers: usize) -> Self {
        Self { workers }
    }
}

impl Default for EngineConfig {
    /// One worker per logical core, or a single worker if the count is unavailable.
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}
