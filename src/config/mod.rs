//! Configuration for the batch transform.

/// Configuration for a batch run over a coherent corpus
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Minimum number of bundle files the input corpus must contain.
    /// The published coherent data set ships with over 1200 bundles; a
    /// smaller corpus indicates a bad `--coherent_path`.
    pub min_bundle_count: usize,
    /// Number of worker threads; `None` means available cores minus one
    pub worker_threads: Option<usize>,
    /// Whether to render a progress bar while processing
    pub show_progress: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            min_bundle_count: 1200,
            worker_threads: None,
            show_progress: true,
        }
    }
}

impl TransformConfig {
    /// Number of workers to use, defaulting to available cores minus one
    #[must_use]
    pub fn effective_workers(&self) -> usize {
        self.worker_threads
            .unwrap_or_else(|| num_cpus::get().saturating_sub(1))
            .max(1)
    }
}
