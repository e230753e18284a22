//! Batch driver: parallel enrichment of a whole coherent corpus
//!
//! Enumerates every bundle file once and fans the per-file enrichment out
//! over a fixed-size worker pool. Files are fully independent: each worker
//! reads one input file, writes one output file and returns one summary, so
//! there is no shared mutable state and no ordering between files. A failing
//! file is captured as a typed outcome and reported; it never aborts the
//! rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::config::TransformConfig;
use crate::enrich::{BundleSummary, enrich_bundle};
use crate::error::{Result, TransformError};
use crate::model::Bundle;
use crate::progress;
use crate::writer::write_bundle;

/// Outcome of processing one bundle file
#[derive(Debug)]
pub struct FileReport {
    /// The input file this outcome belongs to
    pub path: PathBuf,
    /// The per-bundle summary, or why the file failed
    pub result: Result<BundleSummary>,
}

/// Outcome of a whole batch run
#[derive(Debug)]
pub struct BatchOutcome {
    /// One report per input file, in no particular order
    pub reports: Vec<FileReport>,
}

impl BatchOutcome {
    /// Summaries of the files that enriched successfully
    #[must_use]
    pub fn summaries(&self) -> Vec<&BundleSummary> {
        self.reports
            .iter()
            .filter_map(|r| r.result.as_ref().ok())
            .collect()
    }

    /// The files that failed, with the nature of each violation
    #[must_use]
    pub fn failures(&self) -> Vec<(&Path, &TransformError)> {
        self.reports
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.path.as_path(), e)))
            .collect()
    }

    /// True if every file enriched successfully
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(|r| r.result.is_ok())
    }
}

/// Enrich every bundle under `<coherent_path>/output/fhir/*.json`, writing
/// one output file per input file into `output_path`.
///
/// # Errors
/// Returns an error only for batch-level problems: a corpus that does not
/// match the expected layout or minimum size, or a worker pool that cannot
/// be built. Per-file failures are captured in the returned
/// [`BatchOutcome`], never propagated.
pub fn run_batch(
    config: &TransformConfig,
    coherent_path: &Path,
    output_path: &Path,
) -> Result<BatchOutcome> {
    let fhir_dir = coherent_path.join("output").join("fhir");
    let files = enumerate_bundles(&fhir_dir)?;
    if files.len() <= config.min_bundle_count {
        return Err(TransformError::CorpusLayout(format!(
            "expected more than {} bundle files in {}, found {}",
            config.min_bundle_count,
            fhir_dir.display(),
            files.len()
        )));
    }
    log::info!("Found {} bundle files in {}", files.len(), fhir_dir.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_workers())
        .build()
        .map_err(|e| TransformError::WorkerPool(e.to_string()))?;

    let bar = if config.show_progress {
        progress::create_main_progress_bar(files.len() as u64, Some("enriching bundles"))
    } else {
        progress::create_hidden_progress_bar(files.len() as u64)
    };

    let started = Instant::now();
    let reports: Vec<FileReport> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let tic = Instant::now();
                let result = process_file(path, output_path);
                match &result {
                    Ok(_) => {
                        log::info!("Enriched {} in {:?}", path.display(), tic.elapsed());
                    }
                    Err(e) => {
                        log::error!("Failed to enrich {}: {e}", path.display());
                    }
                }
                bar.inc(1);
                FileReport {
                    path: path.clone(),
                    result,
                }
            })
            .collect()
    });
    bar.finish_and_clear();

    let outcome = BatchOutcome { reports };
    let failed = outcome.failures().len();
    log::info!(
        "Enriched {} of {} bundles from {} in {:?}",
        outcome.reports.len() - failed,
        outcome.reports.len(),
        fhir_dir.display(),
        started.elapsed()
    );
    Ok(outcome)
}

/// Read, enrich and write one bundle file
fn process_file(path: &Path, output_dir: &Path) -> Result<BundleSummary> {
    let file = fs::File::open(path)?;
    let mut bundle: Bundle = serde_json::from_reader(std::io::BufReader::new(file))?;
    let summary = enrich_bundle(&mut bundle)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TransformError::MalformedInput("non-UTF-8 file name".to_string()))?;
    write_bundle(&bundle, output_dir, file_name)?;
    Ok(summary)
}

/// Collect all `.json` bundle files under the corpus fhir directory
fn enumerate_bundles(fhir_dir: &Path) -> Result<Vec<PathBuf>> {
    if !fhir_dir.is_dir() {
        return Err(TransformError::CorpusLayout(format!(
            "bundle directory does not exist: {}",
            fhir_dir.display()
        )));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(fhir_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(files)
}
