use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use coherent_transform::{TransformConfig, run_batch};

/// Rewrites Synthea coherent bundles with Specimen, Task and
/// URL-addressed DocumentReference resources.
#[derive(Parser)]
#[command(name = "coherent-transform")]
struct Cli {
    /// Path to the unzipped coherent data -
    /// see http://hdx.mitre.org/downloads/coherent-08-10-2021.zip
    #[arg(long, default_value = "coherent/")]
    coherent_path: PathBuf,

    /// Path to output data
    #[arg(long, default_value = "output/")]
    output_path: PathBuf,
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{failed} bundle(s) failed to enrich");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run the batch and return the number of failed files
fn run(cli: &Cli) -> anyhow::Result<usize> {
    anyhow::ensure!(
        cli.coherent_path.is_dir(),
        "coherent path is not a directory: {}",
        cli.coherent_path.display()
    );
    anyhow::ensure!(
        cli.output_path.is_dir(),
        "output path is not a directory: {}",
        cli.output_path.display()
    );

    let outcome = run_batch(&TransformConfig::default(), &cli.coherent_path, &cli.output_path)
        .context("batch enrichment failed")?;

    for (path, error) in outcome.failures() {
        log::error!("{}: {error}", path.display());
    }
    // TODO: feed the collected summaries into research cohort construction
    // (ResearchStudy with one ResearchSubject per patient/condition).
    let _summaries = outcome.summaries();

    Ok(outcome.failures().len())
}
