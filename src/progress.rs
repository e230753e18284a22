//! Progress reporting for the batch run, using the indicatif crate

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for the batch progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create the main progress bar with a standardized style
///
/// # Arguments
/// * `length` - Total length for the progress bar
/// * `description` - Optional description to display as the initial message
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(DEFAULT_MAIN_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Create a hidden progress bar for runs with progress reporting disabled
#[must_use]
pub fn create_hidden_progress_bar(length: u64) -> ProgressBar {
    ProgressBar::with_draw_target(Some(length), indicatif::ProgressDrawTarget::hidden())
}
