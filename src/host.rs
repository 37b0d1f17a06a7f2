/// Host abstraction for the user-facing shell
///
/// The core is a pure function from a folder path to an outcome plus
/// file-system side effects. Anything that can supply a folder and show
/// a status message — a dialog, a terminal, a web form — can drive it by
/// implementing [`Host`].
use std::path::PathBuf;

use crate::error::ReportError;
use crate::report::data::ReportSummary;
use crate::run_report;

/// Default report file name, created inside the selected folder
pub const DEFAULT_REPORT_NAME: &str = "ImageMetadata.csv";

/// Final status of one report run, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Report written; the summary carries the output path and counts
    Saved(ReportSummary),
    /// The scan finished without a single readable image
    NoImagesFound,
    /// The report could not be written
    WriteFailed(String),
    /// The user dismissed the folder picker
    NoFolderSelected,
}

/// A user-facing shell: supplies the folder to scan and displays the
/// final status.
pub trait Host {
    /// Ask the user for the folder to process
    fn request_folder(&self) -> Option<PathBuf>;

    /// Show the final status of the run
    fn report_outcome(&self, outcome: &Outcome);
}

/// Run one complete report cycle against a host.
///
/// The report lands at [`DEFAULT_REPORT_NAME`] inside the selected
/// folder. The outcome is both reported to the host and returned.
pub fn run_with_host(host: &dyn Host) -> Outcome {
    let outcome = match host.request_folder() {
        Some(folder) => {
            let output = folder.join(DEFAULT_REPORT_NAME);
            match run_report(&folder, &output) {
                Ok(summary) => Outcome::Saved(summary),
                Err(ReportError::NoImagesFound) => Outcome::NoImagesFound,
                Err(e @ ReportError::WriteFailed { .. }) => Outcome::WriteFailed(e.to_string()),
            }
        }
        None => Outcome::NoFolderSelected,
    };

    host.report_outcome(&outcome);
    outcome
}
