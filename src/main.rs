use std::path::PathBuf;

use rfd::{FileDialog, MessageDialog, MessageLevel};

use photo_metrics::host::{run_with_host, Host, Outcome};

/// Front end backed by the native folder picker and message boxes
struct DialogHost;

impl Host for DialogHost {
    fn request_folder(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select Folder Containing Images")
            .pick_folder()
    }

    fn report_outcome(&self, outcome: &Outcome) {
        let (level, title, description) = match outcome {
            Outcome::Saved(summary) => (
                MessageLevel::Info,
                "Success",
                format!(
                    "Metadata saved to {} ({} images, {} skipped)",
                    summary.output_path.display(),
                    summary.record_count,
                    summary.skipped_count
                ),
            ),
            Outcome::NoImagesFound => (
                MessageLevel::Error,
                "Error",
                "No image files found.".to_string(),
            ),
            Outcome::WriteFailed(cause) => (MessageLevel::Error, "Error", cause.clone()),
            Outcome::NoFolderSelected => (
                MessageLevel::Warning,
                "Warning",
                "No folder selected.".to_string(),
            ),
        };

        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(&description)
            .show();
    }
}

/// Headless front end: the folder comes from the command line and the
/// status goes to the terminal
struct CliHost {
    folder: PathBuf,
}

impl Host for CliHost {
    fn request_folder(&self) -> Option<PathBuf> {
        Some(self.folder.clone())
    }

    fn report_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Saved(summary) => {
                println!("✅ Metadata saved to {}", summary.output_path.display());
            }
            Outcome::NoImagesFound => eprintln!("❌ No image files found."),
            Outcome::WriteFailed(cause) => eprintln!("❌ {}", cause),
            Outcome::NoFolderSelected => eprintln!("❌ No folder given."),
        }
    }
}

fn main() {
    // With a folder argument, run headless; without one, fall back to
    // the folder picker dialog.
    let outcome = match std::env::args_os().nth(1) {
        Some(folder) => run_with_host(&CliHost {
            folder: PathBuf::from(folder),
        }),
        None => run_with_host(&DialogHost),
    };

    if !matches!(outcome, Outcome::Saved(_)) {
        std::process::exit(1);
    }
}
