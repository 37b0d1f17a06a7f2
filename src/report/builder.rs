/// Report aggregation and CSV serialization
///
/// Collects the per-file records, sorts them by file name, and writes
/// the CSV atomically (temporary file, then rename) so a failed write
/// never leaves a truncated report behind.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::metadata::reader;
use crate::report::data::ImageRecord;

/// Read every scanned path and collect the successful records.
///
/// Returns the records plus the number of files that had to be skipped.
/// A failure on one file never affects processing of another.
pub fn collect_records<I>(paths: I) -> (Vec<ImageRecord>, usize)
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut records = Vec::new();
    let mut skipped_count = 0;

    for path in paths {
        println!("⏳ Processing: {}", path.display());
        match reader::read_record(&path) {
            Some(record) => records.push(record),
            None => skipped_count += 1,
        }
    }

    (records, skipped_count)
}

/// Sort records ascending by file name.
///
/// Plain byte-wise comparison, not natural sort: `image10.jpg` sorts
/// before `image2.jpg`. The sort is stable, so duplicate basenames from
/// different subfolders keep their scan-relative order — which is itself
/// unspecified, so equal names have no guaranteed order across runs.
pub fn sort_records(records: &mut [ImageRecord]) {
    records.sort_by(|a, b| a.file_name.cmp(&b.file_name));
}

/// Write the records to `output` as CSV.
///
/// The header row is `File Name,Orientation,Width (mm),Height (mm)`,
/// followed by one row per record in the order given. The file is
/// written to a sibling temporary path first and renamed into place on
/// success; on any failure the temporary file is removed and the
/// destination is left untouched.
pub fn write_csv(records: &[ImageRecord], output: &Path) -> Result<()> {
    let tmp = output.with_extension("tmp");

    if let Err(e) = write_rows(records, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, output) {
        let _ = fs::remove_file(&tmp);
        return Err(ReportError::write_failed(output, e));
    }

    Ok(())
}

/// Serialize all rows to the temporary file
fn write_rows(records: &[ImageRecord], tmp: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(tmp).map_err(|e| ReportError::write_failed(tmp, e))?;

    for record in records {
        // serde renames on ImageRecord produce the header row on the
        // first serialize call
        writer
            .serialize(record)
            .map_err(|e| ReportError::write_failed(tmp, e))?;
    }

    writer.flush().map_err(|e| ReportError::write_failed(tmp, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::data::Orientation;
    use tempfile::tempdir;

    fn record(name: &str) -> ImageRecord {
        ImageRecord {
            file_name: name.to_string(),
            orientation: Orientation::Landscape,
            width_mm: 100,
            height_mm: 50,
        }
    }

    #[test]
    fn sort_is_lexicographic_not_natural() {
        let mut records = vec![record("image2.jpg"), record("image10.jpg")];
        sort_records(&mut records);

        assert_eq!(records[0].file_name, "image10.jpg");
        assert_eq!(records[1].file_name, "image2.jpg");
    }

    #[test]
    fn header_row_matches_the_report_contract() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("report.csv");
        write_csv(&[record("a.jpg")], &output).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "File Name,Orientation,Width (mm),Height (mm)"
        );
        assert_eq!(lines.next().unwrap(), "a.jpg,Landscape,100,50");
        // trailing newline, nothing after the last record
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn quoting_handles_commas_in_file_names() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("report.csv");
        write_csv(&[record("holiday, day 1.jpg")], &output).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.contains("\"holiday, day 1.jpg\",Landscape,100,50"));
    }

    #[test]
    fn successful_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("report.csv");
        write_csv(&[record("a.jpg")], &output).unwrap();

        assert!(output.exists());
        assert!(!output.with_extension("tmp").exists());
    }

    #[test]
    fn unwritable_destination_is_a_write_failure() {
        let output = Path::new("/nonexistent/folder/report.csv");
        let err = write_csv(&[record("a.jpg")], output).unwrap_err();

        assert!(matches!(err, ReportError::WriteFailed { .. }));
    }

    #[test]
    fn csv_round_trips_through_serde() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("report.csv");
        let records = vec![
            ImageRecord {
                file_name: "a.jpg".to_string(),
                orientation: Orientation::Landscape,
                width_mm: 254,
                height_mm: 170,
            },
            ImageRecord {
                file_name: "b.png".to_string(),
                orientation: Orientation::Portrait,
                width_mm: 35,
                height_mm: 35,
            },
        ];
        write_csv(&records, &output).unwrap();

        let mut rdr = csv::Reader::from_path(&output).unwrap();
        let parsed: Vec<ImageRecord> = rdr
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(parsed, records);
    }
}
