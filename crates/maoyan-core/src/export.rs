//! CSV export of flattened schedules
//!
//! Rows are appended to the output file on every run. The header is
//! written only when the file is missing or empty; the file's contents
//! are never inspected, so existing rows are not deduplicated.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::parser::{flatten_rows, format_crawl_time};
use crate::types::{CinemaId, Movie, OutputRow};

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "filmdata.csv";

/// Result of a single export call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Number of showing rows appended (header excluded)
    pub rows_written: usize,
    /// Whether the header row was written by this call
    pub header_written: bool,
}

/// Appends schedule rows to a CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row per showing, stamped with the current local time.
    ///
    /// # Errors
    /// - `MaoyanError::Io` - the file cannot be inspected, opened or flushed
    /// - `MaoyanError::Csv` - a record cannot be written
    pub fn export(&self, cinema_id: &CinemaId, movies: &[Movie]) -> Result<ExportSummary> {
        let crawl_time = format_crawl_time(&Local::now());
        self.export_with_time(cinema_id, movies, &crawl_time)
    }

    /// Append one row per showing, stamped with the given crawl time
    pub fn export_with_time(
        &self,
        cinema_id: &CinemaId,
        movies: &[Movie],
        crawl_time: &str,
    ) -> Result<ExportSummary> {
        let header_written = self.needs_header()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        if header_written {
            debug!("Writing header to {}", self.path.display());
            writer.write_record(OutputRow::HEADER)?;
        }

        let mut rows_written = 0;
        for row in flatten_rows(cinema_id, movies, crawl_time) {
            writer.serialize(&row)?;
            rows_written += 1;
        }
        writer.flush()?;

        info!(
            "Wrote {} showings to {}",
            rows_written,
            self.path.display()
        );

        Ok(ExportSummary {
            rows_written,
            header_written,
        })
    }

    /// The header is needed when the file is missing or has zero size
    fn needs_header(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HEADER: &str =
        "cinema_id,movie_id,movie_name,date,start_time,hall,language,version,price,seq_no,crawl_time";

    fn sample_movies() -> Vec<Movie> {
        serde_json::from_value(json!([{
            "id": "m1",
            "nm": "Film A",
            "shows": [{"plist": [{
                "dt": "2024-01-01", "tm": "18:00", "th": "Hall1", "lang": "EN",
                "tp": "2D", "discountSellPrice": "50", "seqNo": "1"
            }]}]
        }]))
        .unwrap()
    }

    fn lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_new_file_gets_header_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("filmdata.csv"));

        let summary = exporter
            .export_with_time(&CinemaId::new("12345"), &sample_movies(), "2024-01-01 09:30:00")
            .unwrap();

        assert_eq!(
            summary,
            ExportSummary {
                rows_written: 1,
                header_written: true
            }
        );
        assert_eq!(
            lines(exporter.path()),
            vec![
                HEADER.to_string(),
                "12345,m1,Film A,2024-01-01,18:00,Hall1,EN,2D,50,1,2024-01-01 09:30:00".to_string(),
            ]
        );
    }

    #[test]
    fn test_repeated_runs_append_without_second_header() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("filmdata.csv"));
        let id = CinemaId::new("12345");

        exporter.export(&id, &sample_movies()).unwrap();
        let second = exporter.export(&id, &sample_movies()).unwrap();

        assert!(!second.header_written);
        let lines = lines(exporter.path());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().filter(|l| l.as_str() == HEADER).count(), 1);
        // Rows are never deduplicated
        assert_eq!(lines[1][..lines[1].len() - 19], lines[2][..lines[2].len() - 19]);
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filmdata.csv");
        std::fs::write(&path, "").unwrap();

        let summary = CsvExporter::new(&path)
            .export(&CinemaId::new("1"), &sample_movies())
            .unwrap();
        assert!(summary.header_written);
        assert_eq!(lines(&path)[0], HEADER);
    }

    #[test]
    fn test_non_empty_file_without_header_is_not_inspected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filmdata.csv");
        std::fs::write(&path, "existing\r\n").unwrap();

        let summary = CsvExporter::new(&path)
            .export_with_time(&CinemaId::new("1"), &sample_movies(), "t")
            .unwrap();
        assert!(!summary.header_written);
        assert_eq!(lines(&path)[0], "existing");
        assert_eq!(lines(&path).len(), 2);
    }

    #[test]
    fn test_rows_share_crawl_time() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("out.csv"));
        let movies: Vec<Movie> = serde_json::from_value(json!([
            { "id": 1, "shows": [{ "plist": [{}, {}, {}] }] },
            { "id": 2, "shows": [{ "plist": [{}] }, { "plist": [{}] }] }
        ]))
        .unwrap();

        let summary = exporter.export(&CinemaId::new("9"), &movies).unwrap();
        assert_eq!(summary.rows_written, 5);

        let mut reader = csv::Reader::from_path(exporter.path()).unwrap();
        let times: Vec<String> = reader
            .records()
            .map(|r| r.unwrap().get(10).unwrap().to_string())
            .collect();
        assert_eq!(times.len(), 5);
        assert!(times.iter().all(|t| t == &times[0]));
        assert_eq!(times[0].len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("out.csv"));
        let movies: Vec<Movie> = serde_json::from_value(json!([
            { "id": 7, "nm": "Hello, World", "shows": [{ "plist": [{ "th": "Hall \"A\"" }] }] }
        ]))
        .unwrap();

        exporter
            .export_with_time(&CinemaId::new("1"), &movies, "t")
            .unwrap();

        let mut reader = csv::Reader::from_path(exporter.path()).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "7");
        assert_eq!(&record[2], "Hello, World");
        assert_eq!(&record[5], "Hall \"A\"");
    }

    #[test]
    fn test_no_showings_writes_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("out.csv"));

        let summary = exporter.export(&CinemaId::new("1"), &[]).unwrap();
        assert_eq!(summary.rows_written, 0);
        assert_eq!(lines(exporter.path()), vec![HEADER.to_string()]);
    }
}
