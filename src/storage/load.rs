//! The file load pass.
//!
//! Reads a course data file line by line, builds a fresh [`Catalog`] from the
//! well-formed lines, and collects the malformed ones for the caller to
//! report. Loading never merges with an existing catalog: every pass starts
//! empty, and a re-load replaces the previous tree wholesale.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    domain::{Catalog, Config},
    storage::csv::{self, MalformedRecord},
};

/// The outcome of a successful load pass.
#[derive(Debug)]
pub struct LoadReport {
    /// The freshly built catalog. Never empty: a pass that accepts zero
    /// records fails with [`LoadError::NoRecords`] instead.
    pub catalog: Catalog,
    /// The malformed lines that were skipped, in file order.
    pub skipped: Vec<SkippedLine>,
}

/// One malformed line skipped during a load pass.
///
/// How (and whether) these are reported is a presentation concern; the load
/// pass only records them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the data file.
    pub line: usize,
    /// The raw line content, without the line terminator.
    pub text: String,
    /// Why the line was rejected.
    pub reason: MalformedRecord,
}

/// Failures that abort a load pass entirely.
///
/// Malformed lines are *not* in this taxonomy; they are skipped per line and
/// surface in [`LoadReport::skipped`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Reading failed partway through the file.
    #[error("error reading {}: {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The pass finished without accepting a single record: the file was
    /// empty or every line was malformed.
    #[error("no course records found in {}", path.display())]
    NoRecords {
        /// The file that held no usable records.
        path: PathBuf,
    },
}

/// Reads a course data file and builds a fresh catalog from it.
///
/// Lines are split on the configured delimiter and inserted in file order.
/// Insertion order shapes the index, so the pass is strictly sequential.
/// Malformed lines are skipped, logged at debug level, and returned in the
/// report; they never abort the pass.
///
/// # Errors
///
/// Fails when the file cannot be opened or read, or when the pass accepts
/// zero records.
pub fn load_catalog(path: &Path, config: &Config) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut catalog = Catalog::new();
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // Data files written on Windows carry a trailing CR per line.
        let line = line.strip_suffix('\r').unwrap_or(&line);

        match csv::parse_line(line, config.delimiter()) {
            Ok(course) => catalog.insert(course),
            Err(reason) => {
                tracing::debug!("skipping malformed line {}: {reason}", index + 1);
                skipped.push(SkippedLine {
                    line: index + 1,
                    text: line.to_string(),
                    reason,
                });
            }
        }
    }

    if catalog.is_empty() {
        return Err(LoadError::NoRecords {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        "loaded {} courses from {} ({} lines skipped)",
        catalog.len(),
        path.display(),
        skipped.len()
    );

    Ok(LoadReport { catalog, skipped })
}

/// Normalizes a user-entered path.
///
/// Trims surrounding whitespace and rewrites backslashes to forward slashes,
/// so Windows-style paths pasted into a prompt resolve on any platform.
#[must_use]
pub fn normalize_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_case::test_case;

    use super::*;

    fn data_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_courses_in_file_order_and_enumerates_sorted() {
        let file = data_file("CS300,Data Structures,CS200\nCS100,Intro to CS\nCS200,Discrete Math,CS100\n");

        let report = load_catalog(file.path(), &Config::default()).unwrap();

        assert!(report.skipped.is_empty());
        let numbers: Vec<&str> = report
            .catalog
            .iter()
            .map(|c| c.number().as_str())
            .collect();
        assert_eq!(numbers, ["CS100", "CS200", "CS300"]);

        let found = report.catalog.get("CS200").unwrap();
        assert_eq!(found.title(), "Discrete Math");
        assert_eq!(found.prerequisites().len(), 1);
    }

    #[test]
    fn malformed_lines_are_skipped_with_their_line_numbers() {
        let file = data_file("CS100,Intro to CS\nCS101\n\nCS200,Discrete Math\n");

        let report = load_catalog(file.path(), &Config::default()).unwrap();

        assert_eq!(report.catalog.len(), 2);
        let skipped: Vec<(usize, &str)> = report
            .skipped
            .iter()
            .map(|s| (s.line, s.text.as_str()))
            .collect();
        assert_eq!(skipped, [(2, "CS101"), (3, "")]);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        let error = load_catalog(&missing, &Config::default()).unwrap_err();
        assert!(matches!(error, LoadError::Open { .. }));
    }

    #[test_case(""; "empty file")]
    #[test_case("CS101\nCS102\n"; "every line malformed")]
    fn pass_without_records_is_an_error(contents: &str) {
        let file = data_file(contents);

        let error = load_catalog(file.path(), &Config::default()).unwrap_err();
        assert!(matches!(error, LoadError::NoRecords { .. }));
    }

    #[test]
    fn crlf_line_endings_parse_clean() {
        let file = data_file("CS100,Intro to CS\r\nCS200,Discrete Math,CS100\r\n");

        let report = load_catalog(file.path(), &Config::default()).unwrap();

        assert!(report.skipped.is_empty());
        let found = report.catalog.get("CS200").unwrap();
        // The CR must not leak into the last prerequisite.
        assert_eq!(found.prerequisites()[0].as_str(), "CS100");
    }

    #[test]
    fn custom_delimiter_comes_from_config() {
        let file = data_file("CS100;Intro to CS\nCS200;Discrete Math;CS100\n");
        let mut config = Config::default();
        config.set_delimiter(';');

        let report = load_catalog(file.path(), &config).unwrap();
        assert_eq!(report.catalog.len(), 2);
    }

    #[test]
    fn reload_replaces_rather_than_merges() {
        let first = data_file("CS100,Intro to CS\n");
        let second = data_file("CS200,Discrete Math\n");

        let config = Config::default();
        let _old = load_catalog(first.path(), &config).unwrap();
        let new = load_catalog(second.path(), &config).unwrap();

        assert_eq!(new.catalog.len(), 1);
        assert!(new.catalog.get("CS100").is_none());
    }

    #[test_case("C:\\data\\courses.csv", "C:/data/courses.csv"; "windows path")]
    #[test_case("  ./courses.csv  ", "./courses.csv"; "surrounding whitespace")]
    #[test_case("data/courses.csv", "data/courses.csv"; "already normal")]
    fn normalize_path_rewrites_backslashes(raw: &str, expected: &str) {
        assert_eq!(normalize_path(raw), PathBuf::from(expected));
    }
}
