//! Dataset adapters: CSV file source and synthetic generator.
//!
//! The CSV source reads the fixed 21-column training export (header line
//! skipped). Short or non-numeric fields become `None` rather than errors;
//! only an unreadable resource fails the load. The synthetic source stands
//! in when no file is available, producing in-domain rows from a seeded RNG.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::catalog;
use crate::ports::{DatasetRow, DatasetSource, DATASET_FIELD_COUNT};

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] csv::Error),
}

/// Dataset source backed by a delimited-text file.
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse rows from any reader. The first line is a header and skipped.
    ///
    /// # Errors
    /// Returns error only if the reader itself fails; malformed rows are
    /// kept with `None` markers in the unparsable positions.
    pub fn read_rows<R: Read>(reader: R) -> Result<Vec<DatasetRow>, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable dataset row");
                    continue;
                }
            };

            let mut fields: Vec<Option<i64>> = record
                .iter()
                .map(|field| field.trim().parse::<i64>().ok())
                .collect();
            // Short rows pad out with markers; extra columns are dropped.
            fields.resize(DATASET_FIELD_COUNT, None);
            rows.push(DatasetRow { fields });
        }

        Ok(rows)
    }
}

impl DatasetSource for CsvDataset {
    type Error = DatasetError;

    fn load(&self) -> Result<Vec<DatasetRow>, Self::Error> {
        let file = File::open(&self.path)?;
        let rows = Self::read_rows(file)?;
        tracing::info!(path = %self.path.display(), rows = rows.len(), "dataset loaded");
        Ok(rows)
    }
}

/// Seeded generator producing plausible in-domain rows.
pub struct SyntheticDataset {
    rows: usize,
    seed: u64,
}

impl SyntheticDataset {
    /// Number of rows generated by `Default`.
    pub const DEFAULT_ROWS: usize = 50;

    #[must_use]
    pub fn new(rows: usize, seed: u64) -> Self {
        Self { rows, seed }
    }
}

impl Default for SyntheticDataset {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, 0)
    }
}

impl DatasetSource for SyntheticDataset {
    type Error = DatasetError;

    fn load(&self) -> Result<Vec<DatasetRow>, Self::Error> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let rows = (0..self.rows)
            .map(|_| {
                let mut fields: Vec<Option<i64>> = catalog()
                    .iter()
                    .map(|def| Some(rng.gen_range(def.domain.min()..=def.domain.max())))
                    .collect();
                fields.push(Some(rng.gen_range(0..=2)));
                DatasetRow { fields }
            })
            .collect();

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StressClass;
    use std::io::Write;

    const HEADER: &str = "anxiety_level,self_esteem,mental_health_history,depression,headache,blood_pressure,sleep_quality,breathing_problem,noise_level,living_conditions,safety,basic_needs,academic_performance,study_load,teacher_student_relationship,future_career_concerns,social_support,peer_pressure,extracurricular_activities,bullying,stress_level";

    #[test]
    fn test_reads_well_formed_rows() {
        let data = format!(
            "{HEADER}\n14,20,0,11,2,1,2,4,2,2,3,2,3,2,3,3,2,3,1,2,1\n9,25,1,5,1,2,4,1,3,3,4,4,4,3,4,2,4,1,3,1,0\n"
        );

        let rows = CsvDataset::read_rows(data.as_bytes()).expect("should parse");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_complete());
        assert_eq!(rows[0].stress_level(), Some(1));
        assert_eq!(rows[1].fields[0], Some(9));
    }

    #[test]
    fn test_malformed_row_does_not_crash() {
        // Second row is short, third has a non-numeric field.
        let data = format!("{HEADER}\n1,2,3\n1,2,x,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,2\n");

        let rows = CsvDataset::read_rows(data.as_bytes()).expect("should parse");
        assert_eq!(rows.len(), 2);

        let short = &rows[0];
        assert_eq!(short.fields.len(), DATASET_FIELD_COUNT);
        assert_eq!(short.fields[0], Some(1));
        assert_eq!(short.fields[3], None);
        assert_eq!(short.stress_level(), None);
        assert!(!short.is_complete());

        assert_eq!(rows[1].fields[2], None);
        assert_eq!(rows[1].stress_level(), Some(2));
    }

    #[test]
    fn test_header_is_skipped() {
        let data = format!("{HEADER}\n");
        let rows = CsvDataset::read_rows(data.as_bytes()).expect("should parse");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{HEADER}").expect("write header");
        writeln!(file, "5,15,0,5,2,1,3,2,2,3,3,3,3,2,3,3,3,2,2,2,1").expect("write row");

        let source = CsvDataset::new(file.path());
        let rows = source.load().expect("should load");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_complete());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let source = CsvDataset::new("/nonexistent/stress.csv");
        assert!(matches!(source.load(), Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_synthetic_rows_are_in_domain() {
        let rows = SyntheticDataset::new(32, 7).load().expect("should generate");
        assert_eq!(rows.len(), 32);

        for row in &rows {
            assert!(row.is_complete());
            for (def, field) in catalog().iter().zip(&row.fields) {
                let value = field.expect("complete row");
                assert!(def.domain.contains(value), "{}: {}", def.name, value);
            }
            let level = row.stress_level().expect("complete row");
            assert!(StressClass::from_label(level).is_some());
        }
    }

    #[test]
    fn test_synthetic_is_deterministic_per_seed() {
        let a = SyntheticDataset::new(10, 42).load().expect("generate");
        let b = SyntheticDataset::new(10, 42).load().expect("generate");
        assert_eq!(a, b);
    }
}
