//! Dataset port: Trait for loading the flat training record set.
//!
//! The dataset is read-only reference material shown in the viewer; rows
//! carry no correctness guarantees beyond "never crash the loader".

use crate::domain::INDICATOR_COUNT;

/// Columns per dataset row: the 20 indicators plus the trailing class label.
pub const DATASET_FIELD_COUNT: usize = INDICATOR_COUNT + 1;

/// One parsed dataset row.
///
/// Fields that were missing or non-numeric in the source surface as `None`
/// and are rendered as a non-numeric marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    /// Exactly `DATASET_FIELD_COUNT` entries, in column order
    pub fields: Vec<Option<i64>>,
}

impl DatasetRow {
    /// The trailing class label column, if present and numeric.
    #[must_use]
    pub fn stress_level(&self) -> Option<i64> {
        self.fields.get(DATASET_FIELD_COUNT - 1).copied().flatten()
    }

    /// Whether every column parsed to a number.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields.len() == DATASET_FIELD_COUNT && self.fields.iter().all(Option::is_some)
    }
}

/// A page of dataset rows with pagination metadata.
#[derive(Debug, Clone)]
pub struct DatasetPage {
    /// Rows in this page
    pub rows: Vec<DatasetRow>,
    /// Total count of all rows (for UI pagination)
    pub total_count: usize,
    /// Current page offset
    pub offset: usize,
    /// Page size limit
    pub limit: usize,
    /// Whether there are more pages
    pub has_more: bool,
}

impl DatasetPage {
    /// Create a new dataset page.
    #[must_use]
    pub fn new(rows: Vec<DatasetRow>, total_count: usize, offset: usize, limit: usize) -> Self {
        let has_more = offset + rows.len() < total_count;
        Self {
            rows,
            total_count,
            offset,
            limit,
            has_more,
        }
    }

    /// Get the next page offset.
    #[must_use]
    pub fn next_offset(&self) -> Option<usize> {
        if self.has_more {
            Some(self.offset + self.limit)
        } else {
            None
        }
    }

    /// Get the previous page offset.
    #[must_use]
    pub fn prev_offset(&self) -> Option<usize> {
        if self.offset > 0 {
            Some(self.offset.saturating_sub(self.limit))
        } else {
            None
        }
    }
}

/// Trait for dataset loading.
pub trait DatasetSource: Send + Sync {
    /// Error type for load operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load all rows.
    ///
    /// # Errors
    /// Returns error if the underlying resource cannot be read. Individual
    /// malformed rows are not an error.
    fn load(&self) -> Result<Vec<DatasetRow>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: i64) -> DatasetRow {
        let mut fields = vec![Some(0); DATASET_FIELD_COUNT];
        fields[DATASET_FIELD_COUNT - 1] = Some(level);
        DatasetRow { fields }
    }

    #[test]
    fn test_page_offsets() {
        let page = DatasetPage::new(vec![row(0); 10], 25, 10, 10);
        assert!(page.has_more);
        assert_eq!(page.next_offset(), Some(20));
        assert_eq!(page.prev_offset(), Some(0));

        let last = DatasetPage::new(vec![row(1); 5], 25, 20, 10);
        assert!(!last.has_more);
        assert_eq!(last.next_offset(), None);
        assert_eq!(last.prev_offset(), Some(10));

        let first = DatasetPage::new(vec![row(2); 10], 25, 0, 10);
        assert_eq!(first.prev_offset(), None);
    }

    #[test]
    fn test_row_accessors() {
        let complete = row(2);
        assert_eq!(complete.stress_level(), Some(2));
        assert!(complete.is_complete());

        let short = DatasetRow {
            fields: vec![Some(1), None],
        };
        assert_eq!(short.stress_level(), None);
        assert!(!short.is_complete());
    }
}
