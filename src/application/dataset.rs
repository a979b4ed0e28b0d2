//! Dataset service: loads the record set once and serves fixed-size pages.

use crate::ports::{DatasetPage, DatasetRow, DatasetSource};

/// Rows per page in the dataset viewer.
pub const PAGE_SIZE: usize = 10;

/// Read-only, paginated access over a loaded dataset.
pub struct DatasetService {
    rows: Vec<DatasetRow>,
}

impl DatasetService {
    /// Load all rows from `source`.
    ///
    /// # Errors
    /// Returns the source's error if the resource cannot be read.
    pub fn load<S: DatasetSource>(source: &S) -> Result<Self, S::Error> {
        let rows = source.load()?;
        Ok(Self { rows })
    }

    /// Total row count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The page starting at `offset`. Offsets past the end yield an empty
    /// page rather than an error.
    #[must_use]
    pub fn page(&self, offset: usize) -> DatasetPage {
        let start = offset.min(self.rows.len());
        let end = (start + PAGE_SIZE).min(self.rows.len());
        DatasetPage::new(
            self.rows[start..end].to_vec(),
            self.rows.len(),
            offset,
            PAGE_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::dataset::SyntheticDataset;

    fn service(rows: usize) -> DatasetService {
        DatasetService::load(&SyntheticDataset::new(rows, 1)).expect("synthetic load")
    }

    #[test]
    fn test_pages_cover_all_rows() {
        let service = service(25);
        assert_eq!(service.len(), 25);

        let first = service.page(0);
        assert_eq!(first.rows.len(), PAGE_SIZE);
        assert!(first.has_more);

        let second = service.page(first.next_offset().expect("more pages"));
        assert_eq!(second.rows.len(), PAGE_SIZE);

        let last = service.page(second.next_offset().expect("more pages"));
        assert_eq!(last.rows.len(), 5);
        assert!(!last.has_more);
        assert_eq!(last.next_offset(), None);
        assert_eq!(last.prev_offset(), Some(PAGE_SIZE));
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let service = service(3);
        let page = service.page(100);
        assert!(page.rows.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_empty_dataset() {
        let service = service(0);
        assert!(service.is_empty());
        let page = service.page(0);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
