//! Dataset browser: paginated table over the training export.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::application::PAGE_SIZE;
use crate::ports::{DatasetPage, DATASET_FIELD_COUNT};
use crate::tui::styles::WellnessTheme;

/// Abbreviated column headers, in column order.
const COLUMNS: [&str; DATASET_FIELD_COUNT] = [
    "Anx", "Est", "MHH", "Dep", "HA", "BP", "Slp", "Brth", "Nse", "Liv", "Saf", "Bas", "Acd",
    "Load", "TSR", "Car", "Soc", "PP", "Ext", "Bul", "Lvl",
];

/// Dataset browser state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetViewState {
    pub offset: usize,
}

impl DatasetViewState {
    /// Move to the next page if one exists.
    pub fn next_page(&mut self, page: &DatasetPage) {
        if let Some(offset) = page.next_offset() {
            self.offset = offset;
        }
    }

    /// Move to the previous page if one exists.
    pub fn prev_page(&mut self, page: &DatasetPage) {
        if let Some(offset) = page.prev_offset() {
            self.offset = offset;
        }
    }
}

/// Render the dataset browser
pub fn render_dataset(f: &mut Frame, area: Rect, page: &DatasetPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], page);
    render_table(f, chunks[1], page);
    render_footer(f, chunks[2], page);
}

fn render_header(f: &mut Frame, area: Rect, page: &DatasetPage) {
    let current_page = page.offset / PAGE_SIZE + 1;
    let total_pages = page.total_count.div_ceil(PAGE_SIZE).max(1);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellnessTheme::text()),
        Span::styled("Training Dataset", WellnessTheme::title()),
        Span::styled(
            format!(" │ page {current_page}/{total_pages} ({} rows)", page.total_count),
            WellnessTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, page: &DatasetPage) {
    let header = Row::new(
        COLUMNS
            .iter()
            .map(|c| Cell::from(*c).style(WellnessTheme::subtitle())),
    );

    let rows = page.rows.iter().map(|row| {
        Row::new(row.fields.iter().map(|field| {
            // Unparsable source fields show as a marker, never a crash.
            match field {
                Some(value) => Cell::from(value.to_string()).style(WellnessTheme::text()),
                None => Cell::from("–").style(WellnessTheme::text_muted()),
            }
        }))
    });

    let widths = vec![Constraint::Length(4); DATASET_FIELD_COUNT];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, page: &DatasetPage) {
    let mut spans = vec![
        Span::styled("[←] ", WellnessTheme::key_hint()),
        Span::styled("Previous ", WellnessTheme::key_desc()),
        Span::styled("[→] ", WellnessTheme::key_hint()),
        Span::styled("Next ", WellnessTheme::key_desc()),
        Span::styled("[Esc] ", WellnessTheme::key_hint()),
        Span::styled("Back", WellnessTheme::key_desc()),
    ];

    if page.total_count == 0 {
        spans = vec![Span::styled("Dataset is empty", WellnessTheme::text_muted())];
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::DatasetRow;

    fn page(offset: usize, total: usize, len: usize) -> DatasetPage {
        let row = DatasetRow {
            fields: vec![Some(0); DATASET_FIELD_COUNT],
        };
        DatasetPage::new(vec![row; len], total, offset, PAGE_SIZE)
    }

    #[test]
    fn test_paging_moves_only_where_pages_exist() {
        let mut state = DatasetViewState::default();

        let first = page(0, 25, PAGE_SIZE);
        state.prev_page(&first);
        assert_eq!(state.offset, 0);

        state.next_page(&first);
        assert_eq!(state.offset, PAGE_SIZE);

        let last = page(20, 25, 5);
        state.next_page(&last);
        assert_eq!(state.offset, PAGE_SIZE);
    }
}
