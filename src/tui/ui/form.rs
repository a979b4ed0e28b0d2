//! Assessment input form.
//!
//! Renders the indicator catalog as a grouped, scrollable list. Values are
//! adjusted in place with the arrow keys; because every adjustment walks the
//! indicator's declared domain, the form can never hold an invalid value.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{
    group_members, Assessment, IndicatorDef, IndicatorGroup, Modality, ValueDomain,
};
use crate::tui::styles::WellnessTheme;

/// Indicators in display order: group-major, catalog order within a group.
fn display_order() -> Vec<&'static IndicatorDef> {
    IndicatorGroup::ALL
        .iter()
        .flat_map(|g| group_members(*g))
        .collect()
}

/// Assessment form state
pub struct AssessmentFormState {
    pub assessment: Assessment,
    pub selected: usize,
    pub error_message: Option<String>,
    order: Vec<&'static IndicatorDef>,
}

impl Default for AssessmentFormState {
    fn default() -> Self {
        Self {
            assessment: Assessment::new(),
            selected: 0,
            error_message: None,
            order: display_order(),
        }
    }
}

impl AssessmentFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.order.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = self.order.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    fn selected_def(&self) -> &'static IndicatorDef {
        self.order[self.selected]
    }

    /// Step the selected indicator up or down within its domain.
    ///
    /// Steps that would leave the domain are ignored, so `set` cannot fail
    /// here; a rejected update would indicate a schema bug.
    pub fn step(&mut self, delta: i64) {
        let def = self.selected_def();
        let current = self.assessment.get(def.name);

        let candidate = match (def.modality(), def.domain) {
            (Modality::Continuous, _) => current + delta,
            // Categorical fields step through the option list.
            (Modality::Categorical, ValueDomain::Choice { options }) => {
                match options.iter().position(|o| o.value == current) {
                    Some(pos) => {
                        let next = pos as i64 + delta;
                        if next < 0 || next as usize >= options.len() {
                            return;
                        }
                        options[next as usize].value
                    }
                    None => def.default,
                }
            }
            (Modality::Categorical, ValueDomain::Scale { .. }) => current + delta,
        };

        if def.domain.contains(candidate) {
            if let Err(e) = self.assessment.set(def.name, candidate) {
                self.error_message = Some(e.to_string());
                return;
            }
            self.error_message = None;
        }
    }

    /// Jump the selected indicator to its domain minimum.
    pub fn jump_min(&mut self) {
        let def = self.selected_def();
        let _ = self.assessment.set(def.name, def.domain.min());
    }

    /// Jump the selected indicator to its domain maximum.
    pub fn jump_max(&mut self) {
        let def = self.selected_def();
        let _ = self.assessment.set(def.name, def.domain.max());
    }

    /// Reset every indicator to its schema default.
    pub fn load_defaults(&mut self) {
        self.assessment.reset();
        self.error_message = None;
    }

    /// Snapshot of the current assessment for submission.
    #[must_use]
    pub fn assessment(&self) -> Assessment {
        self.assessment.clone()
    }

    /// Wipe entered answers back to defaults.
    ///
    /// Called right after a submission starts so personal answers do not
    /// outlive their use in the UI.
    pub fn clear_sensitive(&mut self) {
        self.assessment.reset();
        self.selected = 0;
        self.error_message = None;
    }
}

/// Render the assessment form
pub fn render_form(f: &mut Frame, area: Rect, state: &AssessmentFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellnessTheme::text()),
        Span::styled("Stress Assessment", WellnessTheme::title()),
        Span::styled(
            " │ 20 indicators across 4 areas",
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

fn value_span(state: &AssessmentFormState, def: &'static IndicatorDef) -> String {
    let value = state.assessment.get(def.name);
    match def.domain {
        ValueDomain::Choice { options } => {
            let label = options
                .iter()
                .find(|o| o.value == value)
                .map_or("?", |o| o.label);
            format!("◄ {label} ►")
        }
        ValueDomain::Scale { min, max } => format!("◄ {value} ► ({min}–{max})"),
    }
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &AssessmentFormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(WellnessTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Build the full line list, then scroll so the selection stays visible.
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    let mut field_index = 0;

    for group in IndicatorGroup::ALL {
        lines.push(Line::from(Span::styled(
            format!(" {} ", group.label()),
            WellnessTheme::subtitle(),
        )));

        for def in group_members(group) {
            let is_selected = field_index == state.selected;
            if is_selected {
                selected_line = lines.len();
            }

            let marker = if is_selected { "▸" } else { " " };
            let label_style = if is_selected {
                WellnessTheme::focused()
            } else {
                WellnessTheme::text()
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {marker} "), WellnessTheme::focused()),
                Span::styled(format!("{:<30}", def.label), label_style),
                Span::styled(value_span(state, def), WellnessTheme::text()),
                Span::styled(
                    format!("  {} → {}", def.low_hint, def.high_hint),
                    WellnessTheme::text_muted(),
                ),
            ]));
            field_index += 1;
        }
    }

    let height = inner.height as usize;
    let scroll = if selected_line + 1 > height {
        (selected_line + 1 - height) as u16
    } else {
        0
    };

    let fields = Paragraph::new(lines).scroll((scroll, 0));
    f.render_widget(fields, inner);
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &AssessmentFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", WellnessTheme::danger()),
            Span::styled(err.clone(), WellnessTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", WellnessTheme::key_hint()),
            Span::styled("Field ", WellnessTheme::key_desc()),
            Span::styled("[←→] ", WellnessTheme::key_hint()),
            Span::styled("Adjust ", WellnessTheme::key_desc()),
            Span::styled("[Enter] ", WellnessTheme::key_hint()),
            Span::styled("Submit ", WellnessTheme::key_desc()),
            Span::styled("[D] ", WellnessTheme::key_hint()),
            Span::styled("Defaults ", WellnessTheme::key_desc()),
            Span::styled("[Esc] ", WellnessTheme::key_hint()),
            Span::styled("Cancel", WellnessTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellnessTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{catalog, INDICATOR_COUNT};

    #[test]
    fn test_display_order_covers_catalog() {
        let order = display_order();
        assert_eq!(order.len(), INDICATOR_COUNT);
        for def in catalog() {
            assert!(order.iter().any(|d| d.name == def.name));
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = AssessmentFormState::default();
        state.prev_field();
        assert_eq!(state.selected, INDICATOR_COUNT - 1);
        state.next_field();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_step_clamps_at_domain_edges() {
        let mut state = AssessmentFormState::default();
        let def = state.selected_def();

        state.jump_max();
        state.step(1);
        assert_eq!(state.assessment.get(def.name), def.domain.max());

        state.jump_min();
        state.step(-1);
        assert_eq!(state.assessment.get(def.name), def.domain.min());
    }

    #[test]
    fn test_step_walks_categorical_options() {
        let mut state = AssessmentFormState::default();
        let bp_index = state
            .order
            .iter()
            .position(|d| d.name == "blood_pressure")
            .expect("catalog has blood_pressure");
        state.selected = bp_index;

        // Default Normal(1) → High(2) → Very High(3), then clamped.
        state.step(1);
        assert_eq!(state.assessment.get("blood_pressure"), 2);
        state.step(1);
        assert_eq!(state.assessment.get("blood_pressure"), 3);
        state.step(1);
        assert_eq!(state.assessment.get("blood_pressure"), 3);
    }

    #[test]
    fn test_clear_sensitive_restores_defaults() {
        let mut state = AssessmentFormState::default();
        state.step(1);
        state.next_field();
        state.clear_sensitive();
        assert_eq!(state.assessment, Assessment::new());
        assert_eq!(state.selected, 0);
    }
}
