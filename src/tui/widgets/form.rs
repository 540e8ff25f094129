//! Form widget: labeled text inputs and on/off toggles with focus traversal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// The editable part of a [`FormField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Free-form single-line text.
    Text(String),
    /// An on/off switch.
    Toggle(bool),
}

/// A single field within a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label.
    pub label: String,
    /// Current input state.
    pub input: FieldInput,
}

impl FormField {
    /// Creates an empty text field.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: FieldInput::Text(String::new()),
        }
    }

    /// Creates a toggle field in the given state.
    pub fn toggle(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            input: FieldInput::Toggle(checked),
        }
    }

    /// Rows the field occupies when drawn.
    fn height(&self) -> u16 {
        match self.input {
            FieldInput::Text(_) => 3,
            FieldInput::Toggle(_) => 1,
        }
    }
}

/// An ordered set of fields with at most one focused.
///
/// Focus can be cleared entirely, which is how a form signals that entry is
/// done; moving focus forward from the cleared state lands on the first field.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: Option<usize>,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        let focus = (!fields.is_empty()).then_some(0);
        Self { fields, focus }
    }

    /// Returns the index of the focused field, if any.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % self.fields.len(),
            None => 0,
        });
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        self.focus = Some(match self.focus {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }

    /// Removes focus from every field.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Returns `true` if the focused field is a toggle.
    pub fn focused_is_toggle(&self) -> bool {
        matches!(self.focused_input(), Some(FieldInput::Toggle(_)))
    }

    /// Appends a character to the focused text field. No-op on toggles.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(FieldInput::Text(value)) = self.focused_input_mut() {
            value.push(ch);
        }
    }

    /// Deletes the last character from the focused text field.
    pub fn delete_char(&mut self) {
        if let Some(FieldInput::Text(value)) = self.focused_input_mut() {
            value.pop();
        }
    }

    /// Flips the focused toggle. No-op on text fields.
    pub fn toggle_focused(&mut self) {
        if let Some(FieldInput::Toggle(checked)) = self.focused_input_mut() {
            *checked = !*checked;
        }
    }

    /// Returns the text of the field at `index`, or an empty string for
    /// toggles and out-of-bounds indices.
    pub fn text(&self, index: usize) -> &str {
        match self.fields.get(index).map(|f| &f.input) {
            Some(FieldInput::Text(value)) => value.as_str(),
            _ => "",
        }
    }

    /// Replaces the text of the field at `index`.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(FieldInput::Text(value)) = self.fields.get_mut(index).map(|f| &mut f.input) {
            *value = text.into();
        }
    }

    /// Returns the state of the toggle at `index`, or `false` for text fields
    /// and out-of-bounds indices.
    pub fn checked(&self, index: usize) -> bool {
        matches!(
            self.fields.get(index).map(|f| &f.input),
            Some(FieldInput::Toggle(true))
        )
    }

    /// Sets the state of the toggle at `index`.
    pub fn set_checked(&mut self, index: usize, state: bool) {
        if let Some(FieldInput::Toggle(checked)) = self.fields.get_mut(index).map(|f| &mut f.input)
        {
            *checked = state;
        }
    }

    /// Total rows needed by [`draw_form`].
    pub fn height(&self) -> u16 {
        self.fields.iter().map(FormField::height).sum()
    }

    fn focused_input(&self) -> Option<&FieldInput> {
        self.focus
            .and_then(|i| self.fields.get(i))
            .map(|f| &f.input)
    }

    fn focused_input_mut(&mut self) -> Option<&mut FieldInput> {
        self.focus
            .and_then(|i| self.fields.get_mut(i))
            .map(|f| &mut f.input)
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|field| Constraint::Length(field.height()))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = form.focus == Some(i);
        let accent = if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        match &field.input {
            FieldInput::Text(value) => {
                let block = Block::default()
                    .title(field.label.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent));

                let mut spans = vec![Span::raw(value.as_str())];
                if is_focused {
                    spans.push(Span::styled(
                        "\u{2588}",
                        Style::default().add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[i]);
            }
            FieldInput::Toggle(checked) => {
                let (state, color) = if *checked {
                    ("[ ON]", Color::Green)
                } else {
                    ("[OFF]", Color::DarkGray)
                };
                let label_style = if is_focused {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let [label_area, state_area] =
                    Layout::horizontal([Constraint::Min(0), Constraint::Length(6)])
                        .areas(rows[i]);
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {}", field.label), label_style)),
                    label_area,
                );
                frame.render_widget(
                    Paragraph::new(Span::styled(state, Style::default().fg(color))),
                    state_area,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::text("Bill"),
            FormField::text("Tip"),
            FormField::toggle("Round", false),
        ])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        assert_eq!(make_form().focus(), Some(0));
    }

    #[test]
    fn empty_form_has_no_focus() {
        assert_eq!(Form::new(vec![]).focus(), None);
    }

    #[test]
    fn focus_next_advances_and_wraps() {
        let mut form = make_form();
        form.focus_next();
        assert_eq!(form.focus(), Some(1));
        form.focus_next();
        assert_eq!(form.focus(), Some(2));
        form.focus_next();
        assert_eq!(form.focus(), Some(0));
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), Some(2));
    }

    #[test]
    fn cleared_focus_next_goes_to_first() {
        let mut form = make_form();
        form.focus_next();
        form.clear_focus();
        assert_eq!(form.focus(), None);
        form.focus_next();
        assert_eq!(form.focus(), Some(0));
    }

    #[test]
    fn cleared_focus_prev_goes_to_last() {
        let mut form = make_form();
        form.clear_focus();
        form.focus_prev();
        assert_eq!(form.focus(), Some(2));
    }

    #[test]
    fn focus_moves_on_empty_form_are_noops() {
        let mut form = Form::new(vec![]);
        form.focus_next();
        form.focus_prev();
        assert_eq!(form.focus(), None);
    }

    #[test]
    fn focused_kind() {
        let mut form = make_form();
        assert!(!form.focused_is_toggle());
        form.focus_prev();
        assert!(form.focused_is_toggle());
        form.clear_focus();
        assert!(!form.focused_is_toggle());
    }

    // --- Editing ---

    #[test]
    fn insert_char_appends_to_focused() {
        let mut form = make_form();
        form.insert_char('4');
        form.insert_char('2');
        assert_eq!(form.text(0), "42");
        assert_eq!(form.text(1), "");
    }

    #[test]
    fn insert_char_without_focus_is_noop() {
        let mut form = make_form();
        form.clear_focus();
        form.insert_char('1');
        assert_eq!(form.text(0), "");
    }

    #[test]
    fn insert_char_on_toggle_is_noop() {
        let mut form = make_form();
        form.focus_prev();
        form.insert_char('x');
        assert!(!form.checked(2));
        assert_eq!(form.text(2), "");
    }

    #[test]
    fn delete_char_removes_last() {
        let mut form = make_form();
        form.insert_char('1');
        form.insert_char('0');
        form.delete_char();
        assert_eq!(form.text(0), "1");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = make_form();
        form.delete_char();
        assert_eq!(form.text(0), "");
    }

    #[test]
    fn toggle_focused_flips_toggle() {
        let mut form = make_form();
        form.focus_prev();
        form.toggle_focused();
        assert!(form.checked(2));
        form.toggle_focused();
        assert!(!form.checked(2));
    }

    #[test]
    fn toggle_focused_on_text_is_noop() {
        let mut form = make_form();
        form.toggle_focused();
        assert_eq!(form.text(0), "");
        assert!(!form.checked(2));
    }

    #[test]
    fn set_text_and_checked() {
        let mut form = make_form();
        form.set_text(1, "18");
        form.set_checked(2, true);
        assert_eq!(form.text(1), "18");
        assert!(form.checked(2));
    }

    #[test]
    fn setters_ignore_mismatched_kinds() {
        let mut form = make_form();
        form.set_text(2, "on");
        form.set_checked(0, true);
        assert!(!form.checked(2));
        assert_eq!(form.text(0), "");
    }

    #[test]
    fn out_of_bounds_reads_are_defaults() {
        let form = make_form();
        assert_eq!(form.text(99), "");
        assert!(!form.checked(99));
    }

    #[test]
    fn height_sums_rows() {
        assert_eq!(make_form().height(), 7);
    }

    #[test]
    fn draws_labels_values_and_toggle_state() {
        let mut form = make_form();
        form.set_text(0, "100");
        form.set_checked(2, true);

        let mut terminal = Terminal::new(TestBackend::new(30, 7)).unwrap();
        terminal
            .draw(|frame| draw_form(&form, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();

        assert!(text.contains("Bill"));
        assert!(text.contains("100"));
        assert!(text.contains("Round"));
        assert!(text.contains("[ ON]"));
    }
}
