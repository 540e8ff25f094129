//! Calculator screen: bill and tip inputs, round-up toggle, live tip line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{CurrencyFormat, TipInputs};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the bill amount.
pub const BILL: usize = 0;
/// Field index for the tip percentage.
pub const TIP: usize = 1;
/// Field index for the round-up toggle.
pub const ROUND_UP: usize = 2;

const TITLE: &str = "Calculate Tip";

/// Builds the result line shown under the form.
pub fn tip_label(tip: &str) -> String {
    format!("Tip amount: {tip}")
}

/// State for the calculator screen.
///
/// Holds only the raw inputs; the tip is derived from them on every read.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    form: Form,
    currency: CurrencyFormat,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(CurrencyFormat::default(), false)
    }
}

impl CalculatorState {
    /// Creates an empty calculator showing tips in `currency`.
    pub fn new(currency: CurrencyFormat, round_up: bool) -> Self {
        Self {
            form: Form::new(vec![
                FormField::text("Bill Amount"),
                FormField::text("Tip (%)"),
                FormField::toggle("Round up tip?", round_up),
            ]),
            currency,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the currency format tips are shown in.
    pub fn currency(&self) -> CurrencyFormat {
        self.currency
    }

    /// Replaces the bill amount text.
    pub fn set_bill(&mut self, text: impl Into<String>) {
        self.form.set_text(BILL, text);
    }

    /// Replaces the tip percentage text.
    pub fn set_tip(&mut self, text: impl Into<String>) {
        self.form.set_text(TIP, text);
    }

    /// Sets the round-up toggle.
    pub fn set_round_up(&mut self, round_up: bool) {
        self.form.set_checked(ROUND_UP, round_up);
    }

    /// Returns the current round-up toggle state.
    pub fn round_up(&self) -> bool {
        self.form.checked(ROUND_UP)
    }

    /// The parsed inputs for the current field contents.
    pub fn inputs(&self) -> TipInputs {
        TipInputs::parse(
            self.form.text(BILL),
            self.form.text(TIP),
            self.round_up(),
        )
    }

    /// The formatted tip for the current field contents.
    pub fn tip(&self) -> String {
        self.inputs().format_tip(&self.currency)
    }

    /// The result line, e.g. `Tip amount: $20.00`.
    pub fn display_text(&self) -> String {
        tip_label(&self.tip())
    }

    fn flip_round_up(&mut self) {
        let round_up = !self.round_up();
        self.set_round_up(round_up);
        tracing::debug!(round_up, "round-up toggled");
    }

    fn toggle_focused(&mut self) {
        self.form.toggle_focused();
        tracing::debug!(round_up = self.round_up(), "round-up toggled");
    }

    /// Enter behaves like the soft keyboard action of each field: next on the
    /// bill, done on the tip.
    fn submit(&mut self) {
        match self.form.focus() {
            Some(BILL) => self.form.focus_next(),
            Some(TIP) => {
                self.form.clear_focus();
                tracing::debug!(tip = %self.tip(), "entry done");
            }
            Some(ROUND_UP) => self.toggle_focused(),
            _ => {}
        }
    }
}

impl ScreenState for CalculatorState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::ALT) => {
                self.flip_round_up();
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(' ') if self.form.focused_is_toggle() => {
                self.toggle_focused();
                Action::None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Enter => {
                self.submit();
                Action::None
            }
            KeyCode::Esc if self.form.focus().is_some() => {
                self.form.clear_focus();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the calculator screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_calculator(state: &CalculatorState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Tip Calculator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, _gap, form_area, _spacer, result_area, _rest, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(state.form().height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let title = Paragraph::new(Line::from(TITLE))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, title_area);

    draw_form(state.form(), frame, form_area);

    let result = Paragraph::new(Line::from(state.display_text()))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(result, result_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Space: toggle  Alt+r: round up  F1: help  Esc: done/quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
