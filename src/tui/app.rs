use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::config::Config;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{CalculatorState, HelpState, draw_calculator, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The tip form.
    Calculator,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    calculator: CalculatorState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::Calculator`] screen.
    pub fn new(config: &Config) -> Self {
        let currency = config.currency_format();
        tracing::info!(locale = currency.locale(), round_up = config.round_up, "starting");
        Self {
            screen: Screen::Calculator,
            calculator: CalculatorState::new(currency, config.round_up),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        tracing::info!(tip = %self.calculator.display_text(), "quitting");
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Calculator => draw_calculator(&self.calculator, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, screen = ?self.screen, "key");

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.navigate(Screen::Help);
            return;
        }

        let action = match self.screen {
            Screen::Calculator => self.calculator.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        if screen == Screen::Help {
            self.help.reset();
        }
        self.screen = screen;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the calculator screen state.
    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    /// Returns the calculator screen state for programmatic input.
    pub fn calculator_mut(&mut self) -> &mut CalculatorState {
        &mut self.calculator
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::CurrencyFormat;

    fn make_app() -> App {
        let config = Config {
            locale: Some("en_US".into()),
            ..Config::default()
        };
        App::new(&config)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn release(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    fn ctrl(ch: char) -> KeyEvent {
        key(KeyCode::Char(ch), KeyModifiers::CONTROL, KeyEventKind::Press)
    }

    fn type_string(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn new_starts_on_calculator() {
        let app = make_app();
        assert_eq!(app.screen(), Screen::Calculator);
        assert!(!app.should_quit());
        assert_eq!(app.calculator().display_text(), "Tip amount: $0.00");
    }

    #[test]
    fn config_sets_currency_and_toggle() {
        let config = Config {
            locale: Some("en_GB".into()),
            round_up: true,
            log_filter: None,
        };
        let app = App::new(&config);
        assert!(app.calculator().round_up());
        assert_eq!(
            app.calculator().currency(),
            CurrencyFormat::for_locale("en_GB").unwrap()
        );
    }

    #[test]
    fn typed_keys_reach_calculator() {
        let mut app = make_app();
        type_string(&mut app, "100");
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "20");
        assert_eq!(app.calculator().display_text(), "Tip amount: $20.00");
    }

    #[test]
    fn q_is_typed_not_quit() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.calculator().form().text(0), "q");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = make_app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_from_help() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn double_esc_quits() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.should_quit());
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn f1_opens_help() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
    }

    #[test]
    fn f1_on_help_stays_on_help() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
    }

    #[test]
    fn q_on_help_returns_to_calculator() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.screen(), Screen::Calculator);
        assert!(!app.should_quit());
        assert_eq!(app.calculator().form().text(0), "");
    }

    #[test]
    fn help_keeps_calculator_input() {
        let mut app = make_app();
        type_string(&mut app, "50");
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.calculator().form().text(0), "50");
    }

    #[test]
    fn reopening_help_resets_scroll() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.help.scroll(), 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        app.handle_key(release(KeyCode::Char('1')));
        app.handle_key(release(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Calculator);
        assert_eq!(app.calculator().form().text(0), "");
    }

    #[test]
    fn calculator_mut_accepts_programmatic_input() {
        let mut app = make_app();
        app.calculator_mut().set_bill("33");
        app.calculator_mut().set_tip("15");
        app.calculator_mut().set_round_up(true);
        assert_eq!(app.calculator().display_text(), "Tip amount: $5.00");
    }
}
