use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Text,
};
use tetrabot_engine::Match;
use tetrabot_evaluator::{autopilot, planner::Planner};

use crate::{
    tui::{App, Tui},
    ui::widgets::{MatchDisplay, style},
};

/// Gravity interval under manual control.
const GRAVITY_INTERVAL: Duration = Duration::from_millis(500);
/// One planned move per frame under the autopilot.
const AUTOPILOT_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug)]
pub struct PlayApp {
    game: Match,
    planner: Planner,
    autopilot: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(game: Match, planner: Planner, autopilot: bool) -> Self {
        Self {
            game,
            planner,
            autopilot,
            is_exiting: false,
        }
    }

    fn tick_interval(&self) -> Duration {
        if self.autopilot {
            AUTOPILOT_INTERVAL
        } else {
            GRAVITY_INTERVAL
        }
    }

    fn help_text(&self) -> &'static str {
        match (self.game.state().is_playing(), self.autopilot) {
            (true, true) => "Controls: A (Manual) | R (Reset) | Q (Quit)",
            (true, false) => concat!(
                "Controls: ← → (Move) | ↑ (Rotate) | ↓ (Soft Drop) | Space (Hard Drop) | ",
                "A (Autopilot) | R (Reset) | Q (Quit)"
            ),
            (false, _) => "Controls: R (Reset) | Q (Quit)",
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(self.tick_interval()));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, tui: &mut Tui, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        let manual = !self.autopilot;
        match event.code {
            KeyCode::Char('q' | 'Q') => self.is_exiting = true,
            KeyCode::Char('r' | 'R') => self.game.reset(),
            KeyCode::Char('a' | 'A') => {
                self.autopilot = !self.autopilot;
                tui.set_tick_interval(Some(self.tick_interval()));
            }
            KeyCode::Left if manual => _ = self.game.move_left(),
            KeyCode::Right if manual => _ = self.game.move_right(),
            KeyCode::Down if manual => _ = self.game.move_down(),
            KeyCode::Up if manual => _ = self.game.rotate(),
            KeyCode::Char(' ') if manual => _ = self.game.hard_drop(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let title = if self.autopilot { "AUTOPILOT" } else { "MANUAL" };
        let display = MatchDisplay::new(&self.game, title)
            .highlight(self.autopilot)
            .ghost(!self.autopilot);
        let help_text = Text::from(self.help_text()).style(style::HELP).centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(display.height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        let [main_area] = Layout::horizontal([Constraint::Length(display.width())])
            .flex(Flex::Center)
            .areas(main_area);
        frame.render_widget(display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _tui: &mut Tui) {
        if self.autopilot {
            autopilot::play_turn(&self.planner, &mut self.game);
        } else {
            self.game.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use tetrabot_engine::PieceSeed;

    use super::*;

    fn press(app: &mut PlayApp, tui: &mut Tui, c: char) {
        app.handle_event(tui, &Event::Key(KeyEvent::from(KeyCode::Char(c))));
    }

    fn new_app() -> PlayApp {
        PlayApp::new(
            Match::with_seed(PieceSeed::from_u128(2)),
            Planner::default(),
            true,
        )
    }

    #[test]
    fn test_keys_ignore_case() {
        let mut tui = Tui::new();
        for (toggle, quit) in [('a', 'q'), ('A', 'Q')] {
            let mut app = new_app();
            press(&mut app, &mut tui, toggle);
            assert!(!app.autopilot);
            assert_eq!(app.tick_interval(), GRAVITY_INTERVAL);
            press(&mut app, &mut tui, toggle);
            assert!(app.autopilot);
            assert!(!app.should_exit());
            press(&mut app, &mut tui, quit);
            assert!(app.should_exit());
        }
    }

    #[test]
    fn test_upper_case_reset() {
        let mut tui = Tui::new();
        let mut app = new_app();
        app.game.hard_drop();
        assert_eq!(app.game.stats().completed_pieces(), 1);
        press(&mut app, &mut tui, 'R');
        assert_eq!(app.game.stats().completed_pieces(), 0);
    }

    #[test]
    fn test_movement_keys_need_manual_mode() {
        let mut tui = Tui::new();
        let mut app = new_app();
        let position = app.game.position();
        press(&mut app, &mut tui, ' ');
        assert_eq!(app.game.position(), position);
        assert_eq!(app.game.stats().completed_pieces(), 0);
        press(&mut app, &mut tui, 'A');
        press(&mut app, &mut tui, ' ');
        assert_eq!(app.game.stats().completed_pieces(), 1);
    }
}
