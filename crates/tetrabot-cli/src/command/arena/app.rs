use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::Text,
};
use tetrabot_evaluator::arena::Arena;

use crate::{
    tui::{App, Tui},
    ui::widgets::{MatchDisplay, style},
};

const UPDATE_INTERVAL: Duration = Duration::from_millis(100);
const MAX_COLUMNS: usize = 4;

#[derive(Debug)]
pub struct ArenaApp {
    arena: Arena,
    is_exiting: bool,
}

impl ArenaApp {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            is_exiting: false,
        }
    }
}

impl App for ArenaApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(UPDATE_INTERVAL));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q' | 'Q') => self.is_exiting = true,
                KeyCode::Char('r' | 'R') => self.arena.reset(),
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let displays: Vec<_> = self
            .arena
            .matches()
            .iter()
            .enumerate()
            .map(|(i, game)| MatchDisplay::new(game, format!("PLAYER {}", i + 1)))
            .collect();
        let Some(first) = displays.first() else {
            return;
        };
        let (cell_width, cell_height) = (first.width(), first.height());

        let status = format!(
            "Active: {}/{} | R (Reset) | Q (Quit)",
            self.arena.active_players(),
            self.arena.num_players()
        );
        let [grid_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let num_rows = displays.len().div_ceil(MAX_COLUMNS);
        let rows = Layout::vertical((0..num_rows).map(|_| Constraint::Length(cell_height)))
            .spacing(1)
            .split(grid_area);

        let mut displays = displays.into_iter();
        for row_area in rows.iter().copied() {
            let cells: Vec<_> = displays.by_ref().take(MAX_COLUMNS).collect();
            let cell_areas: Vec<Rect> =
                Layout::horizontal(cells.iter().map(|_| Constraint::Length(cell_width)))
                    .flex(Flex::Center)
                    .spacing(2)
                    .split(row_area)
                    .to_vec();
            for (display, area) in cells.into_iter().zip(cell_areas) {
                frame.render_widget(display, area);
            }
        }
        frame.render_widget(Text::from(status).style(style::HELP).centered(), help_area);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.arena.update();
    }
}
