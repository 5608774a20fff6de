use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use tetrabot_engine::{Match, MatchState};

use crate::ui::widgets::{BoardDisplay, StatsDisplay, color, style};

/// A board next to its stats panel, with a popup once the match is over.
#[derive(Debug)]
pub struct MatchDisplay<'a> {
    game: &'a Match,
    title: String,
    highlight: bool,
    ghost: bool,
}

impl<'a> MatchDisplay<'a> {
    pub fn new(game: &'a Match, title: impl Into<String>) -> Self {
        Self {
            game,
            title: title.into(),
            highlight: false,
            ghost: false,
        }
    }

    /// Draws the borders in the accent colour, used for the autopilot.
    pub fn highlight(self, highlight: bool) -> Self {
        Self { highlight, ..self }
    }

    /// Shows the landing spot of the active piece.
    pub fn ghost(self, ghost: bool) -> Self {
        Self { ghost, ..self }
    }

    pub fn width(&self) -> u16 {
        let (board, stats) = self.widgets(color::WHITE);
        board.width() + 1 + stats.width()
    }

    pub fn height(&self) -> u16 {
        let (board, stats) = self.widgets(color::WHITE);
        u16::max(board.height(), stats.height())
    }

    fn widgets(&self, border_color: Color) -> (BoardDisplay<'a>, StatsDisplay<'a>) {
        let board = BoardDisplay::new(self.game).ghost(self.ghost).block(
            Block::bordered()
                .title(Line::from(self.title.clone()).centered())
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        let stats = StatsDisplay::new(self.game).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        (board, stats)
    }
}

impl Widget for MatchDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.game.state() {
            MatchState::Playing if self.highlight => color::MAGENTA,
            MatchState::Playing => color::WHITE,
            MatchState::GameOver => color::RED,
        };
        let (board, stats) = self.widgets(border_color);

        let [board_column, stats_column] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Start)
        .spacing(1)
        .areas(area);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_column);

        let board_width = board.width();
        board.render(board_area, buf);
        stats.render(stats_area, buf);

        if self.game.state().is_game_over() {
            let style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(style);
            let text = Text::styled("GAME OVER", style).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
