use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tetrabot_engine::Match;

use crate::ui::widgets::style;

pub struct StatsDisplay<'a> {
    game: &'a Match,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(game: &'a Match) -> Self {
        Self { game, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        18 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&Match) -> String),
    LabelValue(&'static str, &'static dyn Fn(&Match) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|game| game.score().to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|game| game.level().to_string()),
    Row::LabelValue("LINES:", &|game| game.lines_cleared().to_string()),
    Row::LabelValue("PIECES:", &|game| game.stats().completed_pieces().to_string()),
    Row::Empty,
    Row::LabelValue("SINGLES:", &|game| {
        game.stats().line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|game| {
        game.stats().line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|game| {
        game.stats().line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("TETRIS:", &|game| {
        game.stats().line_cleared_counter()[4].to_string()
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.game), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.game), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
