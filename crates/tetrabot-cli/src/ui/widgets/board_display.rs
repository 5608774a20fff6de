use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tetrabot_engine::{Block, Board, Match, Position};

use crate::ui::widgets::{BlockDisplay, style};

/// The grid of a match with its active piece drawn in.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    game: &'a Match,
    block: Option<BlockWidget<'a>>,
    ghost: bool,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(game: &'a Match) -> Self {
        Self {
            game,
            block: None,
            ghost: false,
        }
    }

    /// Also marks where the active piece would land on a hard drop.
    pub fn ghost(self, ghost: bool) -> Self {
        Self { ghost, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Board::WIDTH as u16 * BlockDisplay::WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Board::HEIGHT as u16 * BlockDisplay::HEIGHT
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(BlockDisplay::WIDTH));
        let row_constraints = (0..Board::HEIGHT).map(|_| Constraint::Length(BlockDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));
        let grid_cell = |position: Position| {
            let x = usize::try_from(position.x).ok()?;
            let y = usize::try_from(position.y).ok()?;
            grid.get(y)?.get(x).copied()
        };

        for (grid_row, row) in iter::zip(&grid, self.game.board().rows()) {
            for (rect, block) in iter::zip(grid_row, row) {
                BlockDisplay::from_block(*block).render(*rect, buf);
            }
        }

        if !self.game.state().is_playing() {
            return;
        }
        let piece = self.game.piece();
        if self.ghost {
            let ghost = BlockDisplay::new(style::GHOST, "[]");
            for position in piece.occupied_positions(self.game.drop_position()) {
                if let Some(cell) = grid_cell(position) {
                    ghost.render(cell, buf);
                }
            }
        }
        let active = BlockDisplay::from_block(Block::Piece(piece.kind()));
        for position in self.game.piece_cells() {
            if let Some(cell) = grid_cell(position) {
                active.render(cell, buf);
            }
        }
    }
}
