use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Widget},
};
use tetrabot_engine::{Block, PieceKind};

use crate::ui::widgets::style;

/// One board cell, two terminal columns wide.
#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn from_block(block: Block) -> Self {
        match block {
            Block::Empty => Self::new(style::EMPTY_DOT, "."),
            Block::Piece(kind) => Self::new(piece_style(kind), ""),
        }
    }
}

fn piece_style(kind: PieceKind) -> Style {
    match kind {
        PieceKind::I => style::I_BLOCK,
        PieceKind::O => style::O_BLOCK,
        PieceKind::T => style::T_BLOCK,
        PieceKind::S => style::S_BLOCK,
        PieceKind::Z => style::Z_BLOCK,
        PieceKind::J => style::J_BLOCK,
        PieceKind::L => style::L_BLOCK,
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Overlays must not keep the glyph of the cell underneath
        Clear.render(area, buf);
        // Paragraph fills the whole area, not just the cells holding the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
