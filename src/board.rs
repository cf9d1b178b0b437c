use crate::consts;
use crate::game::{Cell, Grid};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect, Size},
    widgets::{Block, Widget},
};

/// Widget drawing a [`Grid`] inside a border, one character per cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BoardView<'a> {
    grid: &'a Grid,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        BoardView { grid }
    }

    /// The size of the area needed to draw the whole board
    pub(crate) fn size(&self) -> Size {
        let side = self.grid.dimension().saturating_add(2);
        Size {
            width: side,
            height: side,
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered().render(area, buf);
        let inner = area.inner(Margin::new(1, 1));
        for (y, row) in (inner.y..inner.bottom()).zip(self.grid.rows()) {
            for (x, &cell) in (inner.x..inner.right()).zip(row) {
                if let Some(c) = buf.cell_mut((x, y)) {
                    c.set_char(symbol(cell));
                }
            }
        }
    }
}

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => consts::EMPTY_SYMBOL,
        Cell::Apple => consts::APPLE_SYMBOL,
        c if c.is_head() => consts::SNAKE_HEAD_SYMBOL,
        Cell::Snake(_) => consts::SNAKE_BODY_SYMBOL,
    }
}
