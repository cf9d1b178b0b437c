use super::direction::Direction;
use super::grid::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are stored head first, so the cell at index `i` has rank `i + 1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) cells: VecDeque<Position>,
}

impl Snake {
    /// Create a snake of `len` cells with its head at `head`, its body
    /// trailing behind it opposite to `direction`.  Returns `None` if the
    /// body would leave a `dimension`×`dimension` grid.
    pub(super) fn new(
        head: Position,
        direction: Direction,
        len: usize,
        dimension: u16,
    ) -> Option<Snake> {
        let behind = direction.reverse();
        let cells = std::iter::successors(Some(head), |&p| behind.advance(p, dimension))
            .take(len)
            .collect::<VecDeque<_>>();
        (cells.len() == len).then_some(Snake { cells })
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.cells[0]
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Iterate over the cells of the snake together with their ranks, head
    /// first
    pub(super) fn ranked(&self) -> impl Iterator<Item = (usize, Position)> + '_ {
        self.cells.iter().copied().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// Move the head to `pos`.  Unless `grow` is true, the tail is dropped so
    /// that the length stays the same.
    pub(super) fn slither(&mut self, pos: Position, grow: bool) {
        self.cells.push_front(pos);
        if !grow {
            let _ = self.cells.pop_back();
        }
    }

    /// Undo a growing [`Snake::slither()`]
    pub(super) fn retract(&mut self) {
        let _ = self.cells.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trails_behind_head() {
        let snake = Snake::new(Position::new(2, 3), Direction::Up, 3, 7).unwrap();
        assert_eq!(
            snake.ranked().collect::<Vec<_>>(),
            vec![
                (1, Position::new(2, 3)),
                (2, Position::new(3, 3)),
                (3, Position::new(4, 3)),
            ]
        );
    }

    #[test]
    fn new_off_grid() {
        assert_eq!(Snake::new(Position::new(0, 1), Direction::Down, 3, 3), None);
    }

    #[test]
    fn slither_and_grow() {
        let mut snake = Snake::new(Position::new(2, 3), Direction::Up, 3, 7).unwrap();
        snake.slither(Position::new(1, 3), false);
        assert_eq!(snake.head(), Position::new(1, 3));
        assert_eq!(snake.len(), 3);
        assert!(!snake.contains(Position::new(4, 3)));
        snake.slither(Position::new(0, 3), true);
        assert_eq!(snake.len(), 4);
        assert!(snake.contains(Position::new(3, 3)));
        snake.retract();
        assert_eq!(snake.head(), Position::new(1, 3));
        assert_eq!(snake.len(), 3);
    }
}
