use super::grid::Position;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse one of the direction keywords "up", "down", "left", or "right"
    pub(crate) fn from_keyword(s: &str) -> Option<Direction> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The unit vector of the direction as a `(row, column)` offset
    pub(crate) fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Return the position one cell away from `pos` in this direction, or
    /// `None` if that would leave a `dimension`×`dimension` grid.
    pub(crate) fn advance(self, pos: Position, dimension: u16) -> Option<Position> {
        let Position { mut row, mut col } = pos;
        match self {
            Direction::Up => row = row.checked_sub(1)?,
            Direction::Down => row = row.checked_add(1).filter(|&r| r < dimension)?,
            Direction::Left => col = col.checked_sub(1)?,
            Direction::Right => col = col.checked_add(1).filter(|&c| c < dimension)?,
        }
        Some(Position { row, col })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns `true` if turning from `self` to `other` is forbidden: the two
    /// differ but share a component of their unit vectors.
    ///
    /// With only the four cardinal directions this holds exactly when `other`
    /// is `self.reverse()`; the test does not carry over to diagonal moves.
    pub(crate) fn opposes(self, other: Direction) -> bool {
        let (r1, c1) = self.delta();
        let (r2, c2) = other.delta();
        self != other && (r1 == r2 || c1 == c2)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
