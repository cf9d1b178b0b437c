use std::fmt;

/// A cell coordinate.  Row 0 is the top row and column 0 is the leftmost
/// column.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) row: u16,
    pub(crate) col: u16,
}

impl Position {
    pub(crate) const fn new(row: u16, col: u16) -> Position {
        Position { row, col }
    }

    /// Return the positions orthogonally adjacent to `self` that lie within a
    /// `dimension`×`dimension` grid
    pub(crate) fn neighbors(self, dimension: u16) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            row.checked_add(1)
                .filter(|&r| r < dimension)
                .map(|r| Position::new(r, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
            col.checked_add(1)
                .filter(|&c| c < dimension)
                .map(|c| Position::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }

    /// Iterate over every position of a `dimension`×`dimension` grid in
    /// row-major order
    pub(crate) fn all(dimension: u16) -> impl Iterator<Item = Position> {
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The contents of a single grid cell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Cell {
    #[default]
    Empty,
    Apple,
    /// Part of the snake.  Rank 1 is the head; higher ranks run towards the
    /// tail, whose rank equals the snake's length.
    Snake(usize),
}

impl Cell {
    pub(crate) fn is_head(self) -> bool {
        self == Cell::Snake(1)
    }
}

/// A read-only snapshot of a game's board
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    dimension: u16,
    cells: Vec<Cell>,
}

impl Grid {
    pub(super) fn new(dimension: u16) -> Grid {
        let side = usize::from(dimension);
        Grid {
            dimension,
            cells: vec![Cell::Empty; side * side],
        }
    }

    pub(crate) fn dimension(&self) -> u16 {
        self.dimension
    }

    pub(crate) fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// Iterate over the rows of the grid from top to bottom
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(usize::from(self.dimension).max(1))
    }

    /// Iterate over every cell along with its position, in row-major order
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all(self.dimension).zip(self.cells.iter().copied())
    }

    pub(crate) fn apple_count(&self) -> usize {
        self.cells().filter(|&(_, c)| c == Cell::Apple).count()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.dimension && pos.col < self.dimension)
            .then(|| usize::from(pos.row) * usize::from(self.dimension) + usize::from(pos.col))
    }
}
