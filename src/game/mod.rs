mod direction;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid, Position};
use self::snake::Snake;
use crate::consts;
use crate::options::Options;
use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// The state of a single game: the snake, the apples, and the direction of
/// travel on a square grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    dimension: u16,
    apple_target: usize,
    snake: Snake,
    apples: HashSet<Position>,
    direction: Direction,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options) -> Result<Self, NewGameError> {
        Game::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Start a new game with the snake in the middle of the grid heading up
    /// and `options.apples` apples scattered at random.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the options describe an unplayable grid or if the
    /// apples could not all be placed.
    pub(crate) fn new_with_rng(options: Options, rng: R) -> Result<Game<R>, NewGameError> {
        let Options { dimension, apples } = options;
        validate(dimension, apples)?;
        let middle = dimension / 2;
        let head = Position::new(middle - 1, middle);
        let snake = Snake::new(
            head,
            Direction::Up,
            consts::INITIAL_SNAKE_LENGTH,
            dimension,
        )
        .ok_or(ConfigurationError::DimensionTooSmall(dimension))?;
        let mut game = Game {
            rng,
            dimension,
            apple_target: apples,
            snake,
            apples: HashSet::new(),
            direction: Direction::Up,
            state: GameState::Running,
        };
        game.place_apples(apples)?;
        debug_assert_eq!(game.apples.len(), game.apple_target);
        info!("Started {dimension}x{dimension} game with {apples} apple(s)");
        Ok(game)
    }

    /// Move the snake forwards one cell in the current direction.
    ///
    /// If the snake leaves the grid or runs into its own body, the game ends
    /// and the snake is left where it was before the move.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the snake ate an apple and no replacement could be
    /// placed.  The move is undone and the game ends.
    pub(crate) fn advance(&mut self) -> Result<Movement, PlacementError> {
        match self.state {
            GameState::Running => (),
            GameState::Over(reason) => return Ok(Movement::Terminated(reason)),
            GameState::Exhausted => return Err(PlacementError),
        }
        let Some(target) = self.direction.advance(self.snake.head(), self.dimension) else {
            self.end(EndReason::OutOfBounds);
            return Ok(Movement::Terminated(EndReason::OutOfBounds));
        };
        if self.snake.contains(target) {
            self.end(EndReason::SelfCollision);
            return Ok(Movement::Terminated(EndReason::SelfCollision));
        }
        if self.apples.remove(&target) {
            self.snake.slither(target, true);
            if let Err(e) = self.place_apples(1) {
                warn!("No room for a new apple after eating the one at {target}");
                self.snake.retract();
                self.apples.insert(target);
                self.state = GameState::Exhausted;
                return Err(e);
            }
            debug!("Snake ate the apple at {target}; length is now {}", self.len());
            Ok(Movement::Grew)
        } else {
            self.snake.slither(target, false);
            debug!("Snake moved to {target}");
            Ok(Movement::Continued)
        }
    }

    /// Place `qty` new apples, each on a random empty cell that is not next to
    /// another apple.
    fn place_apples(&mut self, qty: usize) -> Result<(), PlacementError> {
        let mut pool = Position::all(self.dimension)
            .filter(|&p| !self.snake.contains(p) && !self.apples.contains(&p))
            .collect::<Vec<_>>();
        let mut placed = 0;
        while placed < qty {
            if pool.is_empty() {
                return Err(PlacementError);
            }
            let candidate = pool.swap_remove(self.rng.random_range(0..pool.len()));
            if !candidate
                .neighbors(self.dimension)
                .any(|p| self.apples.contains(&p))
            {
                self.apples.insert(candidate);
                placed += 1;
            }
        }
        Ok(())
    }
}

impl<R> Game<R> {
    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    /// Return the length of the snake
    pub(crate) fn len(&self) -> usize {
        self.snake.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the snake's direction of travel.  No check against reversing is
    /// performed here.  Has no effect once the game has ended.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if self.running() {
            self.direction = direction;
        }
    }

    /// End the game at the player's request
    pub(crate) fn quit(&mut self) {
        if self.running() {
            self.end(EndReason::UserRequested);
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Return the reason the game ended, if it has ended for a reason other
    /// than running out of room for apples
    pub(crate) fn end_reason(&self) -> Option<EndReason> {
        match self.state {
            GameState::Over(reason) => Some(reason),
            _ => None,
        }
    }

    /// Return a snapshot of the board
    pub(crate) fn grid(&self) -> Grid {
        let mut grid = Grid::new(self.dimension);
        for &pos in &self.apples {
            grid.set(pos, Cell::Apple);
        }
        for (rank, pos) in self.snake.ranked() {
            grid.set(pos, Cell::Snake(rank));
        }
        debug_assert_eq!(grid.get(self.head()), Some(Cell::Snake(1)));
        grid
    }

    /// Replace the apples on the board
    #[cfg(test)]
    pub(crate) fn set_apples<I: IntoIterator<Item = Position>>(&mut self, apples: I) {
        self.apples = apples.into_iter().collect();
    }

    fn end(&mut self, reason: EndReason) {
        info!(
            "Game over ({reason}) with the snake at length {}",
            self.len()
        );
        self.state = GameState::Over(reason);
    }
}

fn validate(dimension: u16, apples: usize) -> Result<(), ConfigurationError> {
    if dimension < consts::MIN_DIMENSION {
        return Err(ConfigurationError::DimensionTooSmall(dimension));
    }
    if apples == 0 {
        return Err(ConfigurationError::NoApples);
    }
    let cells = usize::from(dimension) * usize::from(dimension);
    if apples > cells.div_ceil(2) || apples + consts::INITIAL_SNAKE_LENGTH > cells {
        return Err(ConfigurationError::TooManyApples { dimension, apples });
    }
    Ok(())
}

/// The result of moving the snake one cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Movement {
    /// The snake moved onto an empty cell
    Continued,
    /// The snake ate an apple and got longer
    Grew,
    /// The game is over
    Terminated(EndReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    /// The snake tried to leave the grid
    OutOfBounds,
    /// The snake ran into its own body
    SelfCollision,
    /// The player quit
    UserRequested,
}

impl EndReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            EndReason::OutOfBounds => "out of bounds",
            EndReason::SelfCollision => "self collision",
            EndReason::UserRequested => "quit",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over(EndReason),
    /// An apple was eaten and there was nowhere to put a new one
    Exhausted,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigurationError {
    #[error("grid dimension {0} is too small; it must be at least 3")]
    DimensionTooSmall(u16),
    #[error("there must be at least one apple")]
    NoApples,
    #[error("{apples} apples do not fit on a {dimension}x{dimension} grid")]
    TooManyApples { dimension: u16, apples: usize },
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left to place an apple on")]
pub(crate) struct PlacementError;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum NewGameError {
    #[error("invalid game options")]
    Configuration(#[from] ConfigurationError),
    #[error("failed to scatter the initial apples")]
    Placement(#[from] PlacementError),
}
