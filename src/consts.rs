//! Assorted constants & hard-coded configuration

/// Number of cells the snake occupies when a game starts
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// The smallest grid on which the initial snake can be placed
pub(crate) const MIN_DIMENSION: u16 = 3;

/// Grid dimension used when no configuration sets one
pub(crate) const DEFAULT_DIMENSION: u16 = 10;

/// Apple count used when no configuration sets one
pub(crate) const DEFAULT_APPLES: usize = 3;

/// Glyph for a cell holding nothing
pub(crate) const EMPTY_SYMBOL: char = ' ';

/// Glyph for an apple
pub(crate) const APPLE_SYMBOL: char = '.';

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '+';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '*';

/// Shown before reading each command
pub(crate) const PROMPT: &str = "command> ";

/// Printed once when a session starts
pub(crate) const WELCOME: &str = "Welcome to a game of  S N E K";
