use crate::game::{Direction, EndReason, Game, Movement, PlacementError};
use log::debug;
use rand::Rng;
use std::fmt;

/// Split a line of input into a lowercased verb and a lowercased argument.
/// The argument is everything after the first run of whitespace, and is empty
/// if there is none.
pub(crate) fn split(text: &str) -> (String, String) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((verb, argument)) => (verb.to_lowercase(), argument.trim().to_lowercase()),
        None => (text.to_lowercase(), String::new()),
    }
}

/// A command recognized by [`execute()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Move(i64),
    Turn(Direction),
    Quit,
}

impl Command {
    /// Determine which command a verb & argument pair represent.  Returns
    /// `Ok(None)` for an unknown verb.
    pub(crate) fn from_parts(verb: &str, argument: &str) -> Result<Option<Command>, Rejection> {
        match verb {
            "move" if argument.is_empty() => Ok(Some(Command::Move(1))),
            "move" => argument
                .parse::<i64>()
                .map(|n| Some(Command::Move(n)))
                .map_err(|_| Rejection::InvalidNumber),
            "exit" | "quit" => Ok(Some(Command::Quit)),
            _ => Ok(Direction::from_keyword(verb).map(Command::Turn)),
        }
    }
}

/// Carry out the command given by `verb` & `argument` on `game`.
///
/// # Errors
///
/// Returns `Err` if the snake ate an apple during a move and no new apple
/// could be placed.  The game is over at that point, and every later command
/// returns the same error.
pub(crate) fn execute<R: Rng>(
    game: &mut Game<R>,
    verb: &str,
    argument: &str,
) -> Result<Outcome, PlacementError> {
    let cmd = match Command::from_parts(verb, argument) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return Ok(Outcome::Unrecognized),
        Err(rejection) => return Ok(Outcome::Rejected(rejection)),
    };
    debug!("Executing {cmd:?}");
    if !game.running() {
        return game.end_reason().map(Outcome::GameOver).ok_or(PlacementError);
    }
    match cmd {
        Command::Move(steps) => {
            for _ in 0..steps {
                if let Movement::Terminated(reason) = game.advance()? {
                    return Ok(Outcome::GameOver(reason));
                }
            }
            Ok(Outcome::Ok)
        }
        Command::Turn(direction) => {
            let current = game.direction();
            if direction == current {
                Ok(Outcome::Ok)
            } else if direction.opposes(current) {
                Ok(Outcome::Rejected(Rejection::ReversalForbidden))
            } else {
                game.set_direction(direction);
                Ok(Outcome::Ok)
            }
        }
        Command::Quit => {
            game.quit();
            Ok(Outcome::GameOver(EndReason::UserRequested))
        }
    }
}

/// What became of an executed command
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Ok,
    /// The command was understood but not carried out; play continues
    Rejected(Rejection),
    GameOver(EndReason),
    Unrecognized,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Rejection {
    /// The argument to "move" is not an integer
    InvalidNumber,
    /// The snake cannot turn back on itself
    ReversalForbidden,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidNumber => write!(f, "invalid number of steps"),
            Rejection::ReversalForbidden => write!(f, "you can't reverse the snake's direction"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Position};
    use crate::options::Options;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(
            Options {
                dimension: 7,
                apples: 5,
            },
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .unwrap()
    }

    /// Run a full line of input
    fn run(game: &mut Game<ChaCha12Rng>, text: &str) -> Outcome {
        let (verb, argument) = split(text);
        execute(game, &verb, &argument).unwrap()
    }

    /// Start a game whose only apples are at `apples`
    fn game_with_apples<I: IntoIterator<Item = Position>>(apples: I) -> Game<ChaCha12Rng> {
        let mut game = new_game();
        game.set_apples(apples);
        game
    }

    #[rstest]
    #[case("move", "move", "")]
    #[case("  MOVE   3  ", "move", "3")]
    #[case("Move\t-2", "move", "-2")]
    #[case("turn left now", "turn", "left now")]
    #[case("UP", "up", "")]
    #[case("", "", "")]
    #[case("   ", "", "")]
    fn test_split(#[case] text: &str, #[case] verb: &str, #[case] argument: &str) {
        assert_eq!(split(text), (String::from(verb), String::from(argument)));
    }

    #[rstest]
    #[case("move", "", Ok(Some(Command::Move(1))))]
    #[case("move", "4", Ok(Some(Command::Move(4))))]
    #[case("move", "-4", Ok(Some(Command::Move(-4))))]
    #[case("move", "four", Err(Rejection::InvalidNumber))]
    #[case("move", "1.5", Err(Rejection::InvalidNumber))]
    #[case("up", "", Ok(Some(Command::Turn(Direction::Up))))]
    #[case("down", "", Ok(Some(Command::Turn(Direction::Down))))]
    #[case("left", "", Ok(Some(Command::Turn(Direction::Left))))]
    #[case("right", "", Ok(Some(Command::Turn(Direction::Right))))]
    #[case("exit", "", Ok(Some(Command::Quit)))]
    #[case("quit", "", Ok(Some(Command::Quit)))]
    #[case("jump", "", Ok(None))]
    #[case("", "", Ok(None))]
    fn test_from_parts(
        #[case] verb: &str,
        #[case] argument: &str,
        #[case] r: Result<Option<Command>, Rejection>,
    ) {
        assert_eq!(Command::from_parts(verb, argument), r);
    }

    #[test]
    fn move_one_step() {
        let mut game = game_with_apples([Position::new(6, 6)]);
        assert_eq!(run(&mut game, "move 1"), Outcome::Ok);
        assert_eq!(game.head(), Position::new(1, 3));
        assert_eq!(game.len(), 3);
        assert_eq!(game.grid().get(Position::new(4, 3)), Some(Cell::Empty));
    }

    #[test]
    fn move_defaults_to_one_step() {
        let mut game = new_game();
        assert_eq!(run(&mut game, "move"), Outcome::Ok);
        assert_eq!(game.head(), Position::new(1, 3));
    }

    #[rstest]
    #[case("move 0")]
    #[case("move -3")]
    fn move_nonpositive_does_nothing(#[case] text: &str) {
        let mut game = new_game();
        let before = game.grid();
        assert_eq!(run(&mut game, text), Outcome::Ok);
        assert_eq!(game.grid(), before);
    }

    #[test]
    fn move_invalid_number() {
        let mut game = new_game();
        let before = game.grid();
        assert_eq!(
            run(&mut game, "move lots"),
            Outcome::Rejected(Rejection::InvalidNumber)
        );
        assert_eq!(game.grid(), before);
    }

    #[test]
    fn move_stops_at_edge() {
        let mut game = game_with_apples([Position::new(6, 6)]);
        // The head starts on row 2, so the third step leaves the grid.
        assert_eq!(
            run(&mut game, "move 10"),
            Outcome::GameOver(EndReason::OutOfBounds)
        );
        assert_eq!(game.head(), Position::new(0, 3));
        assert_eq!(
            run(&mut game, "move"),
            Outcome::GameOver(EndReason::OutOfBounds)
        );
        assert_eq!(game.head(), Position::new(0, 3));
    }

    #[rstest]
    #[case(Direction::Up, "down")]
    #[case(Direction::Down, "up")]
    #[case(Direction::Left, "right")]
    #[case(Direction::Right, "left")]
    fn reversal_rejected(#[case] current: Direction, #[case] text: &str) {
        let mut game = new_game();
        game.set_direction(current);
        let before = game.grid();
        assert_eq!(
            run(&mut game, text),
            Outcome::Rejected(Rejection::ReversalForbidden)
        );
        assert_eq!(game.direction(), current);
        assert_eq!(game.grid(), before);
    }

    #[rstest]
    #[case("up", Direction::Up)]
    #[case("LEFT", Direction::Left)]
    #[case("right", Direction::Right)]
    fn turn_accepted(#[case] text: &str, #[case] direction: Direction) {
        let mut game = new_game();
        let before = game.grid();
        assert_eq!(run(&mut game, text), Outcome::Ok);
        assert_eq!(game.direction(), direction);
        assert_eq!(game.grid(), before);
    }

    #[rstest]
    #[case("exit")]
    #[case("quit")]
    #[case("  Quit ")]
    fn quit(#[case] text: &str) {
        let mut game = new_game();
        assert_eq!(
            run(&mut game, text),
            Outcome::GameOver(EndReason::UserRequested)
        );
        assert!(!game.running());
        assert_eq!(
            run(&mut game, "left"),
            Outcome::GameOver(EndReason::UserRequested)
        );
        assert_eq!(game.direction(), Direction::Up);
    }

    #[test]
    fn unrecognized() {
        let mut game = new_game();
        let before = game.grid();
        assert_eq!(run(&mut game, "jump 3"), Outcome::Unrecognized);
        assert_eq!(run(&mut game, ""), Outcome::Unrecognized);
        assert_eq!(game.grid(), before);
        assert_eq!(game.direction(), Direction::Up);
    }

    #[test]
    fn eat_apple() {
        let mut game = game_with_apples([Position::new(0, 3), Position::new(5, 0)]);
        assert_eq!(run(&mut game, "move 1"), Outcome::Ok);
        assert_eq!(game.len(), 3);
        assert_eq!(run(&mut game, "move 1"), Outcome::Ok);
        assert_eq!(game.head(), Position::new(0, 3));
        assert_eq!(game.len(), 4);
        let grid = game.grid();
        assert_eq!(grid.apple_count(), 2);
        assert_eq!(grid.get(Position::new(5, 0)), Some(Cell::Apple));
        assert_eq!(grid.get(Position::new(3, 3)), Some(Cell::Snake(4)));
    }

    #[test]
    fn move_into_body() {
        let mut game = game_with_apples([Position::new(1, 3)]);
        assert_eq!(run(&mut game, "move"), Outcome::Ok);
        assert_eq!(game.len(), 4);
        game.set_apples([Position::new(6, 6)]);
        assert_eq!(run(&mut game, "right"), Outcome::Ok);
        assert_eq!(run(&mut game, "move"), Outcome::Ok);
        assert_eq!(run(&mut game, "down"), Outcome::Ok);
        assert_eq!(run(&mut game, "move"), Outcome::Ok);
        assert_eq!(run(&mut game, "left"), Outcome::Ok);
        assert_eq!(
            run(&mut game, "move 2"),
            Outcome::GameOver(EndReason::SelfCollision)
        );
        assert_eq!(game.head(), Position::new(2, 4));
        assert_eq!(game.len(), 4);
    }
}
