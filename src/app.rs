use crate::board::BoardView;
use crate::command::{self, Outcome, Rejection};
use crate::consts;
use crate::game::{EndReason, Game};
use crate::util::buffer_lines;
use log::{debug, info, warn};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    widgets::Widget,
};
use std::io::{self, BufRead, Write};

/// A line-based game session: show the board, read a command, report what
/// happened, repeat until the game ends
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App { game }
    }

    pub(crate) fn run<I: BufRead, O: Write>(mut self, mut input: I, mut output: O) -> io::Result<()> {
        writeln!(output, "{}", consts::WELCOME)?;
        loop {
            self.draw(&mut output)?;
            let Some((verb, argument)) = read_command(&mut input, &mut output)? else {
                info!("End of input; quitting");
                self.game.quit();
                writeln!(output)?;
                writeln!(output, "{}", end_message(EndReason::UserRequested))?;
                break;
            };
            debug!("Read command {verb:?} with argument {argument:?}");
            match command::execute(&mut self.game, &verb, &argument) {
                Ok(Outcome::Ok) => (),
                Ok(Outcome::Rejected(rejection)) => {
                    debug!("Rejected command: {rejection}");
                    match rejection {
                        Rejection::InvalidNumber => {
                            writeln!(output, "Invalid number of steps: {argument}")?;
                        }
                        Rejection::ReversalForbidden => {
                            writeln!(output, "You can't reverse the snake's direction!")?;
                        }
                    }
                }
                Ok(Outcome::Unrecognized) => writeln!(output, "Unknown command: {verb}")?,
                Ok(Outcome::GameOver(reason)) => {
                    writeln!(output, "{}", end_message(reason))?;
                    break;
                }
                Err(e) => {
                    warn!("Game ended early: {e}");
                    writeln!(output, "Game over! There is no room left for another apple.")?;
                    break;
                }
            }
        }
        info!("Session ended with the snake at length {}", self.game.len());
        output.flush()
    }
}

impl<R> App<R> {
    fn draw<O: Write>(&self, output: &mut O) -> io::Result<()> {
        let grid = self.game.grid();
        writeln!(
            output,
            "Length: {}  Apples: {}  Heading: {}",
            self.game.len(),
            grid.apple_count(),
            self.game.direction()
        )?;
        let view = BoardView::new(&grid);
        let Size { width, height } = view.size();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        for line in buffer_lines(&buf) {
            writeln!(output, "{line}")?;
        }
        Ok(())
    }
}

/// Prompt for a command until a non-blank line is entered.  Returns `None` at
/// end of input.
fn read_command<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
) -> io::Result<Option<(String, String)>> {
    loop {
        write!(output, "{}", consts::PROMPT)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let (verb, argument) = command::split(&line);
        if !verb.is_empty() {
            return Ok(Some((verb, argument)));
        }
    }
}

fn end_message(reason: EndReason) -> &'static str {
    match reason {
        EndReason::OutOfBounds => "Game over! The snake hit the edge of the board.",
        EndReason::SelfCollision => "Game over! The snake hit itself.",
        EndReason::UserRequested => "Goodbye!",
    }
}
