//! The engine puts all pieces together: it runs a game between a human
//! player, who types the moves, and the computer, which searches for its
//! replies.
//!
//! [`Engine::game_loop`] is the "main loop" of the engine which communicates
//! with the human through the input and output streams.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::checkers::core::{Move, Player, Square};
use crate::checkers::position::Position;
use crate::engine::command::{parse_difficulty, Command};
use crate::search::{Difficulty, Searcher, DEFAULT_TABLE_CAPACITY};

mod command;

/// Game settings, usually coming from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Strength of the computer player. The human is asked to choose it when
    /// not set.
    pub difficulty: Option<Difficulty>,
    /// Side played by the human.
    pub human: Player,
    /// Transposition table capacity (in positions) of the computer player.
    pub table_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: None,
            human: Player::Dark,
            table_capacity: DEFAULT_TABLE_CAPACITY,
        }
    }
}

/// The Engine connects everything together: it owns the game state, reads the
/// human moves and makes the computer moves.
pub struct Engine<'a, R: BufRead, W: Write> {
    position: Position,
    searcher: Searcher,
    config: Config,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with starting position and provided
    /// I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W, config: Config) -> Self {
        Self {
            position: Position::starting(),
            searcher: Searcher::new(config.table_capacity),
            config,
            input,
            output,
        }
    }

    /// Replaces the starting position of the game.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Plays the game until one of the sides wins, the human types `quit` or
    /// the input stream ends.
    ///
    /// # Errors
    ///
    /// Reading from the input or writing to the output fails.
    pub fn game_loop(&mut self) -> anyhow::Result<()> {
        self.print_instructions()?;
        let difficulty = match self.config.difficulty {
            Some(difficulty) => difficulty,
            None => match self.read_difficulty()? {
                Some(difficulty) => difficulty,
                None => return Ok(()),
            },
        };
        log::info!(
            "New game: {difficulty} difficulty, human plays {:?}, position {}",
            self.config.human,
            self.position
        );

        loop {
            writeln!(self.output, "{:?}", self.position)?;
            if let Some(winner) = self.position.winner() {
                log::info!("{winner:?} wins");
                writeln!(self.output, "{winner:?} wins!")?;
                break;
            }
            let side = self.position.us();
            if side == self.config.human {
                writeln!(self.output, "\nYour turn ({side:?})")?;
                let Some(next_move) = self.read_move()? else {
                    log::info!("Game stopped by the human");
                    break;
                };
                log::info!("Human plays {next_move}");
                self.play(&next_move)?;
            } else {
                writeln!(self.output, "\nAI's turn ({side:?})")?;
                let Some(next_move) = self.searcher.best_move(&mut self.position, difficulty)
                else {
                    bail!("no moves found for {side:?} in {}", self.position);
                };
                writeln!(
                    self.output,
                    "AI moves from {} to {}",
                    next_move.from(),
                    next_move.to()
                )?;
                self.play(&next_move)?;
            }
        }
        Ok(())
    }

    fn play(&mut self, next_move: &Move) -> anyhow::Result<()> {
        if !self.position.make_move(next_move) {
            bail!("illegal move {next_move} in {}", self.position);
        }
        Ok(())
    }

    fn print_instructions(&mut self) -> anyhow::Result<()> {
        let human = self.config.human;
        let computer = !human;
        writeln!(self.output, "\nWelcome to Checkers!")?;
        writeln!(self.output, "Instructions:")?;
        writeln!(
            self.output,
            "- You play as {human:?} ({}/{}), AI plays as {computer:?} ({}/{})",
            man_symbol(human),
            king_symbol(human),
            man_symbol(computer),
            king_symbol(computer),
        )?;
        writeln!(self.output, "- Uppercase letters (D/L) represent kings")?;
        writeln!(self.output, "- Enter squares in algebraic notation (e.g. 'b3')")?;
        writeln!(self.output, "- Captures are mandatory")?;
        writeln!(self.output, "- Type 'quit' to end the game\n")?;
        Ok(())
    }

    /// Asks the human to choose the difficulty until the answer is valid.
    /// Returns [`None`] if the human quits.
    fn read_difficulty(&mut self) -> anyhow::Result<Option<Difficulty>> {
        loop {
            writeln!(self.output, "Select difficulty level:")?;
            writeln!(self.output, "1. Easy")?;
            writeln!(self.output, "2. Medium")?;
            writeln!(self.output, "3. Hard")?;
            write!(self.output, "Enter choice (1-3): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if Command::parse(&line) == Command::Quit {
                return Ok(None);
            }
            if let Some(difficulty) = parse_difficulty(&line) {
                return Ok(Some(difficulty));
            }
        }
    }

    /// Reads the piece and its destination until they make a legal move.
    /// Returns [`None`] if the human quits.
    fn read_move(&mut self) -> anyhow::Result<Option<Move>> {
        loop {
            write!(self.output, "Select a piece to move (or 'quit'): ")?;
            let from = match self.read_command()? {
                Command::Quit => return Ok(None),
                Command::Select(square) => square,
                Command::Cancel => {
                    writeln!(self.output, "Invalid position. Use format like 'b3'.")?;
                    continue;
                },
                Command::Unknown(input) => {
                    log::debug!("Expected a square, got {input:?}");
                    writeln!(self.output, "Invalid position. Use format like 'b3'.")?;
                    continue;
                },
            };

            let moves = self.moves_from(from);
            if moves.is_empty() {
                writeln!(self.output, "No valid moves for this piece. Choose another.")?;
                continue;
            }
            writeln!(self.output, "Possible moves (type 'x' to pick another piece):")?;
            writeln!(self.output, "{}", moves.iter().map(Move::to).join(" "))?;
            write!(self.output, "Enter move: ")?;
            let to = match self.read_command()? {
                Command::Quit => return Ok(None),
                Command::Cancel => continue,
                Command::Select(square) => square,
                Command::Unknown(input) => {
                    log::debug!("Expected a destination square, got {input:?}");
                    writeln!(self.output, "Invalid move. Try again.")?;
                    continue;
                },
            };

            match moves.into_iter().find(|candidate| candidate.to() == to) {
                Some(next_move) => return Ok(Some(next_move)),
                None => writeln!(self.output, "Invalid move. Try again.")?,
            }
        }
    }

    /// Moves of the piece that respect the mandatory capture rule for the whole
    /// side: a piece that can only step has no moves while another piece can
    /// jump.
    fn moves_from(&self, square: Square) -> Vec<Move> {
        let legal_moves = self.position.legal_moves();
        self.position
            .moves_from(square)
            .into_iter()
            .filter(|candidate| legal_moves.contains(candidate))
            .collect()
    }

    /// Reads the next command. The end of the input is treated as
    /// [`Command::Quit`].
    fn read_command(&mut self) -> anyhow::Result<Command> {
        Ok(self
            .read_line()?
            .map_or(Command::Quit, |line| Command::parse(&line)))
    }

    /// Reads the next line or returns [`None`] at the end of the input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from input")?;
        Ok((read != 0).then_some(line))
    }
}

const fn man_symbol(player: Player) -> char {
    match player {
        Player::Dark => 'd',
        Player::Light => 'l',
    }
}

const fn king_symbol(player: Player) -> char {
    match player {
        Player::Dark => 'D',
        Player::Light => 'L',
    }
}
