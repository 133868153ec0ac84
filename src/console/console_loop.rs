//! Line-oriented console driver.
//!
//! Reads one command per line, applies it to the current game through the
//! public `GameState` operations and writes a plain-text reply.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::GameStatus;
use crate::utils::algebraic::{algebraic_to_square, parse_coordinate_move};
use crate::utils::pgn::write_move_log;
use crate::utils::random_moves::play_random_move;

const HELP_TEXT: &str = "\
commands:
  e2-e4 | e2e4          play a move
  moves <square>        list legal destinations of a piece
  promote <square> <k>  promote a pawn (queen, rook, bishop, knight)
  undo                  take back the last move
  new                   start a new game
  load <fen>            set up a position
  random                play a random legal move
  board | fen | log     show the position, its FEN or the move log
  state                 print a JSON snapshot
  help | quit";

pub fn run_stdio_loop(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = ConsoleSession::new(config, StdRng::from_os_rng());

    writeln!(stdout, "{}", session.game_state.render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleSession {
    game_state: GameState,
    rng: StdRng,
}

impl ConsoleSession {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        Self {
            game_state: GameState::with_config(config),
            rng,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handles one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
        let rest = rest.trim();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => writeln!(out, "{}", self.game_state.render())?,
            "fen" => writeln!(out, "{}", self.game_state.to_fen())?,
            "log" => write!(out, "{}", write_move_log(&self.game_state, &BTreeMap::new()))?,
            "state" => match self.game_state.snapshot().to_json() {
                Ok(json) => writeln!(out, "{json}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "new" => {
                self.game_state.reset();
                writeln!(out, "new game")?;
            }
            "load" => match GameState::from_fen(rest) {
                Ok(mut game_state) => {
                    game_state.set_config(self.game_state.config());
                    self.game_state = game_state;
                    writeln!(out, "loaded")?;
                }
                Err(err) => report_error(out, &err)?,
            },
            "moves" => self.handle_moves(rest, out)?,
            "promote" => self.handle_promote(rest, out)?,
            "undo" => match self.game_state.try_undo_last_move() {
                Ok(record) => writeln!(out, "undone {}", record.to_algebraic())?,
                Err(err) => report_error(out, &err)?,
            },
            "random" => match play_random_move(&mut self.game_state, &mut self.rng) {
                Ok(Some(record)) => {
                    writeln!(out, "played {}", record.to_algebraic())?;
                    self.report_status(out)?;
                }
                Ok(None) => writeln!(out, "no legal moves")?,
                Err(err) => report_error(out, &err)?,
            },
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_moves(&self, rest: &str, out: &mut impl Write) -> io::Result<()> {
        let square = match algebraic_to_square(rest) {
            Ok(square) => square,
            Err(err) => return report_error(out, &err),
        };

        let destinations: Vec<String> = self
            .game_state
            .moves_for(square, false)
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(out, "{square}: {}", destinations.join(" "))
    }

    fn handle_promote(&mut self, rest: &str, out: &mut impl Write) -> io::Result<()> {
        let mut parts = rest.split_whitespace();
        let (Some(square_text), Some(kind_text)) = (parts.next(), parts.next()) else {
            return writeln!(out, "usage: promote <square> <piece>");
        };

        let parsed = algebraic_to_square(square_text)
            .and_then(|square| Ok((square, kind_text.parse::<PieceKind>()?)));
        let result = parsed.and_then(|(square, kind)| self.game_state.try_promote_pawn(square, kind));

        match result {
            Ok(piece) => {
                writeln!(out, "promoted to {} {}", piece.color, piece.kind)?;
                self.report_status(out)
            }
            Err(err) => report_error(out, &err),
        }
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let (from, to) = match parse_coordinate_move(text) {
            Ok(squares) => squares,
            Err(_) => return writeln!(out, "unknown command: {text} (try 'help')"),
        };

        match self.game_state.try_make_move(from, to) {
            Ok(record) => {
                writeln!(out, "ok {}", record.to_algebraic())?;
                if let Some(square) = self.game_state.pending_promotion() {
                    writeln!(out, "promotion pending on {square}")?;
                }
                self.report_status(out)
            }
            Err(err) => report_error(out, &err),
        }
    }

    fn report_status(&self, out: &mut impl Write) -> io::Result<()> {
        match self.game_state.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::Check => writeln!(out, "check"),
            GameStatus::Checkmate { winner } => writeln!(out, "checkmate, {winner} wins"),
            GameStatus::Stalemate => writeln!(out, "stalemate"),
            GameStatus::InsufficientMaterial => writeln!(out, "draw by insufficient material"),
        }
    }
}

fn report_error(out: &mut impl Write, err: &ChessErrors) -> io::Result<()> {
    debug!(error = %err, "console command failed");
    writeln!(out, "error: {err}")
}
