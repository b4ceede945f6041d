//! Terminal session: setup phase, then alternating moves until checkmate or quit

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use super::display::{self, DEFAULT_BOARD_OFFSET};
use super::parser::{parse_command, Command};
use crate::board::{Board, Color};
use crate::game::Game;
use crate::persist::save_board;
use crate::rules::MoveStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup(Color),
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Left margin of the rendered board
    pub offset: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_BOARD_OFFSET,
        }
    }
}

pub struct Session {
    phase: Phase,
    game: Game,
    running: bool,
    config: SessionConfig,
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

impl Session {
    /// Start with an empty board in the white setup phase
    pub fn new(config: SessionConfig) -> Self {
        Self {
            phase: Phase::Setup(Color::White),
            game: Game::new(),
            running: true,
            config,
        }
    }

    /// Start directly in the play phase from a prepared board
    pub fn with_board(board: Board, config: SessionConfig) -> Self {
        Self {
            phase: Phase::Playing,
            game: Game::from_board(board),
            running: true,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn prompt(&self) -> String {
        match self.phase {
            Phase::Setup(Color::White) => {
                "Enter an algebraic notation to place a white figure (e.g. 'Ka1', 'next' to place black pieces):"
                    .to_string()
            }
            Phase::Setup(Color::Black) => {
                "Enter an algebraic notation to place a black figure (e.g. 'Ka8', 'next' to finally play):"
                    .to_string()
            }
            Phase::Playing => format!(" > {}, make move: ", color_name(self.game.side_to_move())),
            Phase::Finished => String::new(),
        }
    }

    pub fn render(&self) -> Vec<String> {
        display::render_board(self.game.board(), self.config.offset)
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::Notation(text) => match self.phase {
                Phase::Setup(color) => match self.game.place_notation(&text, color) {
                    Ok(_) => res.extend(self.render()),
                    Err(e) => {
                        warn!("placement {text:?} rejected: {e}");
                        res.extend(display::error(&e.to_string()));
                    }
                },
                Phase::Playing => self.play(&text, &mut res),
                Phase::Finished => res.extend(display::error("The game is over.")),
            },
            Command::Next => match self.phase {
                Phase::Setup(Color::White) => {
                    self.phase = Phase::Setup(Color::Black);
                    res.push("Starting to place black pieces!".to_string());
                }
                Phase::Setup(Color::Black) => {
                    self.phase = Phase::Playing;
                    res.extend(self.render());
                }
                _ => res.extend(display::error("'next' is only valid while placing pieces.")),
            },
            Command::Save { path } => match save_board(self.game.board(), &path) {
                Ok(()) => res.extend(display::message(&format!("Board saved to {path}"))),
                Err(e) => res.extend(display::error(&format!("Could not save board: {e}"))),
            },
            Command::Board => res.extend(self.render()),
            Command::Help => res.extend(display::help()),
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) => {
                if !s.is_empty() {
                    res.extend(display::error(&format!("Unknown command: {s}")));
                }
            }
        }
        res
    }

    fn play(&mut self, text: &str, res: &mut Vec<String>) {
        let mover = self.game.side_to_move();
        match self.game.play(text) {
            Ok(status) => {
                res.extend(self.render());
                match status {
                    MoveStatus::Normal => {}
                    MoveStatus::OpponentInCheck => res.extend(display::message("King is in check!")),
                    MoveStatus::OpponentCheckmated => {
                        res.extend(display::message(&format!(
                            "CHECKMATE! {} wins.",
                            color_name(mover)
                        )));
                        self.phase = Phase::Finished;
                        self.running = false;
                    }
                }
            }
            Err(e) => {
                // same player moves again
                debug!("{mover:?} move {text:?} rejected: {e}");
                res.extend(display::error(&e.to_string()));
            }
        }
    }
}

pub fn run_session<R: BufRead, W: Write>(
    mut session: Session,
    mut reader: R,
    mut writer: W,
) -> io::Result<Session> {
    for line in display::welcome() {
        writeln!(writer, "{}", line)?;
    }
    if session.phase() == Phase::Playing {
        for line in session.render() {
            writeln!(writer, "{}", line)?;
        }
    }

    let mut buf = String::new();
    while session.is_running() {
        write!(writer, "{}", session.prompt())?;
        if matches!(session.phase(), Phase::Setup(_)) {
            writeln!(writer)?;
        }
        writer.flush()?;

        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let responses = session.handle_command(parse_command(&buf));
        for r in responses {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    Ok(session)
}

pub fn run_stdio(session: Session) -> io::Result<Session> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(session, stdin.lock(), stdout.lock())
}
