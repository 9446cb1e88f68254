//! Interactive game loop over line-oriented input.
//!
//! Players type 1-based `x y` pairs matching the drawn labels. The loop only
//! talks to the game through its string boundary, parsing the JSON it gets
//! back.

use anyhow::{Context, Result};
use qipan::{BoardState, GameInfo, MoveReport, Player, QipanGame, StatusKind};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  x y     place a mark at column x, row y (1-based, as drawn)
  board   show the board
  info    show turn, status and move count
  reset   start a new game
  help    show this help
  quit    leave";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at 1-based column and row.
    Move {
        /// Column, 1-based.
        x: i64,
        /// Row, 1-based.
        y: i64,
    },
    /// Show the board.
    Board,
    /// Show game metadata.
    Info,
    /// Start over.
    Reset,
    /// Show commands.
    Help,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, String>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let parsed = match words.as_slice() {
            [] => return None,
            ["board"] => Ok(Input::Board),
            ["info"] => Ok(Input::Info),
            ["reset"] => Ok(Input::Reset),
            ["help"] => Ok(Input::Help),
            ["quit"] | ["exit"] => Ok(Input::Quit),
            [x, y] => match (x.parse::<i64>(), y.parse::<i64>()) {
                (Ok(x), Ok(y)) => Ok(Input::Move { x, y }),
                _ => Err(format!("not a coordinate pair: {}", line.trim())),
            },
            _ => Err(format!("unknown command: {} (try `help`)", line.trim())),
        };
        Some(parsed)
    }
}

/// A terminal session around one game.
pub struct Session<R, W> {
    game: QipanGame,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session. With `json`, every response is raw boundary JSON.
    pub fn new(game: QipanGame, input: R, output: W, json: bool) -> Self {
        Self {
            game,
            input,
            output,
            json,
        }
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self), fields(json = self.json))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        if !self.json {
            self.show_board()?;
            writeln!(self.output, "{} (X) moves first. Type `help` for commands.", Player::PlayerA)?;
        }

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line).context("Failed to read input")? == 0 {
                debug!("End of input");
                break;
            }
            let command = match Input::parse(&line) {
                None => continue,
                Some(Ok(command)) => command,
                Some(Err(message)) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            };
            debug!(?command, "Command");
            if command == Input::Quit {
                break;
            }
            self.handle(command)?;
        }

        info!("Session ended");
        Ok(())
    }

    fn handle(&mut self, command: Input) -> Result<()> {
        match command {
            Input::Move { x, y } => self.play(x.saturating_sub(1), y.saturating_sub(1)),
            Input::Board => self.show_board(),
            Input::Info => self.show_info(),
            Input::Reset => {
                self.game.reset();
                if self.json {
                    writeln!(self.output, "{}", self.game.get_game_info())?;
                    Ok(())
                } else {
                    writeln!(self.output, "New game.")?;
                    self.show_board()
                }
            }
            Input::Help => {
                writeln!(self.output, "{HELP}")?;
                Ok(())
            }
            Input::Quit => Ok(()),
        }
    }

    fn play(&mut self, x: i64, y: i64) -> Result<()> {
        let text = self.game.make_move(x, y);
        if self.json {
            writeln!(self.output, "{text}")?;
            return Ok(());
        }

        let report: MoveReport =
            serde_json::from_str(&text).context("Engine returned an unreadable move report")?;
        match report {
            MoveReport::Rejected { message, .. } => {
                writeln!(self.output, "Move rejected: {message}")?;
            }
            MoveReport::Accepted {
                status,
                winner,
                turn,
                ..
            } => {
                self.show_board()?;
                match (status, winner) {
                    (StatusKind::Won, Some(winner)) => writeln!(
                        self.output,
                        "{winner} wins! Type `reset` for a new game or `quit` to leave."
                    )?,
                    (StatusKind::Drawn, _) | (StatusKind::Won, None) => writeln!(
                        self.output,
                        "Draw! Type `reset` for a new game or `quit` to leave."
                    )?,
                    (StatusKind::InProgress, _) => {
                        writeln!(self.output, "{turn} ({}) to move.", turn.marker())?
                    }
                }
            }
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let text = self.game.get_board_state();
        if self.json {
            writeln!(self.output, "{text}")?;
        } else {
            let board = BoardState::decode(&text).context("Engine returned an unreadable board")?;
            write!(self.output, "{}", board.render())?;
        }
        Ok(())
    }

    fn show_info(&mut self) -> Result<()> {
        let text = self.game.get_game_info();
        if self.json {
            writeln!(self.output, "{text}")?;
            return Ok(());
        }

        let info: GameInfo =
            serde_json::from_str(&text).context("Engine returned unreadable game info")?;
        let status = match (info.status, info.winner) {
            (StatusKind::InProgress, _) => format!("{} to move", info.turn),
            (StatusKind::Won, Some(winner)) => format!("won by {winner}"),
            (StatusKind::Won, None) | (StatusKind::Drawn, _) => "drawn".to_string(),
        };
        writeln!(
            self.output,
            "Move {}: {}. Stones X={} O={}. Board {}x{}, {} in a row wins.",
            info.move_count,
            status,
            info.stones.player_a,
            info.stones.player_b,
            info.cols,
            info.rows,
            info.win_length,
        )?;
        Ok(())
    }

    /// Consumes the session, returning the game and the output sink.
    pub fn into_parts(self) -> (QipanGame, W) {
        (self.game, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qipan::{EngineConfig, GameStatus};
    use std::io::Cursor;

    fn run_script(script: &str, json: bool) -> (QipanGame, String) {
        let game = QipanGame::with_config(EngineConfig::tic_tac_toe());
        let mut session = Session::new(game, Cursor::new(script.to_string()), Vec::new(), json);
        session.run().unwrap();
        let (game, output) = session.into_parts();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("  "), None);
        assert_eq!(Input::parse("2 3\n"), Some(Ok(Input::Move { x: 2, y: 3 })));
        assert_eq!(Input::parse("board"), Some(Ok(Input::Board)));
        assert_eq!(Input::parse("exit"), Some(Ok(Input::Quit)));
        assert!(matches!(Input::parse("a b"), Some(Err(_))));
        assert!(matches!(Input::parse("fly away now"), Some(Err(_))));
    }

    #[test]
    fn test_human_game_to_a_win() {
        let (game, output) = run_script("1 1\n2 1\n1 2\n2 2\n1 3\nquit\n", false);
        assert_eq!(
            game.engine().status(),
            GameStatus::WonBy(Player::PlayerA)
        );
        assert!(output.contains("Player A wins!"));
    }

    #[test]
    fn test_inputs_are_one_based() {
        let (game, output) = run_script("0 1\n3 3\n", false);
        assert!(output.contains("Move rejected: coordinates (-1, 0) are outside the board"));
        assert_eq!(game.engine().move_count(), 1);
        assert_eq!(
            game.engine().last_move().map(|m| (m.coord.x, m.coord.y)),
            Some((2, 2))
        );
    }

    #[test]
    fn test_extreme_coordinates_are_rejected() {
        let (game, output) = run_script("-9223372036854775808 1\n1 9223372036854775807\n", false);
        assert_eq!(output.matches("Move rejected: coordinates").count(), 2);
        assert!(output.contains(&format!("({}, 0)", i64::MIN)));
        assert_eq!(game.engine().move_count(), 0);
    }

    #[test]
    fn test_json_mode_prints_boundary_output() {
        let (_, output) = run_script("2 2\n2 2\ninfo\n", true);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(r#""result":"accepted""#));
        assert!(lines[1].contains(r#""error":"cell_occupied""#));
        assert!(lines[2].contains(r#""move_count":1"#));
    }

    #[test]
    fn test_reset_command() {
        let (game, output) = run_script("1 1\nreset\ninfo\n", false);
        assert_eq!(game.engine().move_count(), 0);
        assert!(output.contains("New game."));
        assert!(output.contains("Move 0: Player A to move."));
    }

    #[test]
    fn test_unknown_command_keeps_going() {
        let (game, output) = run_script("jump\n2 2\n", false);
        assert!(output.contains("unknown command: jump"));
        assert_eq!(game.engine().move_count(), 1);
    }
}
