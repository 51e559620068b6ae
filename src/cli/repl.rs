//! Interactive game loop over any line reader and writer

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::{command::Command, input, output};
use crate::{
    Error, Result,
    app::EngineConfig,
    session::{StepOutcome, TurnController},
};

/// Whether the loop keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands and moves from `input`, writes the transcript to `output`.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{app::EngineConfig, cli::Repl};
///
/// let input = "start easy easy\nexit\n".as_bytes();
/// let mut repl = Repl::new(input, Vec::new(), EngineConfig::new().with_seed(1));
/// repl.run()?;
/// let transcript = String::from_utf8(repl.into_output()).unwrap();
/// assert!(transcript.contains("Making move level \"easy\""));
/// # Ok::<(), tictactoe_ai::Error>(())
/// ```
pub struct Repl<R, W> {
    input: R,
    output: W,
    controller: TurnController,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: EngineConfig) -> Self {
        Self {
            input,
            output,
            controller: TurnController::new(config),
        }
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures and broken invariants end the loop with an error;
    /// bad user input is reported and re-prompted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", output::COMMAND_PROMPT)?;
            let Some(line) = self.read_line()? else {
                debug!("input closed");
                return Ok(());
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!(line = %err.line, "rejected command");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            let Some(setup) = command.setup() else {
                return Ok(());
            };
            let started = match self.controller.config().start_board() {
                Ok(board) => self
                    .controller
                    .start(board.map_or(setup, |board| setup.with_board(board))),
                Err(err) => Err(err),
            };
            if let Err(err) = started {
                warn!(%err, "session setup rejected");
                writeln!(self.output, "Bad parameters")?;
                continue;
            }

            writeln!(self.output, "{}", self.controller.board())?;
            if self.play_session()? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn play_session(&mut self) -> Result<Flow> {
        loop {
            let (_, kind) = self.controller.pending_mover()?;

            let step = if kind.is_human() {
                match self.human_move()? {
                    Some(step) => step,
                    None => return Ok(Flow::Quit),
                }
            } else {
                writeln!(self.output, "{}", output::computer_move(kind))?;
                self.controller.advance()?
            };

            writeln!(self.output, "{}", self.controller.board())?;
            if let Some(message) = output::status_message(step.status) {
                writeln!(self.output, "{message}")?;
                return Ok(Flow::Continue);
            }
        }
    }

    /// Prompt until a legal move is entered. `None` when input runs out.
    fn human_move(&mut self) -> Result<Option<StepOutcome>> {
        loop {
            writeln!(self.output, "{}", output::COORDINATES_PROMPT)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let index = match input::parse_move(&line, self.controller.board()) {
                Ok(index) => index,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            return self.controller.submit_human_move(index).map(Some);
        }
    }

    /// Next input line without its terminator. Invalid UTF-8 is replaced,
    /// so it reaches the parsers as ordinary bad input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .map_err(|source| Error::Io {
                operation: "read input line".to_string(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
