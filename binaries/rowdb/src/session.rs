mod error;

pub use self::error::{Error, Result};

use {
    self::error::{EndOfInputSnafu, ReadInputSnafu, WriteOutputSnafu},
    crate::meta::{self, MetaCommandOutcome, META_COMMAND_PREFIX},
    def::Storage,
    executor::{Executor, Outcome},
    parser::{Error as PrepareError, Parser},
    snafu::{ensure, ResultExt},
    std::{
        fmt::Display,
        io::{BufRead, Write},
    },
    tracing::{debug, error, info, warn},
};

pub const PROMPT: &str = "db> ";

/// Whether the loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One operator session: owns its input, output and storage, and drives the
/// read, classify, execute cycle until `.exit` or a read failure.
pub struct Session<R, W, S> {
    input: R,
    output: W,
    executor: Executor<S>,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write, S: Storage> Session<R, W, S> {
    pub fn new(input: R, output: W, storage: S) -> Self {
        Self {
            input,
            output,
            executor: Executor::new(storage),
            buf: Vec::new(),
        }
    }

    /// Returns `Ok` once the operator exits. A read failure is reported to the
    /// operator and then returned as an error.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");

        loop {
            self.print_prompt()?;

            let line = match self.read_line() {
                Ok(line) => line,
                Err(e) => {
                    error!("{}", e);
                    self.print("Error reading input")?;
                    return Err(e);
                }
            };

            if self.step(&line)? == Flow::Exit {
                info!("session finished");
                return Ok(());
            }
        }
    }

    /// Handles one line, with its line terminator already removed.
    pub fn step(&mut self, line: &str) -> Result<Flow> {
        if line.starts_with(META_COMMAND_PREFIX) {
            return self.meta_command(line);
        }

        let statement = match Parser::prepare(line) {
            Ok(statement) => statement,
            Err(PrepareError::SyntaxError(reason)) => {
                debug!(line, %reason, "syntax error");
                self.print("Syntax error. Could not parse statement.")?;
                return Ok(Flow::Continue);
            }
            Err(PrepareError::UnrecognizedStatement) => {
                debug!(line, "unrecognized statement");
                self.print(format_args!("Unrecognized keyword at start of '{}'.", line))?;
                return Ok(Flow::Continue);
            }
        };

        debug!(kind = ?statement.kind(), "executing");

        match self.executor.execute(statement) {
            Ok(Outcome::Inserted) => {}
            Ok(Outcome::Rows(rows)) => {
                for row in rows {
                    self.print(row)?;
                }
            }
            Err(e) => {
                warn!("execution failed: {}", e);
                self.print(format_args!("Error: {}", e))?;
                return Ok(Flow::Continue);
            }
        }

        self.print("Executed.")?;

        Ok(Flow::Continue)
    }

    fn meta_command(&mut self, line: &str) -> Result<Flow> {
        match meta::do_meta_command(line) {
            MetaCommandOutcome::Terminate => Ok(Flow::Exit),
            MetaCommandOutcome::Success(text) => {
                if !text.is_empty() {
                    self.print(text)?;
                }
                Ok(Flow::Continue)
            }
            MetaCommandOutcome::Unrecognized => {
                debug!(line, "unrecognized meta command");
                self.print(format_args!("Unrecognized command '{}'", line))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_prompt(&mut self) -> Result<()> {
        write!(self.output, "{}", PROMPT).context(WriteOutputSnafu)?;
        self.output.flush().context(WriteOutputSnafu)
    }

    fn print(&mut self, msg: impl Display) -> Result<()> {
        writeln!(self.output, "{}", msg).context(WriteOutputSnafu)
    }

    // invalid utf-8 is replaced, not rejected
    fn read_line(&mut self) -> Result<String> {
        self.buf.clear();

        let read = self
            .input
            .read_until(b'\n', &mut self.buf)
            .context(ReadInputSnafu)?;
        ensure!(read > 0, EndOfInputSnafu);

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }

        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }
}
