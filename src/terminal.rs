//! Line-oriented terminal I/O.
//!
//! The command loop only needs three primitives: read a line, print a line,
//! print an error line. [`Terminal`] is that seam; [`LineTerminal`] backs it
//! with any reader/writer pair, stdio in production.

use crate::config::Config;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// Read one line, write one line, write one error line.
pub trait Terminal {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Undecodable bytes are
    /// replaced rather than reported as errors.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line of regular output.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Write one line of error output.
    fn print_error(&mut self, message: &str) -> io::Result<()>;
}

/// Where error lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorSink {
    Errors,
    Output,
}

/// A [`Terminal`] over a buffered reader and two writers.
///
/// Error lines carry a configurable prefix (default `Error, `) and go to the
/// error writer unless configured to share the output writer.
pub struct LineTerminal<R, W, E> {
    input: R,
    output: W,
    errors: E,
    error_prefix: String,
    error_sink: ErrorSink,
}

impl LineTerminal<StdinLock<'static>, Stdout, Stderr> {
    /// Terminal over the process' stdin, stdout and stderr.
    pub fn stdio(config: &Config) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr(), config)
    }
}

impl<R, W, E> LineTerminal<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(input: R, output: W, errors: E, config: &Config) -> Self {
        Self {
            input,
            output,
            errors,
            error_prefix: config.error_prefix.clone(),
            error_sink: if config.errors_to_stdout {
                ErrorSink::Output
            } else {
                ErrorSink::Errors
            },
        }
    }

    /// Give back the underlying streams.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }
}

impl<R, W, E> Terminal for LineTerminal<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        // Invalid UTF-8 becomes U+FFFD and is rejected by command parsing
        // like any other malformed input.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    fn print_error(&mut self, message: &str) -> io::Result<()> {
        let sink: &mut dyn Write = match self.error_sink {
            ErrorSink::Errors => &mut self.errors,
            ErrorSink::Output => &mut self.output,
        };
        writeln!(sink, "{}{}", self.error_prefix, message)?;
        sink.flush()
    }
}
