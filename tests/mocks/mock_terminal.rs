use address_book::Terminal;
use std::collections::VecDeque;
use std::io;

/// One line written to the mock terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Out(String),
    Err(String),
}

/// Mock terminal for testing.
///
/// Feeds a scripted list of input lines and records every output and error
/// line in the order they were written.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockTerminal {
    input: VecDeque<String>,
    written: Vec<Line>,
    reads: usize,
}

#[allow(dead_code)]
impl MockTerminal {
    /// Create a terminal that will return `lines` and then end of input.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Everything written so far.
    pub fn written(&self) -> &[Line] {
        &self.written
    }

    /// Only the regular output lines.
    pub fn output(&self) -> Vec<&str> {
        self.written
            .iter()
            .filter_map(|l| match l {
                Line::Out(s) => Some(s.as_str()),
                Line::Err(_) => None,
            })
            .collect()
    }

    /// Only the error lines.
    pub fn errors(&self) -> Vec<&str> {
        self.written
            .iter()
            .filter_map(|l| match l {
                Line::Err(s) => Some(s.as_str()),
                Line::Out(_) => None,
            })
            .collect()
    }

    /// Number of times `read_line` was called.
    pub fn read_count(&self) -> usize {
        self.reads
    }

    /// Lines that were never read.
    pub fn unread(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for MockTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads += 1;
        Ok(self.input.pop_front())
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.written.push(Line::Out(line.to_string()));
        Ok(())
    }

    fn print_error(&mut self, message: &str) -> io::Result<()> {
        self.written.push(Line::Err(message.to_string()));
        Ok(())
    }
}
