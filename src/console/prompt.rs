use std::io::{self, BufRead, Write};

use crate::console::parse::{parse_answer, parse_expected, parse_inputs, parse_size, Answer, ParseError};

const UNDERLINE_WIDTH: usize = 50;

/// Line-oriented prompt loop over any reader/writer pair.
///
/// Every `ask_*` method re-prompts until the line parses, and returns
/// `Ok(None)` when the input runs out.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    pub fn blank(&mut self, lines: usize) -> io::Result<()> {
        for _ in 0..lines {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    pub fn underline(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", "-".repeat(UNDERLINE_WIDTH))
    }

    /// Prints `message`, reads one line and parses it, repeating on parse errors.
    pub fn ask<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, ParseError>,
    ) -> io::Result<Option<T>> {
        let mut line = String::new();
        loop {
            writeln!(self.writer, "{message}")?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    writeln!(self.writer, "{err}")?;
                    writeln!(self.writer)?;
                }
            }
        }
    }

    pub fn ask_size(&mut self, message: &str, min: usize) -> io::Result<Option<usize>> {
        self.ask(message, |line| parse_size(line, min))
    }

    pub fn ask_inputs(&mut self, message: &str, n: usize) -> io::Result<Option<Vec<f64>>> {
        self.ask(message, |line| parse_inputs(line, n))
    }

    pub fn ask_expected(&mut self, message: &str, n: usize) -> io::Result<Option<Vec<u8>>> {
        self.ask(message, |line| parse_expected(line, n))
    }

    pub fn ask_answer(&mut self, message: &str) -> io::Result<Option<Answer>> {
        self.ask(message, parse_answer)
    }
}
