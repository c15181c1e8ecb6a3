//! Turns operator-typed lines into numbers the network can use.
//!
//! Every parser is a pure function over one line of text; the retry loop
//! lives in [`Prompter`](super::Prompter).

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Wrong number of input values on the line.
    InputCount { expected: usize },
    /// Wrong number of expected-output values on the line.
    OutputCount { expected: usize },
    /// A token did not parse as a finite real number.
    InvalidNumber { token: String },
    /// An expected output was not 0 or 1.
    NotBinary { token: String },
    /// A layer size was missing, malformed or below its minimum.
    TooSmall { min: usize },
    /// Anything other than y / n / exit.
    UnrecognizedAnswer,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InputCount { expected } => write!(f, "{expected} inputs are required."),
            ParseError::OutputCount { expected } => write!(f, "{expected} outputs are required."),
            ParseError::InvalidNumber { .. } => write!(f, "You entered an invalid number.  Try again"),
            ParseError::NotBinary { .. } => write!(f, "You must enter 1s and 0s!"),
            ParseError::TooSmall { min } => write!(f, "Enter a whole number of at least {min}."),
            ParseError::UnrecognizedAnswer => write!(f, "Please answer y, n or exit."),
        }
    }
}

impl std::error::Error for ParseError {}

/// Operator's reply to "was the result right?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Exit,
}

/// Exactly `n` whitespace-separated finite reals.
pub fn parse_inputs(line: &str, n: usize) -> Result<Vec<f64>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n {
        return Err(ParseError::InputCount { expected: n });
    }
    tokens.into_iter()
        .map(|token| match token.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(x),
            _ => Err(ParseError::InvalidNumber { token: token.to_string() }),
        })
        .collect()
}

/// Exactly `n` whitespace-separated values, each `0` or `1`.
pub fn parse_expected(line: &str, n: usize) -> Result<Vec<u8>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n {
        return Err(ParseError::OutputCount { expected: n });
    }
    tokens.into_iter()
        .map(|token| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            _ => Err(ParseError::NotBinary { token: token.to_string() }),
        })
        .collect()
}

pub fn parse_answer(line: &str) -> Result<Answer, ParseError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" => Ok(Answer::Yes),
        "n" => Ok(Answer::No),
        "exit" => Ok(Answer::Exit),
        _ => Err(ParseError::UnrecognizedAnswer),
    }
}

/// A layer size of at least `min`.
pub fn parse_size(line: &str, min: usize) -> Result<usize, ParseError> {
    match line.trim().parse::<usize>() {
        Ok(n) if n >= min => Ok(n),
        _ => Err(ParseError::TooSmall { min }),
    }
}

/// Thresholds each output at 0.5 and renders the classes as `"1 0 1"`.
pub fn classify(outputs: &[f64]) -> String {
    outputs.iter()
        .map(|&o| if o > 0.5 { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ")
}
