pub mod parse;
pub mod prompt;

pub use parse::{classify, parse_answer, parse_expected, parse_inputs, parse_size, Answer, ParseError};
pub use prompt::Prompter;
