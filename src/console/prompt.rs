//! Line-based terminal I/O.

use crate::matching::Chooser;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::error;

/// A prompt/response session over any reader and writer.
///
/// Reading returns `None` at end of input, which callers treat as the user
/// backing out of whatever they were doing.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            error!("Failed to write to console: {}", e);
        }
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// The trailing line ending is stripped; other whitespace is kept.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
            error!("Failed to write to console: {}", e);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                error!("Failed to read from console: {}", e);
                None
            }
        }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Chooser for Console<R, W> {
    fn no_matches(&mut self) {
        self.say("No matching contacts found.");
    }

    fn present(&mut self, labels: &[String]) {
        self.say("Multiple matches found:");
        for (i, label) in labels.iter().enumerate() {
            self.say(format_args!("{}. {}", i + 1, label));
        }
    }

    fn answer(&mut self) -> Option<String> {
        self.read_line("Select contact by number: ")
    }

    fn rejected(&mut self, _answer: &str) {
        self.say("Invalid selection. Try again.");
    }
}
