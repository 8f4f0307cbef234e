//! Line-oriented parsing of delimited text into records.
//!
//! Splitting is a plain split on the delimiter. Quoted fields written by
//! [`super::formatter::encode`] are not reassembled, so a field that needed
//! quoting will not survive a save/load cycle intact.

use crate::models::Contact;
use tracing::debug;

/// Number of columns in a contact line.
pub const FIELD_COUNT: usize = 8;

/// Converts the tokens of one line into a value.
///
/// Returning `None` means the line is skipped.
pub trait LineParser {
    type Output;

    fn parse(&self, tokens: &[&str]) -> Option<Self::Output>;
}

/// Parses the eight contact columns, trimming each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactLineParser;

impl LineParser for ContactLineParser {
    type Output = Contact;

    fn parse(&self, tokens: &[&str]) -> Option<Contact> {
        decode(tokens)
    }
}

/// Build a contact from at least eight tokens; extra tokens are ignored.
///
/// Fewer than eight tokens yields `None`.
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Option<Contact> {
    if tokens.len() < FIELD_COUNT {
        return None;
    }
    let t = |i: usize| tokens[i].as_ref().trim().to_string();

    Some(Contact {
        first_name: t(0),
        last_name: t(1),
        street: t(2),
        city: t(3),
        state: t(4),
        zip_code: t(5),
        phone: t(6),
        email: t(7),
    })
}

/// Applies a [`LineParser`] to every non-blank line of a file.
#[derive(Debug, Clone)]
pub struct FileParser<P> {
    delimiter: String,
    parser: P,
}

impl<P: LineParser> FileParser<P> {
    pub fn new(delimiter: impl Into<String>, parser: P) -> Self {
        Self {
            delimiter: delimiter.into(),
            parser,
        }
    }

    /// Parse each line, dropping blank lines and lines the parser rejects.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<P::Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split(self.delimiter.as_str()).collect();
            match self.parser.parse(&tokens) {
                Some(item) => result.push(item),
                None => debug!("Skipping malformed line ({} tokens)", tokens.len()),
            }
        }
        result
    }
}

impl FileParser<ContactLineParser> {
    /// Comma-delimited contact parser.
    pub fn contacts() -> Self {
        Self::new(",", ContactLineParser)
    }
}
