//! Field-scoped contact search and interactive disambiguation.
//!
//! Searching is a case-insensitive substring test against one attribute.
//! Results keep the order of the input collection.

use crate::error::{MatchingError, MatchingResult};
use crate::models::Contact;
use std::str::FromStr;

/// The attribute a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    First,
    Last,
    /// "First Last"
    Full,
    Email,
    Phone,
}

impl SearchField {
    /// Map a numbered menu choice (`1`-`5`) to a field.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(SearchField::First),
            "2" => Some(SearchField::Last),
            "3" => Some(SearchField::Full),
            "4" => Some(SearchField::Email),
            "5" => Some(SearchField::Phone),
            _ => None,
        }
    }

    /// True when the selected attribute of `contact` contains `needle`.
    ///
    /// `needle` must already be lowercased.
    fn matches(self, contact: &Contact, needle: &str) -> bool {
        let haystack = match self {
            SearchField::First => contact.first_name.to_lowercase(),
            SearchField::Last => contact.last_name.to_lowercase(),
            SearchField::Full => contact.full_name().to_lowercase(),
            SearchField::Email => contact.email.to_lowercase(),
            SearchField::Phone => contact.phone.to_lowercase(),
        };
        haystack.contains(needle)
    }
}

impl FromStr for SearchField {
    type Err = MatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(SearchField::First),
            "last" => Ok(SearchField::Last),
            "full" | "name" => Ok(SearchField::Full),
            "email" => Ok(SearchField::Email),
            "phone" => Ok(SearchField::Phone),
            _ => Err(MatchingError::UnknownField(s.to_string())),
        }
    }
}

/// Positions in `records` whose `field` contains `value`, ignoring case.
pub fn find_positions(records: &[Contact], field: SearchField, value: &str) -> Vec<usize> {
    let needle = value.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, c)| field.matches(c, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Copies of every record whose `field` contains `value`, ignoring case.
///
/// `field` is one of `first`, `last`, `full`, `name`, `email` or `phone`
/// (any case). An unrecognized field matches nothing.
pub fn find_matches(records: &[Contact], field: &str, value: &str) -> Vec<Contact> {
    let Ok(field) = field.parse::<SearchField>() else {
        return Vec::new();
    };
    find_positions(records, field, value)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// The interactive side of disambiguation.
///
/// [`select_index`] drives a chooser through one selection: it reports an
/// empty result, or presents the numbered candidates and keeps asking until
/// an answer names one of them or the chooser gives up.
pub trait Chooser {
    /// Called when the search produced nothing.
    fn no_matches(&mut self) {}

    /// Show the candidates; `labels[0]` is choice `1`.
    fn present(&mut self, labels: &[String]);

    /// The next raw answer. `None` cancels the selection.
    fn answer(&mut self) -> Option<String>;

    /// Called with an answer that did not name a candidate.
    fn rejected(&mut self, _answer: &str) {}
}

/// Resolve `matches` to a single index.
///
/// A single match is chosen without consulting the chooser.
///
/// # Errors
///
/// - [`MatchingError::NoMatches`] if `matches` is empty.
/// - [`MatchingError::Cancelled`] if the chooser runs out of answers.
pub fn select_index<C: Chooser + ?Sized>(
    matches: &[Contact],
    chooser: &mut C,
) -> MatchingResult<usize> {
    match matches.len() {
        0 => {
            chooser.no_matches();
            Err(MatchingError::NoMatches)
        }
        1 => Ok(0),
        n => {
            let labels: Vec<String> = matches.iter().map(Contact::compact).collect();
            chooser.present(&labels);
            loop {
                let answer = chooser.answer().ok_or(MatchingError::Cancelled)?;
                match answer.trim().parse::<usize>() {
                    Ok(choice) if (1..=n).contains(&choice) => return Ok(choice - 1),
                    _ => chooser.rejected(&answer),
                }
            }
        }
    }
}

/// Resolve `matches` to a single contact. See [`select_index`].
pub fn select_from_list<'a, C: Chooser + ?Sized>(
    matches: &'a [Contact],
    chooser: &mut C,
) -> MatchingResult<&'a Contact> {
    select_index(matches, chooser).map(|i| &matches[i])
}
