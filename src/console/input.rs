//! Guided entry and editing of contact fields.
//!
//! Every value typed here passes the guided-entry rule for its field before
//! it is accepted; invalid input is reported and asked for again.

use super::prompt::Console;
use crate::domain::StringValidator;
use crate::models::{Contact, ContactField};
use std::io::{BufRead, Write};

/// Prompt text for each field during guided entry.
fn entry_prompt(field: ContactField) -> &'static str {
    match field {
        ContactField::FirstName => "Enter the first name: ",
        ContactField::LastName => "Enter the last name: ",
        ContactField::Street => {
            "Enter the street address (include Apt# or P.O. Box if any): "
        }
        ContactField::City => "Enter the city: ",
        ContactField::State => "Enter the state: ",
        ContactField::ZipCode => "Enter the zip code (12345 or 12345-6789): ",
        ContactField::Phone => "Enter the phone number (e.g. 2105551212): ",
        ContactField::Email => "Enter the email address: ",
    }
}

/// Ask until `validator` accepts the trimmed answer.
///
/// Returns `None` if input ends first.
pub fn prompt_until_valid<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    field_name: &str,
    validator: StringValidator,
) -> Option<String> {
    loop {
        let input = console.read_line(prompt)?;
        let input = input.trim();
        if validator(input) {
            return Some(input.to_string());
        }
        console.say(format_args!("Invalid {}. Please try again.", field_name));
    }
}

/// Collect all eight fields of a new contact, in column order.
pub fn prompt_contact_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Option<Contact> {
    let mut contact = Contact::default();
    for field in ContactField::ALL {
        let value = prompt_until_valid(
            console,
            entry_prompt(field),
            field.entry_name(),
            field.validator(),
        )?;
        contact.set_field(field, value);
    }
    Some(contact)
}

/// Ask a yes/no question until the answer is `y`, `yes`, `n` or `no`.
pub fn confirm<R: BufRead, W: Write>(console: &mut Console<R, W>, message: &str) -> Option<bool> {
    loop {
        let response = console.read_line(message)?.trim().to_lowercase();
        match response.as_str() {
            "y" | "yes" => return Some(true),
            "n" | "no" => return Some(false),
            _ => console.say("Please enter 'y' or 'n'."),
        }
    }
}

/// Offer each field for replacement, editing `contact` in place.
///
/// Stops early, keeping edits made so far, if input ends.
pub fn update_fields<R: BufRead, W: Write>(console: &mut Console<R, W>, contact: &mut Contact) {
    for field in ContactField::ALL {
        let question = format!("Update {}? (y/n): ", field.label());
        match confirm(console, &question) {
            Some(true) => {
                let prompt = format!("New {}: ", field.label());
                let value =
                    prompt_until_valid(console, &prompt, field.entry_name(), field.validator());
                match value {
                    Some(value) => contact.set_field(field, value),
                    None => return,
                }
            }
            Some(false) => {}
            None => return,
        }
    }
}
