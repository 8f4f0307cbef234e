//! The interactive menu loop.

use super::input::{prompt_contact_details, update_fields};
use super::prompt::Console;
use crate::matching::SearchField;
use crate::services::AddressBook;
use std::io::{BufRead, Write};

/// Menu-driven front end over an [`AddressBook`].
///
/// Successful adds, deletes and updates are saved immediately.
pub struct App<R, W> {
    book: AddressBook,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(book: AddressBook, console: Console<R, W>) -> Self {
        Self { book, console }
    }

    /// Load the address book and serve menu choices until exit or end of input.
    pub fn run(&mut self) {
        self.book.reload();
        if self.book.load_failed() {
            self.console.say(
                "Warning: the address book file could not be read. Changes will not be saved.",
            );
        }

        loop {
            self.display_menu();
            let Some(choice) = self.console.read_line("Enter choice: ") else {
                self.book.persist();
                return;
            };

            match choice.trim() {
                "1" => self.add(),
                "2" => self.delete(),
                "3" => self.update(),
                "4" => self.display(),
                "5" => {
                    self.book.persist();
                    self.console.say("Goodbye!");
                    return;
                }
                _ => self.console.say("Invalid choice."),
            }
        }
    }

    /// Consume the app, returning the address book and console.
    pub fn into_parts(self) -> (AddressBook, Console<R, W>) {
        (self.book, self.console)
    }

    fn display_menu(&mut self) {
        self.console.say("\n--- Address Book Menu ---");
        self.console.say("1. Add Contact");
        self.console.say("2. Delete Contact");
        self.console.say("3. Update Contact");
        self.console.say("4. Display Contacts");
        self.console.say("5. Exit");
    }

    fn add(&mut self) {
        if let Some(contact) = prompt_contact_details(&mut self.console) {
            let name = contact.compact();
            self.book.add(contact);
            self.book.persist();
            self.console.say(format_args!("Contact {} added.", name));
        }
    }

    fn delete(&mut self) {
        let Some((field, value)) = self.search_terms() else {
            return;
        };

        let deleted = self
            .book
            .delete(field, &value, &mut self.console, |console, contact| {
                let question = format!(
                    "Are you sure you want to delete {}? (y/n): ",
                    contact.compact()
                );
                console.read_line(&question).unwrap_or_default()
            });

        match deleted {
            Some(contact) => {
                self.book.persist();
                self.console.say(format_args!(
                    "The contact, {}, has been deleted.",
                    contact.compact()
                ));
            }
            None => self.console.say("No contact deleted."),
        }
    }

    fn update(&mut self) {
        let Some((field, value)) = self.search_terms() else {
            return;
        };

        let updated = self
            .book
            .update(field, &value, &mut self.console, |console, contact| {
                update_fields(console, contact)
            })
            .map(|(_, after)| after.card());

        match updated {
            Some(card) => {
                self.book.persist();
                self.console.say("Contact updated:");
                self.console.say(card);
            }
            None => self.console.say("No contact selected."),
        }
    }

    fn display(&mut self) {
        if self.book.is_empty() {
            self.console.say("Address book is empty.");
            return;
        }
        self.console.say("\n---------- Address Book Contacts ----------\n");
        for contact in self.book.contacts() {
            self.console.say(contact.card());
        }
    }

    /// Ask which field to search and the value to look for.
    fn search_terms(&mut self) -> Option<(SearchField, String)> {
        self.console.say("Search by:");
        self.console.say("1. First name");
        self.console.say("2. Last name");
        self.console.say("3. Full name");
        self.console.say("4. Email");
        self.console.say("5. Phone");
        let choice = self.console.read_line("Enter choice (1-5): ")?;

        let Some(field) = SearchField::from_menu_choice(&choice) else {
            self.console.say("Invalid selection.");
            return None;
        };
        let value = self.console.read_line("Enter value to search: ")?;
        Some((field, value))
    }
}
