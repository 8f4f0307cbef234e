//! End-to-end tests for the CSV backing file and bulk import.

use address_book::codec;
use address_book::console::{App, Console};
use address_book::models::{Contact, ContactField};
use address_book::{AddressBook, Config, CsvFileRepository};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn james() -> Contact {
    Contact::new(
        "James",
        "Stevens",
        "123 Main St",
        "Chicago",
        "Illinois",
        "60601",
        "3125551212",
        "james@example.com",
    )
}

fn ada() -> Contact {
    Contact::new(
        "Ada",
        "Lovelace",
        "42 Code Ave",
        "London",
        "England",
        "12345",
        "2125551212",
        "ada@example.com",
    )
}

fn book_in(dir: &TempDir) -> AddressBook {
    let config = Config::with_data_dir(dir.path().join("data"));
    AddressBook::new(Box::new(CsvFileRepository::new(&config)))
}

#[test]
fn test_persist_then_reload_round_trip() {
    let dir = TempDir::new().unwrap();

    let mut book = book_in(&dir);
    book.add(james());
    book.add(ada());
    assert!(book.persist());

    let mut reopened = book_in(&dir);
    assert_eq!(reopened.reload(), 2);
    assert_eq!(reopened.contacts(), &[james(), ada()]);
}

#[test]
fn test_reload_replaces_working_set() {
    let dir = TempDir::new().unwrap();
    let mut book = book_in(&dir);
    book.add(james());
    assert!(book.persist());

    book.add(ada());
    assert_eq!(book.reload(), 1);
    assert_eq!(book.contacts(), &[james()]);
}

#[test]
fn test_reload_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let mut book = book_in(&dir);
    book.add(james());

    assert_eq!(book.reload(), 0);
    assert!(book.is_empty());
}

#[test]
fn test_reload_unreadable_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("address_book.csv");
    fs::create_dir_all(&path).unwrap(); // a directory where the file should be

    let mut book = book_in(&dir);
    book.add(james());
    assert_eq!(book.reload(), 0);
    assert!(!book.persist());
}

#[test]
fn test_unreadable_file_is_not_overwritten_on_exit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("address_book.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut bytes = format!("{}\n{}\n", codec::header(), codec::encode(&james())).into_bytes();
    bytes.extend_from_slice(b"Jos\xe9,Garcia,1 Elm Street,Dayton,Ohio,45402,9375551234,jose@example.com\n");
    fs::write(&path, &bytes).unwrap();

    let console = Console::new(Cursor::new(b"5\n".to_vec()), Vec::new());
    let mut app = App::new(book_in(&dir), console);
    app.run();

    let (book, console) = app.into_parts();
    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(book.load_failed());
    assert!(out.contains("could not be read"));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_short_line_is_skipped_without_aborting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("address_book.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        format!(
            "{}\n{}\nAda,Lovelace,42 Code Ave,London,England,12345,2125551212\n{}\n",
            codec::header(),
            codec::encode(&james()),
            codec::encode(&ada())
        ),
    )
    .unwrap();

    let mut book = book_in(&dir);
    assert_eq!(book.reload(), 2);
    assert_eq!(book.contacts(), &[james(), ada()]);
}

#[test]
fn test_quoted_field_is_split_on_reload() {
    let dir = TempDir::new().unwrap();
    let mut book = book_in(&dir);
    let mut c = james();
    c.set_field(ContactField::Street, "123 Main St, Apt 4");
    book.add(c);
    assert!(book.persist());

    let text = fs::read_to_string(dir.path().join("data").join("address_book.csv")).unwrap();
    assert!(text.contains("\"123 Main St, Apt 4\""));

    book.reload();
    assert_eq!(book.len(), 1);
    assert_eq!(book.contacts()[0].street, "\"123 Main St");
}

#[test]
fn test_import_keeps_valid_and_reports_rejected() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("incoming.csv");
    fs::write(
        &source,
        "First Name,Last Name,Street,City,State,Zip,Phone,Email\n\
         James,Stevens,123 Main St,Chicago,Illinois,60601,3125551212,james@example.com\n\
         Bad,Phone,1 Elm Street,Dayton,Ohio,45402,555,bad@example.com\n\
         Ada,Lovelace,42 Code Ave,London,England,12345,2125551212,ada@example.com\n\
         Bad,Zip,9 Oak Lane,Akron,Ohio,4430,3305551234,zip@example.com\n",
    )
    .unwrap();

    let mut book = book_in(&dir);
    let report = book.import(&source).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(book.contacts(), &[james(), ada()]);

    let reasons: Vec<(String, ContactField)> = report
        .rejected
        .iter()
        .map(|(c, e)| (c.compact(), e.field()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            ("Bad Phone".to_string(), ContactField::Phone),
            ("Bad Zip".to_string(), ContactField::ZipCode),
        ]
    );
}

#[test]
fn test_import_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut book = book_in(&dir);

    let err = book.import(dir.path().join("nope.csv")).unwrap_err();
    assert!(err.is_not_found());
    assert!(book.is_empty());
}
