//! Behavior of records and the address book as seen through the public API.

use contact_book::domain::{Birthday, Phone};
use contact_book::{AddressBook, BookError, FieldKind, Record, ValidationError};

fn phones(record: &Record) -> Vec<&str> {
    record.phones().iter().map(Phone::as_str).collect()
}

fn contact(name: &str, phone_list: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phone_list {
        record.add_phone(*phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).unwrap();
    }
    record
}

#[test]
fn test_every_ten_digit_string_is_a_phone() {
    for seed in [0u64, 1, 42, 1234567890, 9999999999, 5550001111] {
        let raw = format!("{:010}", seed);
        assert!(Phone::new(raw.as_str()).is_ok(), "{} should be valid", raw);
    }
}

#[test]
fn test_other_strings_are_not_phones() {
    for raw in ["", "123", "123456789", "12345678901", "12345 67890", "(123)45678", "abcdefghij"] {
        match Phone::new(raw) {
            Err(ValidationError::InvalidFormat { kind, value }) => {
                assert_eq!(kind, FieldKind::Phone);
                assert_eq!(value, raw);
            }
            Ok(_) => panic!("{:?} should be rejected", raw),
        }
    }
}

#[test]
fn test_birthday_accepts_calendar_dates_only() {
    assert!(Birthday::new("15.01.1990").is_ok());
    assert!(Birthday::new("29.02.1996").is_ok());
    assert!(Birthday::new("31.12.1999").is_ok());

    assert!(Birthday::new("31.04.1990").is_err());
    assert!(Birthday::new("29.02.1900").is_err());
    assert!(Birthday::new("1990.01.15").is_err());
    assert!(Birthday::new("15-01-1990").is_err());
}

#[test]
fn test_edit_phone_scenario() {
    let mut book = AddressBook::new();

    let mut john = Record::new("John").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    assert!(john.add_phone("9876543210l").is_err());
    assert!(john.set_birthday("20327").is_err());
    book.add_record(john);

    let mut jane = Record::new("Jane").unwrap();
    jane.add_phone("9876543210").unwrap();
    book.add_record(jane);

    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 5555555555; 1112223333, birthday: None"
    );
    assert_eq!(john.find_phone("5555555555").map(Phone::as_str), Some("5555555555"));
    assert!(john.days_to_birthday().is_none());

    book.delete("Jane");
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_edit_absent_phone_fails_and_leaves_list() {
    let mut record = contact("Ann", &["1111111111", "2222222222"], None);

    let result = record.edit_phone("3333333333", "4444444444");
    assert!(matches!(result, Err(BookError::PhoneNotFound { .. })));
    assert_eq!(phones(&record), vec!["1111111111", "2222222222"]);
}

#[test]
fn test_edit_present_phone_replaces_it() {
    let mut record = contact("Ann", &["1111111111", "2222222222"], None);

    record.edit_phone("1111111111", "4444444444").unwrap();
    assert!(record.find_phone("1111111111").is_none());
    assert!(record.find_phone("4444444444").is_some());
    assert_eq!(record.phones().len(), 2);
}

#[test]
fn test_add_record_twice_replaces_first_entirely() {
    let mut book = AddressBook::new();
    book.add_record(contact("Ann", &["1111111111"], Some("01.01.2000")));
    book.add_record(contact("Ann", &[], None));

    let ann = book.find("Ann").unwrap();
    assert!(ann.phones().is_empty());
    assert!(ann.birthday().is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_iterate_five_records_by_two() {
    let book: AddressBook = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|name| contact(name, &[], None))
        .collect();

    let pages: Vec<String> = book.iter_pages(2).unwrap().collect();
    assert_eq!(pages.len(), 3);

    let records_per_page: Vec<usize> = pages.iter().map(|page| page.lines().count() - 1).collect();
    assert_eq!(records_per_page, vec![2, 2, 1]);

    let headers: Vec<&str> = pages.iter().map(|page| page.lines().next().unwrap()).collect();
    assert_eq!(headers, vec!["Page 1:", "Page 2:", "Page 3:"]);
}

#[test]
fn test_iterate_rejects_zero_page_size() {
    let book = AddressBook::new();
    assert!(matches!(book.iter_pages(0), Err(BookError::InvalidPageSize(0))));
}

#[test]
fn test_search_across_fields() {
    let mut book = AddressBook::new();
    book.add_record(contact("Olena", &["0501234567"], Some("12.05.1993")));
    book.add_record(contact("Petro", &["0679998877", "0501110000"], None));
    book.add_record(contact("Iryna", &[], Some("01.12.1988")));

    let names = |query: &str| -> Vec<String> {
        book.search(query)
            .unwrap()
            .iter()
            .map(|record| record.name().to_string())
            .collect()
    };

    assert_eq!(names("OLE"), vec!["Olena"]);
    assert_eq!(names("050"), vec!["Olena", "Petro"]);
    assert_eq!(names(".12."), vec!["Iryna"]);
    assert_eq!(names("1993"), vec!["Olena"]);
    assert!(names("nobody").is_empty());
}
