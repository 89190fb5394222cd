//! JSON encoding of a whole address book.
//!
//! Layout:
//!
//! ```json
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Ann", "phones": ["1234567890"], "birthday": "01.01.2000" },
//!     { "name": "Bo", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! Field values are validated again while decoding.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};

/// Layout version written by [`encode`].
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Serialize the whole book.
pub fn encode(book: &AddressBook) -> StorageResult<Vec<u8>> {
    let stored = StoredBookRef {
        version: FORMAT_VERSION,
        contacts: book.records().collect(),
    };
    Ok(serde_json::to_vec_pretty(&stored)?)
}

/// Rebuild a book from bytes produced by [`encode`].
///
/// Contacts are added in stored order; a repeated name replaces the earlier
/// entry the same way [`AddressBook::add_record`] does.
///
/// # Errors
///
/// - `StorageError::Corrupt` if the bytes are not valid JSON of this layout or
///   a stored field fails validation
/// - `StorageError::UnsupportedVersion` for an unknown layout version
pub fn decode(bytes: &[u8]) -> StorageResult<AddressBook> {
    let stored: StoredBook = serde_json::from_slice(bytes)?;
    if stored.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: stored.version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(stored.contacts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    fn sample_book() -> AddressBook {
        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("1234567890").unwrap();
        ann.set_birthday("01.01.2000").unwrap();

        let bo = Record::new("Bo").unwrap();

        let mut cy = Record::new("Cy").unwrap();
        cy.add_phone("2222222222").unwrap();
        cy.add_phone("1111111111").unwrap();
        cy.add_phone("2222222222").unwrap();

        vec![ann, bo, cy].into_iter().collect()
    }

    #[test]
    fn test_round_trip_preserves_book() {
        let book = sample_book();
        let restored = decode(&encode(&book).unwrap()).unwrap();

        assert_eq!(restored, book);
        assert_eq!(restored.names().collect::<Vec<_>>(), vec!["Ann", "Bo", "Cy"]);

        let ann = restored.find("Ann").unwrap();
        assert_eq!(ann.phones()[0].as_str(), "1234567890");
        assert_eq!(ann.birthday().map(|b| b.as_str()), Some("01.01.2000"));

        let bo = restored.find("Bo").unwrap();
        assert!(bo.phones().is_empty());
        assert!(bo.birthday().is_none());

        let cy: Vec<&str> = restored
            .find("Cy")
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect();
        assert_eq!(cy, vec!["2222222222", "1111111111", "2222222222"]);
    }

    #[test]
    fn test_encode_writes_null_birthday() {
        let book: AddressBook = vec![Record::new("Bo").unwrap()].into_iter().collect();
        let json: serde_json::Value = serde_json::from_slice(&encode(&book).unwrap()).unwrap();

        assert_eq!(json["version"], 1);
        assert_eq!(json["contacts"][0]["name"], "Bo");
        assert!(json["contacts"][0]["birthday"].is_null());
        assert_eq!(json["contacts"][0]["phones"], serde_json::json!([]));
    }

    #[test]
    fn test_decode_rejects_invalid_phone() {
        let bytes = br#"{"version":1,"contacts":[{"name":"Ann","phones":["12"],"birthday":null}]}"#;
        assert!(matches!(decode(bytes), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode(b"not json"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let bytes = br#"{"version":7,"contacts":[]}"#;
        assert!(matches!(
            decode(bytes),
            Err(StorageError::UnsupportedVersion { found: 7, expected: 1 })
        ));
    }

    #[test]
    fn test_decode_repeated_name_keeps_last() {
        let bytes = br#"{"version":1,"contacts":[
            {"name":"Ann","phones":["1111111111"]},
            {"name":"Ann","phones":["2222222222"]}
        ]}"#;
        let book = decode(bytes).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Ann").unwrap().phones()[0].as_str(), "2222222222");
    }
}
