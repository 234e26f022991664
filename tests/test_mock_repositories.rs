mod mocks;

use contact_book::repositories::ContactRepository;
use contact_book::{AddressBook, Record};
use mocks::MockContactRepository;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    book.add_record(record);
    book
}

#[test]
fn test_mock_repository_load_empty() {
    let repo = MockContactRepository::new();
    assert!(repo.load().unwrap().is_empty());
    assert_eq!(repo.get_call_count("load"), 1);
}

#[test]
fn test_mock_repository_save_then_load() {
    let repo = MockContactRepository::new();
    repo.save(&sample_book()).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded, sample_book());
    assert_eq!(repo.get_call_count("save"), 1);
}

#[test]
fn test_mock_repository_clones_share_state() {
    let repo = MockContactRepository::with_book(sample_book());
    let clone = repo.clone();
    clone.save(&AddressBook::new()).unwrap();

    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn test_mock_repository_failing_save() {
    let repo = MockContactRepository::failing();
    assert!(repo.save(&sample_book()).is_err());
    assert!(repo.stored().is_none());
}
