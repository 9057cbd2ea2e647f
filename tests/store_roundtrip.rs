use blackbook::api::BlackbookApi;
use blackbook::entity::Entity;
use blackbook::record::Record;
use blackbook::store::fs::FileStore;
use blackbook::store::{DataStore, Vault};
use tempfile::TempDir;

fn sample_vault() -> Vault {
    let mut vault = Vault::default();

    let mut alice = Record::new("Alice").unwrap();
    alice.add_phone("0123456789").unwrap();
    alice.add_phone("0123456789").unwrap(); // duplicates by value are legal
    alice.add_email("alice@example.com").unwrap();
    alice.add_address("12 Main St").unwrap();
    alice.add_birthday("01.01.1990").unwrap();
    alice.add_tags(&["friend", "work"]).unwrap();
    vault.contacts.add(alice).unwrap();

    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("0987654321").unwrap();
    vault.contacts.add(bob).unwrap();

    vault.notes.add_note("Groceries", "milk and eggs").unwrap();
    vault.notes.add_note("Ideas", "").unwrap();
    vault
        .notes
        .find_note_mut("Ideas")
        .unwrap()
        .unwrap()
        .add_tags(&["someday"])
        .unwrap();

    vault
}

#[test]
fn missing_file_loads_empty_vault() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data.json"));
    let vault = store.load().unwrap();
    assert!(vault.contacts.is_empty());
    assert!(vault.notes.is_empty());
}

#[test]
fn vault_round_trips_without_loss() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("data.json"));

    let vault = sample_vault();
    store.save(&vault).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, vault);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("nested").join("data.json"));
    store.save(&Vault::default()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = FileStore::new(path);
    assert!(store.load().is_err());
}

#[test]
fn api_mutations_are_written_through() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    {
        let mut api = BlackbookApi::open(FileStore::new(path.clone())).unwrap();
        api.add_contact("Alice").unwrap();
        api.add_phone("Alice", "0123456789").unwrap();
        api.add_note("Groceries", "milk").unwrap();
    }

    // A fresh session over the same file sees everything.
    let api = BlackbookApi::open(FileStore::new(path)).unwrap();
    let record = api.get_contact("Alice").unwrap();
    assert_eq!(record.phones()[0].value(), "0123456789");
    assert_eq!(api.get_note("Groceries").unwrap().content().value(), "milk");
}
