#![cfg(feature = "sqlite")]

use modelmap::Value;
use pretty_assertions::assert_eq;
use tests::{
    models::{Account, Author, Book, Event, Membership, Setting},
    sqlite_db, OpKind,
};

fn dune() -> Book {
    Book {
        title: "Dune".into(),
        pages: 412,
        tags: vec!["scifi".into(), "classic".into()],
        ..Default::default()
    }
}

#[test]
fn create_then_load() {
    let (mut db, log) = sqlite_db();

    let mut book = dune();
    db.create(&mut book).unwrap();

    assert!(book.id.is_some());
    assert!(book.created_at.is_some());
    assert_eq!(book.updated_at, None);

    let mut loaded = Book {
        id: book.id,
        ..Default::default()
    };
    db.load(&mut loaded).unwrap();

    assert_eq!(loaded, book);

    assert_eq!(log.pop().kind, OpKind::QueryRow);
    assert_eq!(log.pop().kind, OpKind::QueryRow);
}

#[test]
fn update_refreshes_updated_at() {
    let (mut db, _log) = sqlite_db();

    let mut book = dune();
    db.create(&mut book).unwrap();

    book.title = "Dune Messiah".into();
    book.pages = 256;
    db.update_fields(&mut book, &[Book::fields().title]).unwrap();
    assert!(book.updated_at.is_some());

    let mut loaded = Book {
        id: book.id,
        ..Default::default()
    };
    db.load(&mut loaded).unwrap();

    assert_eq!(loaded.title, "Dune Messiah");
    assert_eq!(loaded.pages, 412);
    assert_eq!(loaded.updated_at, book.updated_at);
}

#[test]
fn soft_deleted_rows_are_not_loaded() {
    let (mut db, log) = sqlite_db();

    let mut author = Author {
        name: "Frank".into(),
        ..Default::default()
    };
    db.create(&mut author).unwrap();
    db.delete(&mut author).unwrap();

    assert!(author.deleted_at.is_some());
    assert!(author.updated_at.is_some());

    let mut loaded = Author {
        id: author.id,
        ..Default::default()
    };
    let err = db.load(&mut loaded).unwrap_err();
    assert!(err.is_record_not_found());

    assert_eq!(
        log.sql()[1],
        "UPDATE authors SET updated_at = NOW(), deleted_at = NOW() WHERE (id = ?) RETURNING updated_at, deleted_at"
    );
}

#[test]
fn updating_a_missing_row_is_not_found() {
    let (mut db, _log) = sqlite_db();

    let mut book = Book {
        id: Some(999),
        ..dune()
    };
    let err = db.update(&mut book).unwrap_err();

    assert!(err.is_record_not_found());
}

#[test]
fn save_inserts_then_updates() {
    let (mut db, log) = sqlite_db();

    let mut book = dune();
    db.save(&mut book).unwrap();
    let id = book.id;
    assert!(id.is_some());

    book.pages = 500;
    db.save(&mut book).unwrap();
    assert_eq!(book.id, id);

    let sql = log.sql();
    assert!(sql[0].starts_with("INSERT INTO books"));
    assert!(sql[1].starts_with("UPDATE books"));

    let mut loaded = Book {
        id,
        ..Default::default()
    };
    db.load(&mut loaded).unwrap();
    assert_eq!(loaded.pages, 500);
}

#[test]
fn save_upserts_on_caller_assigned_key() {
    let (mut db, _log) = sqlite_db();

    let mut setting = Setting {
        id: Some("theme".into()),
        name: "dark".into(),
    };
    db.save(&mut setting).unwrap();

    setting.name = "light".into();
    db.save(&mut setting).unwrap();

    let mut loaded = Setting {
        id: Some("theme".into()),
        ..Default::default()
    };
    db.load(&mut loaded).unwrap();
    assert_eq!(loaded.name, "light");
}

#[test]
fn unique_key_upsert_stamps_updated_at_on_conflict() {
    let (mut db, _log) = sqlite_db();

    let mut account = Account {
        email: Some("ann@example.com".into()),
        display_name: "Ann".into(),
        ..Default::default()
    };
    db.save(&mut account).unwrap();
    assert_eq!(account.updated_at, None);

    account.display_name = "Annie".into();
    db.save(&mut account).unwrap();
    assert!(account.updated_at.is_some());

    let mut loaded = Account {
        email: Some("ann@example.com".into()),
        ..Default::default()
    };
    db.load(&mut loaded).unwrap();
    assert_eq!(loaded.display_name, "Annie");
}

#[test]
fn composite_key_lifecycle() {
    let (mut db, _log) = sqlite_db();

    let mut membership = Membership {
        team_id: 1,
        user_id: 2,
        role: "member".into(),
    };
    db.save(&mut membership).unwrap();

    membership.role = "owner".into();
    db.update(&mut membership).unwrap();

    let mut loaded = Membership {
        team_id: 1,
        user_id: 2,
        ..Default::default()
    };
    db.load(&mut loaded).unwrap();
    assert_eq!(loaded.role, "owner");

    db.delete(&mut membership).unwrap();
    assert!(db.load(&mut loaded).unwrap_err().is_record_not_found());
}

#[test]
fn keyless_insert_reads_back_default() {
    let (mut db, log) = sqlite_db();

    let mut event = Event {
        kind: "signup".into(),
        ..Default::default()
    };
    db.save(&mut event).unwrap();

    assert!(event.at.is_some());

    let op = log.pop();
    assert_eq!(op.sql, "INSERT INTO events (kind) VALUES (?) RETURNING at");
    assert_eq!(op.params, [Value::from("signup")]);
}
