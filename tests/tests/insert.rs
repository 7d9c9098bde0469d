use modelmap::{Engine, Flavor, Value};
use pretty_assertions::assert_eq;
use tests::models::{Account, Book, Event, Nothing, Setting};

#[test]
fn store_assigned_key_is_read_back() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut book = Book {
        title: "Dune".into(),
        pages: 412,
        tags: vec!["scifi".into()],
        ..Default::default()
    };

    let stmt = engine.insert_statement(&mut book, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO books (title, pages, tags) VALUES (?, ?, ?) RETURNING id, created_at, updated_at, deleted_at"
    );
    assert_eq!(
        stmt.params(),
        [
            Value::from("Dune"),
            Value::I32(412),
            Value::Array(vec![Value::from("scifi")]),
        ]
    );
    assert_eq!(stmt.returning_positions(), [0, 4, 5, 6]);
}

#[test]
fn supplied_sequence_key_is_written() {
    let engine = Engine::new(Flavor::Postgresql);
    let mut book = Book {
        id: Some(3),
        ..Default::default()
    };

    let stmt = engine.insert_statement(&mut book, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO books (id, title, pages, tags) VALUES ($1, $2, $3, $4) RETURNING created_at, updated_at, deleted_at"
    );
}

#[test]
fn caller_assigned_key_becomes_conflict_target() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut setting = Setting {
        id: Some("theme".into()),
        name: "dark".into(),
    };

    let stmt = engine.insert_statement(&mut setting, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO settings (id, name) VALUES (?, ?) ON CONFLICT (id) DO UPDATE SET name = ?"
    );
    assert_eq!(
        stmt.params(),
        [Value::from("theme"), Value::from("dark"), Value::from("dark")]
    );
    assert!(stmt.returning_positions().is_empty());
}

#[test]
fn unique_key_upsert_returns_updated_at_without_assigning_it() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut account = Account {
        email: Some("ann@example.com".into()),
        display_name: "Ann".into(),
        ..Default::default()
    };

    let stmt = engine.insert_statement(&mut account, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO accounts (email, display_name) VALUES (?, ?) ON CONFLICT (email) DO UPDATE SET display_name = ? RETURNING updated_at"
    );
    assert!(!stmt.sql().contains("updated_at = NOW()"));
}

#[test]
fn subset_limits_written_columns() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut book = Book {
        title: "Dune".into(),
        ..Default::default()
    };

    let stmt = engine
        .insert_statement(&mut book, &[Book::fields().title])
        .unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO books (title) VALUES (?) RETURNING id, created_at, updated_at, deleted_at"
    );
}

#[test]
fn only_generated_columns() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut event = Event::default();

    let stmt = engine
        .insert_statement(&mut event, &[Event::fields().at])
        .unwrap();

    assert_eq!(stmt.sql(), "INSERT INTO events DEFAULT VALUES RETURNING at");
}

#[test]
fn nothing_to_insert() {
    let engine = Engine::new(Flavor::Sqlite);
    assert!(engine
        .insert_statement(&mut Nothing::default(), &[])
        .is_none());
}
