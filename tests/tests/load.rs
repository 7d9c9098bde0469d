use modelmap::{Engine, Flavor, Value};
use pretty_assertions::assert_eq;
use tests::models::{Author, Book, Event, Nothing};

#[test]
fn load_by_primary_key_excludes_soft_deleted() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut book = Book {
        id: Some(7),
        ..Default::default()
    };

    let stmt = engine.load_statement(&mut book).unwrap();

    assert_eq!(
        stmt.sql(),
        "SELECT id, title, pages, tags, created_at, updated_at, deleted_at FROM books WHERE (id = ? AND deleted_at IS NULL)"
    );
    assert_eq!(stmt.params(), [Value::I64(7)]);
    assert_eq!(stmt.returning_positions(), [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn load_without_key_only_filters_soft_deleted() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut author = Author::default();

    let stmt = engine.load_statement(&mut author).unwrap();

    assert_eq!(
        stmt.sql(),
        "SELECT id, name, created_at, updated_at, deleted_at FROM authors WHERE (deleted_at IS NULL)"
    );
    assert!(stmt.params().is_empty());
}

#[test]
fn load_without_filter() {
    let engine = Engine::new(Flavor::Postgresql);
    let mut event = Event::default();

    let stmt = engine.load_statement(&mut event).unwrap();
    assert_eq!(stmt.sql(), "SELECT kind, at FROM events");
}

#[test]
fn postgresql_placeholders() {
    let engine = Engine::new(Flavor::Postgresql);
    let mut book = Book {
        id: Some(1),
        ..Default::default()
    };

    let stmt = engine.load_statement(&mut book).unwrap();
    assert!(stmt.sql().ends_with("WHERE (id = $1 AND deleted_at IS NULL)"));
}

#[test]
fn record_without_mapped_fields_has_nothing_to_load() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut nothing = Nothing::default();

    assert!(engine.load_statement(&mut nothing).is_none());
    assert!(engine.plan_cache().is_empty());
}
