use modelmap::{Engine, Flavor, Value};
use pretty_assertions::assert_eq;
use tests::models::{Account, Book, Event, Membership};

fn book() -> Book {
    Book {
        id: Some(7),
        title: "Dune".into(),
        pages: 412,
        ..Default::default()
    }
}

#[test]
fn key_becomes_condition_and_timestamps_are_read_back() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut book = book();

    let stmt = engine.update_statement(&mut book, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "UPDATE books SET title = ?, pages = ?, tags = ?, updated_at = NOW() WHERE (id = ?) RETURNING created_at, updated_at, deleted_at"
    );
    assert_eq!(
        stmt.params(),
        [
            Value::from("Dune"),
            Value::I32(412),
            Value::Array(vec![]),
            Value::I64(7),
        ]
    );
    assert_eq!(stmt.returning_positions(), [4, 5, 6]);
}

#[test]
fn explicit_subset() {
    let engine = Engine::new(Flavor::Postgresql);
    let mut book = book();

    let stmt = engine
        .update_statement(&mut book, &[Book::fields().title])
        .unwrap();

    assert_eq!(
        stmt.sql(),
        "UPDATE books SET title = $1, updated_at = NOW() WHERE (id = $2) RETURNING created_at, updated_at, deleted_at"
    );
    assert_eq!(stmt.params(), [Value::from("Dune"), Value::I64(7)]);
}

#[test]
fn subset_order_and_duplicates_do_not_matter() {
    let engine = Engine::new(Flavor::Sqlite);
    let fields = Book::fields();

    let a = engine
        .update_statement(&mut book(), &[fields.pages, fields.title])
        .unwrap()
        .plan()
        .clone();
    let b = engine
        .update_statement(&mut book(), &[fields.title, fields.pages, fields.title])
        .unwrap()
        .plan()
        .clone();

    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert!(a.sql().starts_with("UPDATE books SET title = ?, pages = ?, updated_at"));
}

#[test]
fn unique_key_condition() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut account = Account {
        email: Some("ann@example.com".into()),
        display_name: "Ann".into(),
        ..Default::default()
    };

    let stmt = engine.update_statement(&mut account, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "UPDATE accounts SET display_name = ?, updated_at = NOW() WHERE (email = ?) RETURNING updated_at"
    );
}

#[test]
fn composite_key_is_never_assigned() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut membership = Membership {
        team_id: 1,
        user_id: 2,
        role: "owner".into(),
    };

    let stmt = engine.update_statement(&mut membership, &[]).unwrap();

    assert_eq!(
        stmt.sql(),
        "UPDATE memberships SET role = ? WHERE (team_id = ? AND user_id = ?)"
    );
    assert_eq!(
        stmt.params(),
        [Value::from("owner"), Value::I64(1), Value::I64(2)]
    );
}

#[test]
fn nothing_to_assign() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut event = Event::default();

    assert!(engine
        .update_statement(&mut event, &[Event::fields().at])
        .is_none());
}

#[test]
fn key_without_assignments_is_nothing_to_update() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut membership = Membership {
        team_id: 1,
        user_id: 2,
        role: "owner".into(),
    };

    assert!(engine
        .update_statement(&mut membership, &[Membership::fields().team_id])
        .is_none());
}
