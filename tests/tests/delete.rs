use modelmap::{Engine, Flavor, Value};
use pretty_assertions::assert_eq;
use tests::models::{Account, Author, Event, Membership};

#[test]
fn soft_delete_stamps_timestamps() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut author = Author {
        id: Some(1),
        ..Default::default()
    };

    let stmt = engine.delete_statement(&mut author).unwrap();

    assert_eq!(
        stmt.sql(),
        "UPDATE authors SET updated_at = NOW(), deleted_at = NOW() WHERE (id = ?) RETURNING updated_at, deleted_at"
    );
    assert_eq!(stmt.params(), [Value::I64(1)]);
    assert_eq!(stmt.returning_positions(), [3, 4]);
}

#[test]
fn hard_delete_on_composite_key() {
    let engine = Engine::new(Flavor::Postgresql);
    let mut membership = Membership {
        team_id: 4,
        user_id: 9,
        ..Default::default()
    };

    let stmt = engine.delete_statement(&mut membership).unwrap();

    assert_eq!(
        stmt.sql(),
        "DELETE FROM memberships WHERE (team_id = $1 AND user_id = $2)"
    );
    assert_eq!(stmt.params(), [Value::I64(4), Value::I64(9)]);
}

#[test]
fn unique_key_delete() {
    let engine = Engine::new(Flavor::Sqlite);
    let mut account = Account {
        email: Some("ann@example.com".into()),
        ..Default::default()
    };

    let stmt = engine.delete_statement(&mut account).unwrap();
    assert_eq!(stmt.sql(), "DELETE FROM accounts WHERE (email = ?)");
}

#[test]
fn no_key_no_statement() {
    let engine = Engine::new(Flavor::Sqlite);

    assert!(engine.delete_statement(&mut Author::default()).is_none());
    assert!(engine.delete_statement(&mut Event::default()).is_none());
    assert!(engine.delete_statement(&mut Account::default()).is_none());
}
