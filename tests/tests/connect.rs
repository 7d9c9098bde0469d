use modelmap::Db;

#[test]
fn unsupported_scheme() {
    let err = Db::connect("mysql://localhost/books").unwrap_err();

    assert!(err.is_invalid_connection_url());
    assert_eq!(
        err.to_string(),
        "invalid connection URL `mysql://localhost/books`: unsupported scheme `mysql`"
    );
}

#[test]
fn unparsable_url() {
    assert!(Db::connect("not a url")
        .unwrap_err()
        .is_invalid_connection_url());
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_in_memory() {
    let db = Db::connect("sqlite::memory:").unwrap();
    assert_eq!(db.flavor(), modelmap::Flavor::Sqlite);
    assert!(db.plan_cache().is_empty());
}
