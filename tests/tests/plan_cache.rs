use modelmap::{Engine, Flavor, PlanCache, Value};
use pretty_assertions::assert_eq;
use std::{sync::Arc, thread};
use tests::models::{Author, Book, Setting};

fn book(id: i64, title: &str) -> Book {
    Book {
        id: Some(id),
        title: title.into(),
        ..Default::default()
    }
}

#[test]
fn second_call_reuses_the_plan() {
    let engine = Engine::new(Flavor::Sqlite);

    let first = engine.load_statement(&mut book(1, "a")).unwrap().plan().clone();
    let second = engine.load_statement(&mut book(2, "b")).unwrap().plan().clone();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.plan_cache().len(), 1);
}

#[test]
fn plan_replays_against_another_instance() {
    let engine = Engine::new(Flavor::Sqlite);
    engine.update_statement(&mut book(1, "a"), &[]).unwrap();

    let mut other = book(2, "b");
    let stmt = engine.update_statement(&mut other, &[]).unwrap();

    assert_eq!(stmt.params()[0], Value::from("b"));
    assert_eq!(stmt.params().last(), Some(&Value::I64(2)));
}

#[test]
fn full_set_and_subset_of_every_field_are_distinct() {
    let engine = Engine::new(Flavor::Sqlite);
    let fields = Book::fields();
    let every = [
        fields.id,
        fields.title,
        fields.pages,
        fields.tags,
        fields.created_at,
        fields.updated_at,
        fields.deleted_at,
    ];

    let full = engine
        .update_statement(&mut book(1, "a"), &[])
        .unwrap()
        .plan()
        .clone();
    let subset = engine
        .update_statement(&mut book(1, "a"), &every)
        .unwrap()
        .plan()
        .clone();

    assert!(!Arc::ptr_eq(&full, &subset));
    assert_eq!(full.sql(), subset.sql());
    assert_eq!(engine.plan_cache().len(), 2);
}

#[test]
fn operations_and_types_do_not_collide() {
    let engine = Engine::new(Flavor::Sqlite);

    engine.load_statement(&mut book(1, "a")).unwrap();
    engine.delete_statement(&mut book(1, "a")).unwrap();
    engine.update_statement(&mut book(1, "a"), &[]).unwrap();
    engine
        .load_statement(&mut Author {
            id: Some(1),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(engine.plan_cache().len(), 4);
}

#[test]
fn flavors_sharing_a_cache_keep_separate_plans() {
    let plans = Arc::new(PlanCache::new());
    let sqlite = Engine::with_plan_cache(Flavor::Sqlite, plans.clone());
    let postgresql = Engine::with_plan_cache(Flavor::Postgresql, plans.clone());

    let a = sqlite.load_statement(&mut book(1, "a")).unwrap().plan().clone();
    let b = postgresql
        .load_statement(&mut book(1, "a"))
        .unwrap()
        .plan()
        .clone();

    assert!(a.sql().contains("id = ?"));
    assert!(b.sql().contains("id = $1"));
    assert_eq!(plans.len(), 2);
}

#[test]
fn reset_forces_recompilation() {
    let engine = Engine::new(Flavor::Sqlite);

    let before = engine.load_statement(&mut book(1, "a")).unwrap().plan().clone();
    engine.plan_cache().reset();
    assert!(engine.plan_cache().is_empty());

    let after = engine.load_statement(&mut book(1, "a")).unwrap().plan().clone();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

#[test]
fn concurrent_callers_converge_on_one_plan_per_key() {
    tests::init_tracing();

    let plans = Arc::new(PlanCache::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Engine::with_plan_cache(Flavor::Sqlite, plans.clone());

            thread::spawn(move || {
                let mut sql = vec![];

                for n in 0..50 {
                    let mut record = book(i * 100 + n, "t");
                    sql.push(engine.load_statement(&mut record).unwrap().sql().to_string());
                    sql.push(
                        engine
                            .update_statement(&mut record, &[Book::fields().title])
                            .unwrap()
                            .sql()
                            .to_string(),
                    );

                    let mut setting = Setting {
                        id: Some(format!("k{n}")),
                        name: "v".into(),
                    };
                    sql.push(engine.save_statement(&mut setting).unwrap().sql().to_string());
                }

                sql
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for sql in &results[1..] {
        assert_eq!(sql, &results[0]);
    }

    assert_eq!(plans.len(), 3);
}
