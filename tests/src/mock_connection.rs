use crate::{ExecLog, OpKind};
use modelmap::{Connection, Error, Flavor, Result, Type, Value};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// Scripted response to the next statement.
#[derive(Debug)]
pub enum Reply {
    Row(Vec<Value>),
    NoRow,
    Count(u64),
    Fail(Error),
}

/// Reply queue shared between a test and its [`MockConnection`].
pub type Replies = Arc<Mutex<VecDeque<Reply>>>;

/// A connection that answers from a script and logs what it was sent.
///
/// With an empty script, row queries return a row of nulls and mutations
/// report one affected row.
#[derive(Debug)]
pub struct MockConnection {
    flavor: Flavor,
    replies: Replies,
    log: ExecLog,
}

impl MockConnection {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            replies: Arc::default(),
            log: ExecLog::default(),
        }
    }

    pub fn log(&self) -> ExecLog {
        self.log.clone()
    }

    /// Handle for scripting replies after the connection moved into a `Db`.
    pub fn replies(&self) -> Replies {
        self.replies.clone()
    }

    fn next_reply(&self) -> Option<Reply> {
        self.replies.lock().unwrap().pop_front()
    }
}

impl Connection for MockConnection {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn query_row(
        &mut self,
        sql: &str,
        params: &[Value],
        ret: &[Type],
    ) -> Result<Option<Vec<Value>>> {
        self.log.push(OpKind::QueryRow, sql, params);

        match self.next_reply() {
            None => Ok(Some(vec![Value::Null; ret.len()])),
            Some(Reply::Row(row)) => Ok(Some(row)),
            Some(Reply::NoRow) => Ok(None),
            Some(Reply::Count(_)) => panic!("scripted a count for a row query; sql={sql}"),
            Some(Reply::Fail(err)) => Err(err),
        }
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        self.log.push(OpKind::Execute, sql, params);

        match self.next_reply() {
            None => Ok(1),
            Some(Reply::Count(count)) => Ok(count),
            Some(Reply::Fail(err)) => Err(err),
            Some(reply) => panic!("scripted {reply:?} for a mutation; sql={sql}"),
        }
    }
}
