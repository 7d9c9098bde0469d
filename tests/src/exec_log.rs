use modelmap::Value;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    QueryRow,
    Execute,
}

/// One statement sent to a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Op {
    pub kind: OpKind,
    pub sql: String,
    pub params: Vec<Value>,
}

/// Shared log of the statements a test connection received.
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Op>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, kind: OpKind, sql: &str, params: &[Value]) {
        self.lock().push(Op {
            kind,
            sql: sql.to_string(),
            params: params.to_vec(),
        });
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Removes and returns the oldest logged operation.
    pub fn pop(&self) -> Op {
        let mut ops = self.lock();
        assert!(!ops.is_empty(), "expected a logged operation");
        ops.remove(0)
    }

    /// SQL of every logged operation, oldest first.
    pub fn sql(&self) -> Vec<String> {
        self.lock().iter().map(|op| op.sql.clone()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Op>> {
        self.ops.lock().unwrap()
    }
}
