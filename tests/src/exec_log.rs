use crate::logging_driver::DriverOp;
use sitestore::driver::operation::{Operation, Transaction};
use sitestore_core::stmt::{Statement, Value};
use sitestore_sql::Serializer;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Forget every operation logged so far
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Check if any operation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.operation))
    }

    /// Transaction control operations, in execution order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op.operation {
                Operation::Transaction(transaction) => Some(transaction),
                _ => None,
            })
            .collect()
    }

    /// Statements, in execution order
    pub fn statements(&self) -> Vec<Statement> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| op.operation.as_query_sql())
            .map(|query| query.stmt.clone())
            .collect()
    }

    /// Statements serialized as SQLite SQL, each paired with its bound
    /// parameters
    pub fn sql(&self) -> Vec<(String, Vec<Value>)> {
        let serializer = Serializer::sqlite();

        self.statements()
            .into_iter()
            .map(|stmt| {
                let mut params = Vec::<Value>::new();
                let sql = serializer.serialize(&stmt.into(), &mut params);
                (sql, params)
            })
            .collect()
    }

    /// Number of operations the store rejected
    pub fn failures(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.response.is_none())
            .count()
    }
}
