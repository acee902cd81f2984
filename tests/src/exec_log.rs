use crate::logging_driver::DriverOp;
use std::sync::{Arc, Mutex};
use tabmap_core::{
    driver::{Operation, Response, Transaction},
    stmt::Statement,
};

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

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Transaction control operations, in execution order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op.operation {
                Operation::Transaction(tx) => Some(tx),
                Operation::Statement(_) => None,
            })
            .collect()
    }

    /// Statements generated by the mapper, in execution order. Raw queries
    /// are left out.
    pub fn generated_statements(&self) -> Vec<Statement> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match &op.operation {
                Operation::Statement(stmt) if !stmt.is_query() => Some(stmt.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&mut self) -> Option<(Operation, Response)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }
}
