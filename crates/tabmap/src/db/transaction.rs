use super::{Db, PinnedConnection};
use crate::{Error, Field, Model, Result, Tracked};

use tabmap_core::{driver::operation::Transaction as TransactionOp, stmt::Value};
use tokio::{sync::MutexGuard, time::timeout};

use std::time::Duration;

/// An open transaction. Holds the connection until it is committed or rolled
/// back, so other users of the `Db` wait for it.
///
/// A transaction dropped before it finished, for example because the future
/// running it was cancelled, is rolled back before the connection is used
/// again.
pub struct Transaction<'a> {
    connection: MutexGuard<'a, PinnedConnection>,

    /// Set once `BEGIN` succeeded, cleared by commit or rollback.
    open: bool,
}

impl<'a> Transaction<'a> {
    async fn begin(db: &'a Db) -> Result<Self> {
        let connection = db.shared.lock().await;
        let mut tx = Transaction {
            connection,
            open: false,
        };

        tx.exec(TransactionOp::Start).await?;
        tx.open = true;
        log::debug!("transaction started");

        Ok(tx)
    }

    async fn exec(&mut self, op: TransactionOp) -> Result<()> {
        self.connection.inner.exec(op.into()).await?;
        Ok(())
    }

    async fn commit(mut self) -> Result<()> {
        self.exec(TransactionOp::Commit).await?;
        self.open = false;
        log::debug!("transaction committed");
        Ok(())
    }

    async fn rollback(mut self) -> Result<()> {
        self.exec(TransactionOp::Rollback).await?;
        self.open = false;
        log::debug!("transaction rolled back");
        Ok(())
    }

    /// Rolls back after a failure. The failure is what the caller sees, so a
    /// rollback error is only logged.
    async fn abort(self) {
        if let Err(err) = self.rollback().await {
            log::warn!("failed to roll back transaction: {err}");
        }
    }

    pub async fn get<T: Model>(&mut self, sql: &str, params: &[Value]) -> Result<Vec<T>> {
        super::get(&mut *self.connection.inner, sql, params).await
    }

    pub async fn get_one<T: Model>(&mut self, sql: &str, params: &[Value]) -> Result<Option<T>> {
        super::get_one(&mut *self.connection.inner, sql, params).await
    }

    pub async fn execute_scalar<V>(&mut self, sql: &str, params: &[Value]) -> Result<V>
    where
        V: Field + Default,
    {
        super::execute_scalar(&mut *self.connection.inner, sql, params).await
    }

    pub async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        super::execute(&mut *self.connection.inner, sql, params).await
    }

    pub async fn set<T, S>(
        &mut self,
        items: &[Tracked<T>],
        table: &str,
        included: &[S],
    ) -> Result<u64>
    where
        T: Model,
        S: AsRef<str>,
    {
        super::set(&mut *self.connection.inner, items, table, included).await
    }
}

impl Db {
    /// Run `f` in a transaction with the configured timeout.
    ///
    /// Commits when `f` returns `Ok`; rolls back when it returns `Err` or
    /// runs out of time. Use the `Transaction` passed to `f` for all work
    /// inside the closure: the `Db` itself waits until the transaction ends.
    pub async fn transaction<O>(
        &self,
        f: impl AsyncFnOnce(&mut Transaction<'_>) -> Result<O>,
    ) -> Result<O> {
        self.transaction_with_timeout(self.shared.config.transaction_timeout, f)
            .await
    }

    pub async fn transaction_with_timeout<O>(
        &self,
        duration: Duration,
        f: impl AsyncFnOnce(&mut Transaction<'_>) -> Result<O>,
    ) -> Result<O> {
        let mut tx = Transaction::begin(self).await?;

        let res = timeout(duration, f(&mut tx)).await;

        let Ok(res) = res else {
            log::warn!("transaction timed out after {duration:?}; rolling back");
            tx.abort().await;
            return Err(Error::transaction_timed_out(duration));
        };

        match res {
            Ok(res) => {
                tx.commit().await?;
                Ok(res)
            }
            Err(err) => {
                log::debug!("transaction failed: {err}");
                tx.abort().await;
                Err(err)
            }
        }
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.open {
            log::warn!("transaction dropped while open; rolling back on next use");
            self.connection.rollback_pending = true;
        }
    }
}
