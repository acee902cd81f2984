mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod transaction;
pub use transaction::Transaction;

use crate::{build_change_set, mapper, Field, Model, Result, Tracked};

use tabmap_core::{
    driver::{operation::Transaction as TransactionOp, Connection, Driver},
    stmt::{Query, Recordset, Statement, Value},
};
use tokio::sync::{Mutex, MutexGuard};

use std::{sync::Arc, time::Duration};

/// Shared state between all `Db` clones.
struct Shared {
    driver: Box<dyn Driver>,

    /// Operations are serialized on a single connection.
    connection: Mutex<PinnedConnection>,

    config: Config,
}

/// The single connection of a `Db`.
struct PinnedConnection {
    inner: Box<dyn Connection>,

    /// Set when a transaction was dropped before it committed or rolled back.
    /// The store is still inside that transaction until the next user of the
    /// connection rolls it back.
    rollback_pending: bool,
}

impl Shared {
    async fn lock(&self) -> MutexGuard<'_, PinnedConnection> {
        let mut connection = self.connection.lock().await;

        if connection.rollback_pending {
            connection.rollback_pending = false;

            log::debug!("rolling back abandoned transaction");
            if let Err(err) = connection.inner.exec(TransactionOp::Rollback.into()).await {
                log::warn!("failed to roll back abandoned transaction: {err}");
            }
        }

        connection
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) transaction_timeout: Duration,
    pub(crate) set_in_transaction: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transaction_timeout: Duration::from_secs(5),
            set_in_transaction: true,
        }
    }
}

/// A handle to a tabular store. Clones share the same connection.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connect with the default configuration.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Run a query and map every row to a `T`.
    pub async fn get<T: Model>(&self, sql: &str, params: &[Value]) -> Result<Vec<T>> {
        let mut connection = self.shared.lock().await;
        get(&mut *connection.inner, sql, params).await
    }

    /// Run a query and map its first row, if any.
    pub async fn get_one<T: Model>(&self, sql: &str, params: &[Value]) -> Result<Option<T>> {
        let mut connection = self.shared.lock().await;
        get_one(&mut *connection.inner, sql, params).await
    }

    /// Run a query and convert the first column of its first row.
    pub async fn execute_scalar<V>(&self, sql: &str, params: &[Value]) -> Result<V>
    where
        V: Field + Default,
    {
        let mut connection = self.shared.lock().await;
        execute_scalar(&mut *connection.inner, sql, params).await
    }

    /// Run a statement that returns no rows; returns the affected-row count.
    pub async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut connection = self.shared.lock().await;
        execute(&mut *connection.inner, sql, params).await
    }

    /// Persist the pending changes of `items` to `table`, writing the
    /// `included` properties. Returns the total affected-row count.
    ///
    /// Runs in a transaction unless disabled with
    /// [`Builder::set_in_transaction`]. Row states are left as they are; call
    /// [`accept_changes`](crate::accept_changes) once the write succeeded.
    pub async fn set<T, S>(&self, items: &[Tracked<T>], table: &str, included: &[S]) -> Result<u64>
    where
        T: Model,
        S: AsRef<str>,
    {
        if self.shared.config.set_in_transaction {
            self.transaction(async |tx| tx.set(items, table, included).await)
                .await
        } else {
            let mut connection = self.shared.lock().await;
            set(&mut *connection.inner, items, table, included).await
        }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("url", &self.shared.driver.url())
            .field("config", &self.shared.config)
            .finish()
    }
}

async fn query(connection: &mut dyn Connection, sql: &str, params: &[Value]) -> Result<Recordset> {
    log::debug!("query: {sql}");

    let stmt = Statement::Query(Query::new(sql, params.iter().cloned()));
    connection.exec(stmt.into()).await?.into_recordset()
}

async fn get<T: Model>(
    connection: &mut dyn Connection,
    sql: &str,
    params: &[Value],
) -> Result<Vec<T>> {
    let recordset = query(connection, sql, params).await?;
    mapper::map_rows(&recordset)
}

async fn get_one<T: Model>(
    connection: &mut dyn Connection,
    sql: &str,
    params: &[Value],
) -> Result<Option<T>> {
    let recordset = query(connection, sql, params).await?;
    mapper::map_row(&recordset, 0)
}

async fn execute_scalar<V: Field + Default>(
    connection: &mut dyn Connection,
    sql: &str,
    params: &[Value],
) -> Result<V> {
    let recordset = query(connection, sql, params).await?;
    mapper::map_scalar(&recordset)
}

async fn execute(connection: &mut dyn Connection, sql: &str, params: &[Value]) -> Result<u64> {
    log::debug!("execute: {sql}");

    let stmt = Statement::Query(Query::new(sql, params.iter().cloned()));
    connection.exec(stmt.into()).await?.into_count()
}

async fn set<T, S>(
    connection: &mut dyn Connection,
    items: &[Tracked<T>],
    table: &str,
    included: &[S],
) -> Result<u64>
where
    T: Model,
    S: AsRef<str>,
{
    let statements = build_change_set(items, table, included)?;
    log::debug!(
        "set: {} statement(s) for {} item(s) in `{table}`",
        statements.len(),
        items.len()
    );

    let mut count = 0;
    for stmt in statements {
        count += connection.exec(stmt.into()).await?.into_count()?;
    }

    Ok(count)
}
