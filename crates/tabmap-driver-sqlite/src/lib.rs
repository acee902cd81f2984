mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tabmap_core::{
    async_trait,
    driver::{operation::Operation, Driver, Response},
    stmt::{Recordset, ValueRecord},
    Error, Result,
};
use tabmap_sql::Serializer;
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL.
    ///
    /// `sqlite::memory:` opens a private in-memory database; any other path is
    /// a database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn tabmap_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        if stmt.column_count() == 0 {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver_operation_failed)?;

            return Ok(Response::count(count as u64));
        }

        let columns = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let width = columns.len();

        let mut recordset = Recordset::new(columns);
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let values = (0..width)
                .map(|index| Value::from_sql(row, index).map(Value::into_inner))
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(Error::driver_operation_failed)?;

            recordset.push(ValueRecord::from_vec(values))?;
        }

        Ok(Response::recordset(recordset))
    }
}

#[async_trait]
impl tabmap_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let serializer = Serializer::sqlite();

        let stmt = match op {
            Operation::Statement(stmt) => stmt,
            Operation::Transaction(op) => {
                let sql = serializer.serialize_transaction(&op);
                log::trace!("{sql}");

                self.connection
                    .execute_batch(sql)
                    .map_err(Error::driver_operation_failed)?;
                return Ok(Response::count(0));
            }
        };

        let mut params: Vec<tabmap_core::stmt::Value> = vec![];
        let sql = serializer.serialize(&stmt, &mut params);

        log::trace!("{sql}; params={params:?}");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        self.query(&sql, &params)
    }
}
