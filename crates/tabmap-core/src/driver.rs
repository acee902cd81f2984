mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::{Operation, Transaction};

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// A data-access backend able to open connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL this driver connects to, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection. Operations are executed one at a time.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
