use super::{Config, Connect, Db, PinnedConnection, Shared};
use crate::Result;

use tabmap_core::driver::Driver;
use tokio::sync::Mutex;

use std::{sync::Arc, time::Duration};

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// How long a transaction may run before it is rolled back. Defaults to
    /// five seconds.
    pub fn transaction_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.transaction_timeout = timeout;
        self
    }

    /// Whether [`Db::set`] wraps its statements in a transaction. Defaults to
    /// `true`.
    pub fn set_in_transaction(&mut self, enabled: bool) -> &mut Self {
        self.config.set_in_transaction = enabled;
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect().await?;
        log::debug!("connected to {}", driver.url());

        Ok(Db {
            shared: Arc::new(Shared {
                driver: Box::new(driver),
                connection: Mutex::new(PinnedConnection {
                    inner: connection,
                    rollback_pending: false,
                }),
                config: self.config.clone(),
            }),
        })
    }
}
