mod exec_log;
pub use exec_log::ExecLog;

pub mod logging_driver;
use logging_driver::LoggingDriver;

use tabmap::{db::Builder, Db};
use tabmap_driver_sqlite::Sqlite;

/// Connect a fresh in-memory database wrapped in a [`LoggingDriver`].
pub async fn setup() -> (Db, ExecLog) {
    setup_with(Db::builder()).await
}

pub async fn setup_with(mut builder: Builder) -> (Db, ExecLog) {
    init_logging();

    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let log = ExecLog::new(driver.ops_log_handle());
    let db = builder.build(driver).await.unwrap();

    (db, log)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
