#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod driver;
pub use driver::{Connection, Driver};

pub mod stmt;

/// A Result type alias that uses tabmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
