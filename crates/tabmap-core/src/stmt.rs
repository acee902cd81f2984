mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod num;

mod query;
pub use query::Query;

mod recordset;
pub use recordset::Recordset;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

#[cfg(feature = "chrono")]
mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;
