#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{comma, period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::{Ident, TableName};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;
mod value;

use tabmap_core::{driver::operation::Transaction, stmt::Statement};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serialize `stmt`, pushing every bound value into `params` in
    /// placeholder order.
    ///
    /// Generated statements are terminated with `;`. The text of a
    /// [`Query`](tabmap_core::stmt::Query) is returned as written.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        if !stmt.is_query() {
            ret.push(';');
        }

        ret
    }

    /// Serialize a transaction control operation to a SQL string.
    pub fn serialize_transaction(&self, op: &Transaction) -> &'static str {
        match (op, &self.flavor) {
            (Transaction::Start, Flavor::Mysql) => "START TRANSACTION",
            (Transaction::Start, Flavor::Mssql) => "BEGIN TRANSACTION",
            (Transaction::Start, _) => "BEGIN",
            (Transaction::Commit, _) => "COMMIT",
            (Transaction::Rollback, _) => "ROLLBACK",
        }
    }
}
