use super::{Flavor, Formatter, ToSql};

use tabmap_core::stmt;

/// Sink for values bound while serializing.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A 1-based positional parameter.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => write!(f.dst, "${}", self.0).unwrap(),
            Flavor::Sqlite => write!(f.dst, "?{}", self.0).unwrap(),
            Flavor::Mssql => write!(f.dst, "@p{}", self.0).unwrap(),
        }
    }
}
