use super::{period, Flavor, Formatter, Params, ToSql};

/// A quoted identifier
pub(super) struct Ident<S>(pub(super) S);

/// A table name, possibly schema-qualified; every part is quoted separately.
pub(super) struct TableName<'a>(pub(super) &'a str);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let (open, close) = match f.serializer.flavor {
            Flavor::Mysql => ('`', '`'),
            Flavor::Mssql => ('[', ']'),
            Flavor::Postgresql | Flavor::Sqlite => ('"', '"'),
        };

        f.dst.push(open);
        for c in self.0.as_ref().chars() {
            if c == close {
                f.dst.push(close);
            }
            f.dst.push(c);
        }
        f.dst.push(close);
    }
}

impl ToSql for TableName<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, period(self.0.split('.').map(Ident)));
    }
}
