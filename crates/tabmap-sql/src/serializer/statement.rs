use super::{comma, Flavor, Formatter, Ident, Params, TableName, ToSql};

use tabmap_core::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = TableName(&self.table);

        if self.columns.is_empty() {
            match f.serializer.flavor {
                Flavor::Mysql => fmt!(f, "INSERT INTO " table " () VALUES ()"),
                _ => fmt!(f, "INSERT INTO " table " DEFAULT VALUES"),
            }
            return;
        }

        let columns = comma(self.columns.iter().map(Ident));
        let values = comma(self.values.iter());

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = TableName(&self.table);
        let assignments = comma(&self.assignments);
        let filter = &self.filter;

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " filter);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = TableName(&self.table);
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table " WHERE " filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        for param in &self.params {
            f.params.push(param);
        }

        f.dst.push_str(self.sql.trim_end());
    }
}
