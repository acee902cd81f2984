use super::{Formatter, Params, ToSql};

/// A list of fragments written with `sep` between neighbours.
pub(super) struct Delimited<L> {
    items: L,
    sep: &'static str,
}

/// `a, b, c` for column, value and assignment lists
pub(super) fn comma<L>(items: L) -> Delimited<L> {
    Delimited { items, sep: ", " }
}

/// `a.b.c` for qualified names
pub(super) fn period<L>(items: L) -> Delimited<L> {
    Delimited { items, sep: "." }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        for (index, item) in self.items.into_iter().enumerate() {
            if index > 0 {
                fmt!(f, self.sep);
            }
            fmt!(f, item);
        }
    }
}
