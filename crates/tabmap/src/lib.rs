pub mod change_set;
pub use change_set::build_change_set;

pub mod db;
pub use db::Db;

mod field;
pub use field::Field;

pub mod mapper;
pub use mapper::{map_row, map_rows, map_scalar};

mod model;
pub use model::Model;

pub mod schema;
pub use schema::{FieldTy, Schema};

mod tracked;
pub use tracked::{accept_changes, RowState, Tracked};

pub use tabmap_core::{
    bail, driver, err,
    stmt::{self, Recordset, Statement, Value},
    Error, Result,
};

pub use tabmap_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        field::{assign_embedded, no_such_field, read_embedded},
        schema::{FieldTy, Schema, SchemaField},
        Field, Model, Result,
    };
    pub use tabmap_core::stmt::{Type, Value};
}
