use super::{Flavor, Formatter, Params, ToSql};

use crate::stmt::ColumnDef;

use sitestore_core::stmt::Type;

/// The storage type of a column definition.
pub(super) struct ColumnTy<'a>(pub(super) &'a ColumnDef);

impl ToSql for ColumnTy<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        let flavor = f.serializer.flavor;
        let column = self.0;

        match (column.ty, flavor) {
            (Type::String, Flavor::Sqlite) => fmt!(f, "TEXT"),
            (Type::String, _) => match column.max_length {
                Some(len) => write!(f.dst, "VARCHAR({len})").unwrap(),
                None => fmt!(f, "TEXT"),
            },
            (Type::I64, Flavor::Sqlite) => fmt!(f, "INTEGER"),
            (Type::I64, _) => fmt!(f, "BIGINT"),
            (Type::Bool, Flavor::Sqlite) => fmt!(f, "INTEGER"),
            (Type::Bool, Flavor::Postgresql) => fmt!(f, "BOOLEAN"),
            (Type::Bool, Flavor::Mysql) => fmt!(f, "TINYINT(1)"),
            (Type::Date, Flavor::Sqlite) => fmt!(f, "TEXT"),
            (Type::Date, _) => fmt!(f, "DATE"),
            (Type::Timestamp, Flavor::Sqlite) => fmt!(f, "TEXT"),
            (Type::Timestamp, Flavor::Postgresql) => fmt!(f, "TIMESTAMPTZ"),
            (Type::Timestamp, Flavor::Mysql) => fmt!(f, "DATETIME(6)"),
        }
    }
}
