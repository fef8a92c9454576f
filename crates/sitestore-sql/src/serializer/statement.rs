use super::{Comma, Flavor, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Direction, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let pk = Ident(&self.primary_key);

        let pk_def = match f.serializer.flavor {
            Flavor::Sqlite => " INTEGER PRIMARY KEY AUTOINCREMENT",
            Flavor::Postgresql => " BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY",
            Flavor::Mysql => " BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY",
        };

        fmt!(f, "CREATE TABLE IF NOT EXISTS " name " (\n    " pk pk_def);

        for column in &self.columns {
            fmt!(f, ",\n    " column);
        }

        fmt!(f, "\n)");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let filter = self.filter.as_ref().map(Filter);

        fmt!(f, "DELETE FROM " table filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
        } else {
            let columns = Comma(self.columns.iter().map(Ident));
            let values = Comma(&self.values);

            fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
        }

        // MySQL reports the generated key through LAST_INSERT_ID() instead.
        if let Some(returning) = &self.returning {
            if !f.serializer.is_mysql() {
                fmt!(f, " RETURNING " Ident(returning));
            }
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let table = Ident(&self.table);
        let filter = self.filter.as_ref().map(Filter);

        fmt!(f, "SELECT " columns " FROM " table filter);

        if let Some(order_by) = &self.order_by {
            let direction = match order_by.direction {
                Direction::Asc => " ASC",
                Direction::Desc => " DESC",
            };
            fmt!(f, " ORDER BY " Ident(&order_by.column) direction);
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " LIMIT " limit.limit " OFFSET " limit.offset);
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        let filter = self.filter.as_ref().map(Filter);

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}

/// ` WHERE <expr>`
struct Filter<'a>(&'a stmt::Expr);

impl ToSql for Filter<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, " WHERE " self.0);
    }
}
