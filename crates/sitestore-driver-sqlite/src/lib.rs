mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use sitestore_core::{
    async_trait,
    driver::{
        operation::{Operation, QuerySql, Transaction},
        Capability, Driver, Response,
    },
    err,
    schema::TableDef,
    stmt, Error, Result,
};
use sitestore_sql as sql;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(err!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            ));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn sitestore_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    fn exec_transaction(&mut self, op: Transaction) -> Result<Response> {
        let sql = sql::Serializer::sqlite().serialize_transaction(&op);
        tracing::debug!(db.statement = %sql, "sqlite transaction");

        self.connection.execute(&sql, []).map_err(Error::driver)?;
        Ok(Response::count(0))
    }

    fn exec_query_sql(&mut self, op: QuerySql) -> Result<Response> {
        let stmt: sql::Statement = op.stmt.into();

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite().serialize(&stmt, &mut params);
        tracing::debug!(db.statement = %sql_str, params = params.len(), "sqlite exec");

        let mut prepared = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let Some(width) = stmt.returning_len() else {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver)?;

            return Ok(Response::count(count as u64));
        };

        let Some(ret_tys) = op.ret else {
            return Err(err!("statement returns rows but no column types were given"));
        };

        if ret_tys.len() != width {
            return Err(err!(
                "expected {width} column types, got {}",
                ret_tys.len()
            ));
        }

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut items = Vec::with_capacity(width);

            for (index, ty) in ret_tys.iter().enumerate() {
                items.push(Value::from_sql(row, index, *ty)?.into_inner());
            }

            ret.push(items);
        }

        Ok(Response::values(ret))
    }
}

#[async_trait]
impl sitestore_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.exec_query_sql(op),
            Operation::Transaction(op) => self.exec_transaction(op),
        }
    }

    async fn push_table(&mut self, table: &TableDef) -> Result<()> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str =
            sql::Serializer::sqlite().serialize(&sql::Statement::create_table(table), &mut params);

        if !params.is_empty() {
            return Err(err!("CREATE TABLE must not bind parameters"));
        }

        tracing::info!(table = table.name(), "creating table if missing");

        self.connection
            .execute(&sql_str, [])
            .map_err(Error::driver)?;

        Ok(())
    }
}
