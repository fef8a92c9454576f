mod capability;
pub use capability::Capability;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::TableDef, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one store.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability, which informs the engine.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// The store's "execute a parameterized statement" capability.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Creates the table described by `table` if it does not exist yet.
    async fn push_table(&mut self, table: &TableDef) -> Result<()>;
}
