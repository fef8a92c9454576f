pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, FieldError, IntoError, Severity};

pub mod schema;
pub use schema::{FieldDescriptor, FieldModel, TableDef};

pub mod stmt;

/// A Result type alias that uses sitestore's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
