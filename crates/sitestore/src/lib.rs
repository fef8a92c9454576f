pub mod db;
pub use db::Db;

pub mod engine;
pub use engine::{
    authorize, extract, Action, Decision, ExtractMode, Input, ListQuery, SiteAuthority,
    TenantContext, TenantPredicate, ADMIN_SITE,
};

pub mod kinds;
pub use kinds::{Contents, Mappings, Tools};

pub use sitestore_core::{
    bail, err,
    schema::{self, FieldDescriptor, FieldModel, FieldType, Role, TableDef},
    stmt::{self, Direction, Record, Value},
    Error, FieldError, Result, Severity,
};

pub mod driver {
    pub use sitestore_core::driver::{
        operation::{self, Operation},
        Capability, Connection, Driver, Response, Rows,
    };
}

#[cfg(feature = "sqlite")]
pub use sitestore_driver_sqlite::Sqlite;
