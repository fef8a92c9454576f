//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{admin, guest, input, maintain, run, ExecLog, Fixture};

pub use sitestore::{
    kinds, Db, Direction, Error, Input, ListQuery, Record, Severity, TenantContext, Value,
};

pub use std_util::prelude::*;
