mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub mod prelude;

pub use setup::{admin, guest, input, maintain, run, Fixture};

pub use std_util::*;
