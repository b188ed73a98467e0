pub mod classify;
pub mod config;
pub mod drive;
pub mod error;
pub mod inbox;
pub mod platform;
pub mod progress;
pub mod purge;
pub mod walker;

pub use crate::config::AppConfig;
pub use crate::drive::Drive;
pub use crate::error::Error;
pub use crate::progress::{ConsoleReporter, ProgressReporter, SilentReporter};
pub use crate::purge::{PurgeList, PurgeStats};
