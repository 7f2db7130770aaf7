pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{LocalStorage, TomlConfig};
pub use core::callbacks::{CallbackRegistry, ControlState, InputId, OutputId};
pub use core::charts::Figure;
pub use core::dashboard::Dashboard;
pub use domain::model::{LaunchRecord, LaunchTable, Outcome, PayloadRange, SiteSelection};
pub use utils::error::{DashError, Result};
