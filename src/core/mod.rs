pub mod callbacks;
pub mod charts;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod layout;

pub use crate::domain::model::{
    LaunchRecord, LaunchTable, Outcome, PayloadRange, SiteSelection, ALL_SITES,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
