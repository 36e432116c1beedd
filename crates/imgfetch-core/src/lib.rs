pub mod config;
pub mod logging;

pub mod batch;
pub mod error;
pub mod fetch;
pub mod naming;
pub mod report;
pub mod storage;
