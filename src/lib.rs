// Library for tests to access modules

pub mod config;
pub mod format;
pub mod log_sink;
pub mod mode;
pub mod models;
pub mod monitor;
pub mod render;
pub mod sampler;
pub mod sysinfo_repo;
pub mod usage_log;
pub mod version;
pub mod views;
