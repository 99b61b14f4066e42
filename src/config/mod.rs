//! Configuration loading and management for the Utilization Engine.
//!
//! This module loads the HR settings (standard working hours) and the HR
//! dataset (employees, holiday lists, companies, timesheets) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use utilization_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Standard working hours: {:?}", config.standard_working_hours());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HrSettings, MAX_STANDARD_WORKING_HOURS};
