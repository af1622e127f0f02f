//! Configuration loading for the page enhancements.
//!
//! Element ids, selectors and class names are centralized here and may be
//! overridden by a TOML block embedded in the page. Any missing or invalid
//! entries fall back to the defaults so the page still gets enhanced.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{CONFIG_ELEMENT_ID, load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel};
