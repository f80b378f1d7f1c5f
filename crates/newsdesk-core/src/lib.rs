//! Shared types, configuration, and errors for the Newsdesk system.

pub mod config;
pub mod error;
pub mod types;

pub use config::NewsdeskConfig;
pub use error::{NewsdeskError, Result};
pub use types::{CompanyInfo, Story, ThemeWindow, Topic};
