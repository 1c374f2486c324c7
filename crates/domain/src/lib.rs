//! CNAME Sync Domain Layer
pub mod cname_record;
pub mod config;
pub mod desired_domains;
pub mod errors;

pub use cname_record::{CnameEntry, CnameRecord};
pub use config::{CliOverrides, Config, ConfigError};
pub use desired_domains::DesiredDomains;
pub use errors::DomainError;
