pub mod errors;
pub mod logging;
pub mod pihole;
pub mod root;
pub mod sync;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use pihole::{PiholeConfig, PLACEHOLDER_PIHOLE_HOST};
pub use root::{CliOverrides, Config};
pub use sync::{SyncConfig, PLACEHOLDER_TARGET_HOST};
