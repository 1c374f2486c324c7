mod config;
mod logging;
mod preflight;

pub use config::{load_config, validate_config};
pub use logging::init_logging;
pub use preflight::run_preflight;
