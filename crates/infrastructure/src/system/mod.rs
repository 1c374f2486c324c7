pub mod ssh_keys;
pub mod tooling;

pub use ssh_keys::{ensure_key_pair, trust_host, KeyStatus};
pub use tooling::require_tool;
