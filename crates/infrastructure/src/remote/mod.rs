pub mod pihole_store;
pub mod ssh;

pub use pihole_store::PiholeCnameStore;
pub use ssh::{shell_quote, SshSession};
