pub mod proxy;
pub mod remote;
pub mod system;
