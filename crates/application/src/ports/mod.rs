mod cname_record_store;
mod proxy_config_source;

pub use cname_record_store::CnameRecordStore;
pub use proxy_config_source::ProxyConfigSource;
