pub mod nginx_config_reader;

pub use nginx_config_reader::NginxConfigReader;
