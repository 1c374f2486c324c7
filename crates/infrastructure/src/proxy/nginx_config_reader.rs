use async_trait::async_trait;
use cname_sync_application::ports::ProxyConfigSource;
use cname_sync_domain::{CnameRecord, DomainError};
use fancy_regex::Regex;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

const SERVER_NAME_PATTERN: &str = r"\bserver_name\s+([^;]+);";

/// Reads `server_name` directives from the nginx files Nginx Proxy Manager
/// writes for its proxy hosts (one `*.conf` per host).
pub struct NginxConfigReader {
    config_dir: PathBuf,
    extension: String,
    server_name: Regex,
}

impl NginxConfigReader {
    pub fn new(config_dir: impl Into<PathBuf>, extension: &str) -> Result<Self, DomainError> {
        let server_name = Regex::new(SERVER_NAME_PATTERN)
            .map_err(|e| DomainError::ConfigError(format!("Invalid server_name pattern: {}", e)))?;

        Ok(Self {
            config_dir: config_dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
            server_name,
        })
    }

    /// Domains declared in one file's contents, in order of appearance.
    pub fn extract_domains(&self, content: &str) -> Vec<String> {
        let uncommented: String = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n");

        let mut domains = Vec::new();
        for captures in self.server_name.captures_iter(&uncommented) {
            let Ok(captures) = captures else {
                continue;
            };
            let Some(names) = captures.get(1) else {
                continue;
            };
            domains.extend(
                names
                    .as_str()
                    .split_whitespace()
                    .filter(|token| is_plain_server_name(token))
                    .map(String::from),
            );
        }
        domains
    }

    async fn list_config_files(&self) -> Result<Vec<PathBuf>, DomainError> {
        let unavailable = |e: std::io::Error| {
            DomainError::ProxyConfigDirUnavailable(format!(
                "{}: {}",
                self.config_dir.display(),
                e
            ))
        };

        let mut entries = fs::read_dir(&self.config_dir).await.map_err(unavailable)?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
            let path = entry.path();
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_extension {
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => continue,
                Ok(_) => files.push(path),
                Err(e) => warn!(error = %e, path = %path.display(), "Cannot stat config file"),
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Skips nginx catch-alls, regex names and variables, none of which name
/// a single resolvable host.
fn is_plain_server_name(token: &str) -> bool {
    if token == "_" || token == "\"\"" || token.starts_with('~') || token.contains('$') {
        return false;
    }
    CnameRecord::validate_domain(token).is_ok()
}

#[async_trait]
impl ProxyConfigSource for NginxConfigReader {
    async fn read_domains(&self) -> Result<Vec<String>, DomainError> {
        let files = self.list_config_files().await?;
        info!(
            files = files.len(),
            dir = %self.config_dir.display(),
            "Found proxy config files"
        );

        let mut domains = Vec::new();
        for path in files {
            let content = match fs::read(&path).await {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Error reading proxy config file");
                    continue;
                }
            };

            let found = self.extract_domains(&content);
            if !found.is_empty() {
                debug!(path = %path.display(), domains = ?found, "Server names extracted");
            }
            domains.extend(found);
        }

        Ok(domains)
    }
}
