use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single CNAME alias as stored by Pi-hole: `domain,target[,ttl]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CnameRecord {
    pub domain: Arc<str>,
    pub target: Arc<str>,
    pub ttl: Option<u32>,
}

impl CnameRecord {
    pub fn new(domain: impl Into<Arc<str>>, target: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            target: target.into(),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Parses one list entry. Returns `None` for anything that is not
    /// `domain,target` or `domain,target,ttl` with non-empty fields.
    pub fn parse_entry(entry: &str) -> Option<Self> {
        let mut fields = entry.trim().split(',').map(str::trim);

        let domain = fields.next().filter(|d| !d.is_empty())?;
        let target = fields.next().filter(|t| !t.is_empty())?;
        let ttl = match fields.next() {
            Some(raw) => Some(raw.parse::<u32>().ok()?),
            None => None,
        };
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            domain: Arc::from(domain),
            target: Arc::from(target),
            ttl,
        })
    }

    pub fn to_entry(&self) -> String {
        match self.ttl {
            Some(ttl) => format!("{},{},{}", self.domain, self.target, ttl),
            None => format!("{},{}", self.domain, self.target),
        }
    }

    pub fn points_to(&self, target: &str) -> bool {
        self.target.as_ref() == target
    }

    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        if domain.len() > 253 {
            return Err("Domain cannot exceed 253 characters".to_string());
        }
        if domain.contains(',') || domain.contains('"') || domain.contains('\'') {
            return Err("Domain contains characters reserved by the record list".to_string());
        }
        if domain.chars().any(char::is_whitespace) {
            return Err("Domain cannot contain whitespace".to_string());
        }
        Ok(())
    }
}

/// One element of the remote list. Text that looks like an entry but does
/// not parse as a [`CnameRecord`] is carried verbatim so a rewrite of the
/// list never loses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CnameEntry {
    Record(CnameRecord),
    Unparsed(Arc<str>),
}

impl CnameEntry {
    /// `None` only for text without a comma, which cannot be an entry.
    pub fn parse(entry: &str) -> Option<Self> {
        if let Some(record) = CnameRecord::parse_entry(entry) {
            return Some(Self::Record(record));
        }
        let entry = entry.trim();
        entry
            .contains(',')
            .then(|| Self::Unparsed(Arc::from(entry)))
    }

    pub fn as_record(&self) -> Option<&CnameRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Unparsed(_) => None,
        }
    }

    pub fn to_entry(&self) -> String {
        match self {
            Self::Record(record) => record.to_entry(),
            Self::Unparsed(raw) => raw.to_string(),
        }
    }
}

impl From<CnameRecord> for CnameEntry {
    fn from(record: CnameRecord) -> Self {
        Self::Record(record)
    }
}

impl fmt::Display for CnameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.domain, self.target)
    }
}
