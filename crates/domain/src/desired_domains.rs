use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Domains declared by the proxy configuration, in file-scan order with
/// duplicates removed (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredDomains {
    domains: Vec<Arc<str>>,
}

impl DesiredDomains {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_extracted<I, S>(extracted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut domains = Vec::new();
        for domain in extracted {
            let domain = domain.as_ref();
            if domain.is_empty() {
                continue;
            }
            if seen.insert(domain.to_string()) {
                domains.push(Arc::from(domain));
            }
        }
        Self { domains }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| d.as_ref())
    }

    /// Order-insensitive comparison used to skip unchanged cycles.
    pub fn same_domains(&self, other: &DesiredDomains) -> bool {
        if self.domains.len() != other.domains.len() {
            return false;
        }
        let mut counts: HashMap<&str, isize> = HashMap::with_capacity(self.domains.len());
        for domain in &self.domains {
            *counts.entry(domain.as_ref()).or_default() += 1;
        }
        for domain in &other.domains {
            *counts.entry(domain.as_ref()).or_default() -= 1;
        }
        counts.values().all(|c| *c == 0)
    }
}

impl<'a> IntoIterator for &'a DesiredDomains {
    type Item = &'a Arc<str>;
    type IntoIter = std::slice::Iter<'a, Arc<str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}
