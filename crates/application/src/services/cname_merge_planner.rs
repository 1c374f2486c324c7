use cname_sync_domain::{CnameEntry, CnameRecord, DesiredDomains};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Result of merging the desired domains into the existing record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CnameMergePlan {
    /// Existing entries in their original order, followed by `added`.
    pub records: Vec<CnameEntry>,
    pub added: Vec<CnameRecord>,
    /// Desired domains that already had a record, whatever its target.
    pub already_present: Vec<Arc<str>>,
    /// Existing records for desired domains that point elsewhere. Left as is.
    pub target_mismatches: Vec<CnameRecord>,
    /// Desired domains that cannot be written into the record list.
    pub rejected: Vec<Arc<str>>,
}

impl CnameMergePlan {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Additive merge: existing entries are never removed or rewritten, and a
/// domain is matched by exact string on the domain field only. Unparsed
/// entries are kept but never match a domain.
///
/// Duplicate domains already on the host (same domain, different targets)
/// are kept as they are; only newly added records are unique.
pub struct CnameMergePlanner;

impl CnameMergePlanner {
    pub fn plan(existing: &[CnameEntry], desired: &DesiredDomains, target: &str) -> CnameMergePlan {
        let mut by_domain: HashMap<&str, &CnameRecord> = HashMap::with_capacity(existing.len());
        for record in existing.iter().filter_map(CnameEntry::as_record) {
            by_domain.entry(record.domain.as_ref()).or_insert(record);
        }

        let mut plan = CnameMergePlan {
            records: existing.to_vec(),
            ..Default::default()
        };
        let mut planned: HashSet<&str> = HashSet::new();

        for domain in desired.iter() {
            if let Some(record) = by_domain.get(domain) {
                plan.already_present.push(Arc::from(domain));
                if !record.points_to(target) {
                    plan.target_mismatches.push((*record).clone());
                }
                continue;
            }

            if CnameRecord::validate_domain(domain).is_err() {
                plan.rejected.push(Arc::from(domain));
                continue;
            }

            if !planned.insert(domain) {
                continue;
            }

            let record = CnameRecord::new(domain, target);
            plan.added.push(record.clone());
            plan.records.push(record.into());
        }

        plan
    }
}
