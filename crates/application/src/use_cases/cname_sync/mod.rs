pub mod sync_cname_records;

pub use sync_cname_records::{SyncCnameRecordsUseCase, SyncOutcome, SyncState};
