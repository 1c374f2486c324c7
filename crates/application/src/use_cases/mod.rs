pub mod cname_sync;

pub use cname_sync::{SyncCnameRecordsUseCase, SyncOutcome, SyncState};
