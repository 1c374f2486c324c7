pub mod cname_list_codec;
pub mod cname_merge_planner;

pub use cname_list_codec::CnameListCodec;
pub use cname_merge_planner::{CnameMergePlan, CnameMergePlanner};
