//! Command implementations.

pub mod explore;
pub mod merge;
pub mod show;
pub mod topics;

pub use self::explore::{explore_domain, explore_merged, parse_domain_list, Explored};
pub use self::merge::execute_merge;
pub use self::show::execute_show;
pub use self::topics::{execute_info, execute_topics};
