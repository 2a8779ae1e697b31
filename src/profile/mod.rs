pub mod binary;
pub mod ignore;
pub mod record;

pub use ignore::IgnoreSet;
pub use record::{ProfileRecord, TagValue};
