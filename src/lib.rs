pub mod config;
pub mod version;

pub use config::FilterConfig;
pub use version::error::FilterError;
pub use version::filter::Filter;
pub use version::kind::VersionKind;
pub use version::types::{CandidateOrder, Version};
