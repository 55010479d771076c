//! Registry test utilities

use std::collections::HashMap;

/// In-memory stand-in for a registry client
///
/// Versions are returned in publishing order, oldest first, the way registry
/// clients hand them to a filter.
#[derive(Default)]
pub struct MockRegistry {
    versions: HashMap<String, Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, package: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn fetch_all_versions(&self, package: &str) -> Vec<String> {
        self.versions.get(package).cloned().unwrap_or_default()
    }
}
