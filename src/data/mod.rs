pub mod names;
pub mod nebulae;
pub mod source;
pub mod stars;

pub use nebulae::load_nebulae;
pub use source::Source;
pub use stars::StarCatalog;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Complete,
    Degraded,
}

/// Outcome of a best-effort load: whatever could be read, plus every issue
/// that was skipped over on the way.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub issues: Vec<CatalogError>,
}

impl<T> Loaded<T> {
    pub fn new(value: T, issues: Vec<CatalogError>) -> Self {
        Self { value, issues }
    }

    pub fn status(&self) -> LoadStatus {
        if self.issues.is_empty() {
            LoadStatus::Complete
        } else {
            LoadStatus::Degraded
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == LoadStatus::Complete
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded {
            value: f(self.value),
            issues: self.issues,
        }
    }
}
