use std::io;

use thiserror::Error;

/// A problem met while loading a catalog resource.
///
/// None of these abort a load; they are collected in [`crate::data::Loaded`]
/// next to whatever data could be read.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot open {resource}: {source}")]
    Unavailable {
        resource: String,
        #[source]
        source: io::Error,
    },

    #[error("failed reading {resource}: {source}")]
    Read {
        resource: String,
        #[source]
        source: io::Error,
    },

    #[error("{resource} line {line}: {reason}")]
    Malformed {
        resource: String,
        line: u64,
        reason: String,
    },

    #[error("{resource} line {line}: invalid {field} value '{value}'")]
    InvalidField {
        resource: String,
        line: u64,
        field: &'static str,
        value: String,
    },
}

impl CatalogError {
    pub fn resource(&self) -> &str {
        match self {
            Self::Unavailable { resource, .. }
            | Self::Read { resource, .. }
            | Self::Malformed { resource, .. }
            | Self::InvalidField { resource, .. } => resource,
        }
    }

    /// Line-level issues leave the rest of the resource intact.
    pub fn is_line_issue(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::InvalidField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_resource_and_line() {
        let e = CatalogError::InvalidField {
            resource: "stars.txt".to_string(),
            line: 12,
            field: "ra",
            value: "abc".to_string(),
        };
        assert_eq!(e.to_string(), "stars.txt line 12: invalid ra value 'abc'");
        assert_eq!(e.resource(), "stars.txt");
        assert!(e.is_line_issue());
    }

    #[test]
    fn io_failures_are_not_line_issues() {
        let e = CatalogError::Unavailable {
            resource: "/nope/stars.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(!e.is_line_issue());
        assert!(e.to_string().starts_with("cannot open /nope/stars.txt"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
