//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
///
/// Transport and envelope failures abort the whole harvest call; per-record
/// failures (`MissingElement`, `InvalidDatestamp`) abort normalization of
/// one record and leave skip-vs-abort to the caller. Suppression of a
/// record (unapproved set, tombstone) is *not* an error and is signalled
/// with `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// HTTP request failed (network error or non-2xx status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// The record header datestamp was missing or unparseable.
    #[error("Invalid datestamp '{value}' for record {doc_id}")]
    InvalidDatestamp { doc_id: String, value: String },

    /// The provider echoed a resumption token it had already returned.
    #[error("Provider repeated resumption token '{token}'; aborting harvest")]
    ResumptionLoop { token: String },

    /// The paginated fetch exceeded the configured page limit.
    #[error("Harvest exceeded the limit of {limit} pages")]
    PageLimitExceeded { limit: usize },
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_display() {
        let err = HarvestError::MissingElement {
            element: "header/identifier".to_string(),
            context: "vtech".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required XML element: header/identifier in vtech"
        );
    }

    #[test]
    fn test_invalid_datestamp_display() {
        let err = HarvestError::InvalidDatestamp {
            doc_id: "oai:example.org:1".to_string(),
            value: "yesterday".to_string(),
        };
        assert!(err.to_string().contains("yesterday"));
        assert!(err.to_string().contains("oai:example.org:1"));
    }

    #[test]
    fn test_resumption_loop_display() {
        let err = HarvestError::ResumptionLoop {
            token: "T1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Provider repeated resumption token 'T1'; aborting harvest"
        );
    }

    #[test]
    fn test_page_limit_display() {
        let err = HarvestError::PageLimitExceeded { limit: 100 };
        assert_eq!(err.to_string(), "Harvest exceeded the limit of 100 pages");
    }
}
