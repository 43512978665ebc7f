//! Core document types exchanged between the fetch and normalize stages.
//!
//! Serde field names follow the canonical document schema shared with
//! downstream storage and indexing (`docID`, `serviceID`, `ORCID`,
//! `dateUpdated`).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::name::HumanName;

/// One harvested record prior to interpretation.
///
/// Created once per record by the harvest orchestrator and never mutated;
/// the payload preserves the provider's original markup so a record can be
/// re-normalized later without re-fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Harvester identifier.
    pub source: String,

    /// Provider-assigned identifier from the record header.
    #[serde(rename = "docID")]
    pub doc_id: String,

    /// Self-contained serialized record XML.
    pub doc: String,

    /// Declared encoding of the payload.
    pub encoding: String,

    /// Content format tag; always `"xml"` for this pipeline.
    pub filetype: String,
}

impl RawDocument {
    /// Wrap a serialized XML record.
    #[must_use]
    pub fn xml(
        source: impl Into<String>,
        doc_id: impl Into<String>,
        doc: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            doc_id: doc_id.into(),
            doc: doc.into(),
            encoding: "UTF-8".to_string(),
            filetype: "xml".to_string(),
        }
    }
}

/// Structured identifier block of a normalized document.
///
/// Any sub-field may be empty when the provider does not expose it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentIds {
    /// The provider-assigned identifier carried over from the raw document.
    #[serde(rename = "serviceID")]
    pub service_id: String,

    /// Landing-page URL, if one was found among the identifiers.
    pub url: String,

    /// Bare DOI with `doi:`/`http://dx.doi.org/` prefixes stripped.
    pub doi: String,
}

/// One contributor or creator, parsed into name parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contributor {
    pub prefix: String,
    pub given: String,
    pub middle: String,
    pub family: String,
    pub suffix: String,

    /// Always empty; OAI providers do not expose contributor emails.
    pub email: String,

    /// Always empty; OAI providers do not expose ORCIDs.
    #[serde(rename = "ORCID")]
    pub orcid: String,
}

impl From<HumanName> for Contributor {
    fn from(name: HumanName) -> Self {
        Self {
            prefix: name.prefix,
            given: name.given,
            middle: name.middle,
            family: name.family,
            suffix: name.suffix,
            email: String::new(),
            orcid: String::new(),
        }
    }
}

/// Canonical representation of a bibliographic record.
///
/// Either fully populated or not produced at all: optional fields degrade
/// to empty values, never to a dropped document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// Harvester identifier.
    pub source: String,

    /// First descriptive title, or empty.
    pub title: String,

    /// First descriptive description, or empty.
    pub description: String,

    /// Structured identifiers.
    pub id: DocumentIds,

    /// Contributors then creators, in source order.
    pub contributors: Vec<Contributor>,

    /// Lower-cased, trimmed, deduplicated subject tags.
    pub tags: BTreeSet<String>,

    /// Configured extra properties, keyed by field name.
    pub properties: BTreeMap<String, Vec<String>>,

    /// ISO-8601 timestamp from the record header datestamp.
    #[serde(rename = "dateUpdated")]
    pub date_updated: String,
}
