//! The harvester capability interface and its OAI-PMH implementation.

use chrono::{Days, Utc};
use reqwest::blocking::Client;
use roxmltree::Document;

use crate::config::OaiConfig;
use crate::error::{HarvestError, Result};
use crate::extract;
use crate::fetch;
use crate::http;
use crate::types::{NormalizedDocument, RawDocument};

/// A metadata provider that can be harvested and normalized.
///
/// Concrete providers implement both operations; selection happens by
/// configuration rather than inheritance. `Ok(None)` from [`normalize`]
/// is the expected "do not index this record" outcome, distinct from an
/// `Err`, which is a real per-record failure.
///
/// [`normalize`]: Harvester::normalize
pub trait Harvester {
    /// Fetch all records updated in the last `days_back` days as raw
    /// documents, in provider order.
    fn harvest(&self, days_back: u32) -> Result<Vec<RawDocument>>;

    /// Derive the canonical document from a raw record, or signal
    /// suppression with `Ok(None)`.
    fn normalize(&self, raw: &RawDocument) -> Result<Option<NormalizedDocument>>;
}

/// Harvester for providers speaking OAI-PMH with `oai_dc` metadata.
pub struct OaiHarvester {
    config: OaiConfig,
    client: Client,
}

impl OaiHarvester {
    /// Build a harvester for one provider configuration.
    pub fn new(config: OaiConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client()?,
            config,
        })
    }

    /// The provider configuration this harvester was built with.
    #[must_use]
    pub fn config(&self) -> &OaiConfig {
        &self.config
    }
}

impl Harvester for OaiHarvester {
    fn harvest(&self, days_back: u32) -> Result<Vec<RawDocument>> {
        let start_date = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(u64::from(days_back)))
            .unwrap_or_else(|| Utc::now().date_naive())
            .format("%Y-%m-%d")
            .to_string();
        let url = self.config.initial_url(&start_date);

        let snippets = fetch::fetch_records(&self.client, &self.config, &url)?;

        let mut raw_docs = Vec::with_capacity(snippets.len());
        for snippet in snippets {
            let doc_id = {
                let doc = Document::parse(&snippet)?;
                extract::header_identifier(doc.root_element()).ok_or_else(|| {
                    HarvestError::MissingElement {
                        element: "header/identifier".to_string(),
                        context: self.config.name.clone(),
                    }
                })?
            };
            raw_docs.push(RawDocument::xml(self.config.name.as_str(), doc_id, snippet));
        }
        Ok(raw_docs)
    }

    fn normalize(&self, raw: &RawDocument) -> Result<Option<NormalizedDocument>> {
        let doc = Document::parse(&raw.doc)?;
        let record = doc.root_element();

        // Set filtering comes first so unapproved records cost no extraction.
        if let Some(approved) = &self.config.approved_sets {
            let sets = extract::header_set_specs(record);
            if !sets.iter().any(|s| approved.contains(s)) {
                tracing::info!(source = %self.config.name, sets = ?sets, "sets not in approved list");
                return Ok(None);
            }
        }

        let normalized = NormalizedDocument {
            source: self.config.name.clone(),
            title: extract::title(record),
            description: extract::description(record),
            id: extract::ids(record, &raw.doc_id),
            contributors: extract::contributors(record),
            tags: extract::tags(record),
            properties: extract::properties(record, &self.config.property_list),
            date_updated: extract::date_updated(record, &raw.doc_id)?,
        };

        // Tombstone check runs after assembly: the suppression log wants
        // the serviceID from the assembled identifier block.
        if extract::header_status(record) == Some("deleted") {
            tracing::info!(service_id = %normalized.id.service_id, "deleted record, not normalizing");
            return Ok(None);
        }

        Ok(Some(normalized))
    }
}
