//! OAI Harvester - harvest bibliographic metadata from OAI-PMH providers.
//!
//! This crate fetches records from repositories speaking the OAI-PMH
//! protocol (paginated `ListRecords` retrieval with resumption-token
//! cursoring) and converts each record into a canonical normalized
//! document schema usable by downstream indexing and storage.
//!
//! # Example
//!
//! ```no_run
//! use oai_harvester::{Harvester, OaiConfig, OaiHarvester};
//!
//! # fn main() -> oai_harvester::Result<()> {
//! let config = OaiConfig::new("vtech", "http://vtechworks.lib.vt.edu/oai/request")
//!     .with_property_list(["type", "publisher", "format", "date", "language"]);
//! let harvester = OaiHarvester::new(config)?;
//!
//! for raw in harvester.harvest(1)? {
//!     if let Some(doc) = harvester.normalize(&raw)? {
//!         println!("{}: {}", doc.id.service_id, doc.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`config`]: protocol constants and per-provider configuration
//! - [`error`]: error types and Result alias
//! - [`types`]: raw and normalized document types
//! - [`http`]: HTTP client for page requests
//! - [`xml`]: namespace-aware XML helpers and record re-serialization
//! - [`name`]: contributor name parsing
//! - [`fetch`]: resumption-token pagination
//! - [`extract`]: per-field extractors
//! - [`harvester`]: the [`Harvester`] trait and [`OaiHarvester`]

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod harvester;
pub mod http;
pub mod name;
pub mod types;
pub mod xml;

pub use config::OaiConfig;
pub use error::{HarvestError, Result};
pub use harvester::{Harvester, OaiHarvester};
pub use types::{Contributor, DocumentIds, NormalizedDocument, RawDocument};
