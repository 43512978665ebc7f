//! Paginated record retrieval across a `ListRecords` resumption chain.
//!
//! Pagination is strictly sequential: each page's URL depends on the token
//! returned by the previous page, so there is nothing to parallelize. The
//! chain is driven entirely by server-returned tokens, and the loop guards
//! against providers that echo a token back or never stop paginating.

use std::collections::HashSet;
use std::thread;

use reqwest::blocking::Client;
use roxmltree::Document;

use crate::config::{OaiConfig, OAI_NS};
use crate::error::{HarvestError, Result};
use crate::http;
use crate::xml::{descendants_ns, serialize_subtree};

/// Fetch every record in the harvest window, following resumption tokens.
///
/// Returns the records of all pages as self-contained XML snippets,
/// preserving encounter order across pages. Between pages the configured
/// politeness delay is honored. An empty or absent `resumptionToken` ends
/// the chain; a repeated token or more than `max_pages` pages aborts it.
pub fn fetch_records(client: &Client, config: &OaiConfig, first_url: &str) -> Result<Vec<String>> {
    let mut records: Vec<String> = Vec::new();
    let mut seen_tokens: HashSet<String> = HashSet::new();
    let mut url = first_url.to_string();
    let mut pages = 0usize;

    loop {
        if pages == config.max_pages {
            return Err(HarvestError::PageLimitExceeded {
                limit: config.max_pages,
            });
        }

        let body = http::fetch_page(client, &url)?;
        let doc = Document::parse(&body)?;
        let root = doc.root_element();

        let before = records.len();
        for record in descendants_ns(root, OAI_NS, "record") {
            records.push(serialize_subtree(record));
        }
        pages += 1;
        tracing::debug!(page = pages, records = records.len() - before, "parsed page");

        let token = descendants_ns(root, OAI_NS, "resumptionToken")
            .find_map(|n| n.text())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        match token {
            None => break,
            Some(token) => {
                if !seen_tokens.insert(token.clone()) {
                    tracing::warn!(token = %token, "provider repeated resumption token");
                    return Err(HarvestError::ResumptionLoop { token });
                }
                thread::sleep(config.timeout);
                url = config.resumption_url(&token);
            }
        }
    }

    tracing::info!(records = records.len(), pages, "fetch complete");
    Ok(records)
}
