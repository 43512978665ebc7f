//! Stateless field extractors over one parsed OAI-PMH record.
//!
//! Each function reads a single canonical field from the record node.
//! Optional fields degrade to empty values; only the header identifier and
//! datestamp are required.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use roxmltree::Node;

use crate::config::{DC_NS, OAI_NS};
use crate::error::{HarvestError, Result};
use crate::name::parse_human_name;
use crate::types::{Contributor, DocumentIds};
use crate::xml::{children_ns, first_text_ns, texts_ns};

/// Provider-assigned identifier from the record header.
pub fn header_identifier(record: Node<'_, '_>) -> Option<String> {
    let header = children_ns(record, OAI_NS, "header").next()?;
    children_ns(header, OAI_NS, "identifier")
        .find_map(|n| n.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `setSpec` header values with any `publication:` prefix stripped.
pub fn header_set_specs(record: Node<'_, '_>) -> Vec<String> {
    let Some(header) = children_ns(record, OAI_NS, "header").next() else {
        return Vec::new();
    };
    children_ns(header, OAI_NS, "setSpec")
        .filter_map(|n| n.text())
        .map(|s| {
            let s = s.trim();
            s.strip_prefix("publication:").unwrap_or(s).to_string()
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// The header `status` attribute, if present.
pub fn header_status<'a>(record: Node<'a, '_>) -> Option<&'a str> {
    children_ns(record, OAI_NS, "header")
        .next()
        .and_then(|header| header.attribute("status"))
}

/// First descriptive title, or empty.
pub fn title(record: Node<'_, '_>) -> String {
    first_text_ns(record, DC_NS, "title").unwrap_or_default()
}

/// First descriptive description, or empty.
pub fn description(record: Node<'_, '_>) -> String {
    first_text_ns(record, DC_NS, "description").unwrap_or_default()
}

/// All contributor and creator names, contributors first, each parsed into
/// name parts. Email and ORCID stay empty; OAI providers don't expose them.
pub fn contributors(record: Node<'_, '_>) -> Vec<Contributor> {
    let mut names = texts_ns(record, DC_NS, "contributor");
    names.extend(texts_ns(record, DC_NS, "creator"));
    names
        .iter()
        .map(|raw| Contributor::from(parse_human_name(raw)))
        .collect()
}

/// Subject tags: lower-cased, trimmed, comma-separated subjects split into
/// individual tags, collected into a fresh deduplicated set.
pub fn tags(record: Node<'_, '_>) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    for subject in texts_ns(record, DC_NS, "subject") {
        if subject.contains(", ") {
            for part in subject.split(',') {
                insert_tag(&mut tags, part);
            }
        } else {
            insert_tag(&mut tags, &subject);
        }
    }
    tags
}

fn insert_tag(tags: &mut BTreeSet<String>, raw: &str) {
    let tag = raw.trim().to_lowercase();
    if !tag.is_empty() {
        tags.insert(tag);
    }
}

/// DOI and landing-page URL from the identifier fields.
///
/// The first identifier mentioning "doi" wins, with the usual
/// `doi:`/`DOI:`/`http://dx.doi.org/` decorations stripped. The first
/// http(s) identifier not containing "viewcontent" wins as the URL, which
/// prefers a landing page over a direct PDF-serving link. Providers listing
/// several DOIs lose all but the first; a known lossy simplification.
pub fn ids(record: Node<'_, '_>, service_id: &str) -> DocumentIds {
    let mut doi = String::new();
    let mut url = String::new();

    for item in texts_ns(record, DC_NS, "identifier") {
        if doi.is_empty() && item.to_lowercase().contains("doi") {
            doi = item
                .replace("doi:", "")
                .replace("DOI:", "")
                .replace("http://dx.doi.org/", "")
                .trim()
                .to_string();
        }
        if url.is_empty()
            && (item.contains("http://") || item.contains("https://"))
            && !item.contains("viewcontent")
        {
            url = item.clone();
        }
    }

    DocumentIds {
        service_id: service_id.to_string(),
        url,
        doi,
    }
}

/// Values for each configured property name, searching the descriptive
/// namespace first and the protocol namespace second.
pub fn properties(
    record: Node<'_, '_>,
    property_list: &[String],
) -> BTreeMap<String, Vec<String>> {
    let mut properties = BTreeMap::new();
    for name in property_list {
        let mut values = texts_ns(record, DC_NS, name);
        values.extend(texts_ns(record, OAI_NS, name));
        properties.insert(name.clone(), values);
    }
    properties
}

/// Header datestamp as an ISO-8601 string.
///
/// Required: a missing or unparseable datestamp is a provider data error,
/// fatal to normalizing this record.
pub fn date_updated(record: Node<'_, '_>, doc_id: &str) -> Result<String> {
    let header = children_ns(record, OAI_NS, "header")
        .next()
        .ok_or_else(|| HarvestError::MissingElement {
            element: "header".to_string(),
            context: doc_id.to_string(),
        })?;
    let raw = children_ns(header, OAI_NS, "datestamp")
        .find_map(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| HarvestError::MissingElement {
            element: "header/datestamp".to_string(),
            context: doc_id.to_string(),
        })?;

    to_iso8601(raw).ok_or_else(|| HarvestError::InvalidDatestamp {
        doc_id: doc_id.to_string(),
        value: raw.to_string(),
    })
}

/// Accepts the datestamp granularities OAI-PMH allows: full RFC 3339, a
/// naive datetime, or a bare date (read as midnight).
fn to_iso8601(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_rfc3339());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(format!("{}T00:00:00", date.format("%Y-%m-%d")));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const RECORD: &str = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/">
  <header status="deleted">
    <identifier>oai:example.org:123</identifier>
    <datestamp>2014-09-29</datestamp>
    <setSpec>publication:biology</setSpec>
    <setSpec>theses</setSpec>
  </header>
  <metadata>
    <oai_dc:dc xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
               xmlns:dc="http://purl.org/dc/elements/1.1/">
      <dc:title>On the Behavior of Finches</dc:title>
      <dc:title>Secondary title</dc:title>
      <dc:description>A study.</dc:description>
      <dc:creator>Darwin, Charles</dc:creator>
      <dc:contributor>Dr. John Q. Public Jr.</dc:contributor>
      <dc:subject>Genetics, Behavior</dc:subject>
      <dc:subject>Ecology</dc:subject>
      <dc:subject>ecology</dc:subject>
      <dc:identifier>doi:10.1000/xyz</dc:identifier>
      <dc:identifier>http://example.org/viewcontent.cgi?x=1</dc:identifier>
      <dc:identifier>http://example.org/landing</dc:identifier>
      <dc:date>2014-09-01</dc:date>
      <dc:language>en</dc:language>
    </oai_dc:dc>
  </metadata>
</record>"#;

    fn parse() -> Document<'static> {
        Document::parse(RECORD).unwrap()
    }

    #[test]
    fn test_header_identifier() {
        let doc = parse();
        assert_eq!(
            header_identifier(doc.root_element()),
            Some("oai:example.org:123".to_string())
        );
    }

    #[test]
    fn test_header_set_specs_strips_publication_prefix() {
        let doc = parse();
        assert_eq!(
            header_set_specs(doc.root_element()),
            vec!["biology", "theses"]
        );
    }

    #[test]
    fn test_header_status() {
        let doc = parse();
        assert_eq!(header_status(doc.root_element()), Some("deleted"));
    }

    #[test]
    fn test_title_takes_first() {
        let doc = parse();
        assert_eq!(title(doc.root_element()), "On the Behavior of Finches");
    }

    #[test]
    fn test_description() {
        let doc = parse();
        assert_eq!(description(doc.root_element()), "A study.");
    }

    #[test]
    fn test_missing_optional_fields_are_empty() {
        let xml = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/">
            <header><identifier>x</identifier><datestamp>2014-09-29</datestamp></header>
        </record>"#;
        let doc = Document::parse(xml).unwrap();
        let record = doc.root_element();

        assert_eq!(title(record), "");
        assert_eq!(description(record), "");
        assert!(contributors(record).is_empty());
        assert!(tags(record).is_empty());
        assert_eq!(ids(record, "x").doi, "");
        assert_eq!(ids(record, "x").url, "");
    }

    #[test]
    fn test_contributors_order_and_parsing() {
        let doc = parse();
        let list = contributors(doc.root_element());
        assert_eq!(list.len(), 2);

        // Contributors come before creators.
        assert_eq!(list[0].prefix, "Dr.");
        assert_eq!(list[0].given, "John");
        assert_eq!(list[0].family, "Public");
        assert_eq!(list[0].suffix, "Jr.");

        assert_eq!(list[1].given, "Charles");
        assert_eq!(list[1].family, "Darwin");
        assert_eq!(list[1].email, "");
        assert_eq!(list[1].orcid, "");
    }

    #[test]
    fn test_tags_split_lowercase_dedup() {
        let doc = parse();
        let expected: BTreeSet<String> = ["genetics", "behavior", "ecology"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tags(doc.root_element()), expected);
    }

    #[test]
    fn test_ids_doi_and_url() {
        let doc = parse();
        let ids = ids(doc.root_element(), "oai:example.org:123");
        assert_eq!(ids.service_id, "oai:example.org:123");
        assert_eq!(ids.doi, "10.1000/xyz");
        assert_eq!(ids.url, "http://example.org/landing");
    }

    #[test]
    fn test_ids_strips_dx_doi_url() {
        let xml = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/"
                             xmlns:dc="http://purl.org/dc/elements/1.1/">
            <dc:identifier> http://dx.doi.org/10.1234/abc </dc:identifier>
        </record>"#;
        let doc = Document::parse(xml).unwrap();
        let ids = ids(doc.root_element(), "x");
        assert_eq!(ids.doi, "10.1234/abc");
    }

    #[test]
    fn test_properties_descriptive_then_protocol_namespace() {
        let doc = parse();
        let list = vec![
            "date".to_string(),
            "language".to_string(),
            "setSpec".to_string(),
        ];
        let props = properties(doc.root_element(), &list);

        assert_eq!(props["date"], vec!["2014-09-01"]);
        assert_eq!(props["language"], vec!["en"]);
        // setSpec only exists in the protocol namespace, unstripped here.
        assert_eq!(props["setSpec"], vec!["publication:biology", "theses"]);
    }

    #[test]
    fn test_properties_missing_name_yields_empty_vec() {
        let doc = parse();
        let props = properties(doc.root_element(), &["relation".to_string()]);
        assert_eq!(props["relation"], Vec::<String>::new());
    }

    #[test]
    fn test_date_updated_bare_date() {
        let doc = parse();
        assert_eq!(
            date_updated(doc.root_element(), "x").unwrap(),
            "2014-09-29T00:00:00"
        );
    }

    #[test]
    fn test_date_updated_rfc3339() {
        let xml = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/">
            <header><datestamp>2014-09-29T12:30:00Z</datestamp></header>
        </record>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            date_updated(doc.root_element(), "x").unwrap(),
            "2014-09-29T12:30:00+00:00"
        );
    }

    #[test]
    fn test_date_updated_missing_is_error() {
        let xml = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/">
            <header><identifier>x</identifier></header>
        </record>"#;
        let doc = Document::parse(xml).unwrap();
        let err = date_updated(doc.root_element(), "x").unwrap_err();
        assert!(matches!(err, HarvestError::MissingElement { .. }));
    }

    #[test]
    fn test_date_updated_garbage_is_error() {
        let xml = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/">
            <header><datestamp>yesterday</datestamp></header>
        </record>"#;
        let doc = Document::parse(xml).unwrap();
        let err = date_updated(doc.root_element(), "x").unwrap_err();
        assert!(matches!(err, HarvestError::InvalidDatestamp { .. }));
    }
}
