//! Re-serialization of a parsed subtree into a self-contained XML snippet.
//!
//! `roxmltree` is read-only, so raw record payloads are rebuilt by walking
//! the node. Namespace declarations that are in scope but not yet emitted
//! are re-declared on the element that needs them, which keeps the snippet
//! parseable on its own even when the provider declared its namespaces on
//! the response envelope.

use roxmltree::Node;

/// Serialize an element subtree to a self-contained XML string.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use oai_harvester::xml::serialize_subtree;
///
/// let doc = Document::parse(r#"<env xmlns="urn:a"><rec>x</rec></env>"#).unwrap();
/// let rec = doc.root_element().first_element_child().unwrap();
/// let snippet = serialize_subtree(rec);
/// assert_eq!(snippet, r#"<rec xmlns="urn:a">x</rec>"#);
/// assert!(Document::parse(&snippet).is_ok());
/// ```
#[must_use]
pub fn serialize_subtree(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    write_element(node, &mut out, &[]);
    out
}

fn write_element(node: Node<'_, '_>, out: &mut String, declared: &[(Option<String>, String)]) {
    let name = qualified_name(node);
    out.push('<');
    out.push_str(&name);

    // Re-declare in-scope namespaces the emitted ancestors have not covered.
    let mut scope: Vec<(Option<String>, String)> = declared.to_vec();
    for ns in node.namespaces() {
        let pair = (ns.name().map(str::to_string), ns.uri().to_string());
        if scope.contains(&pair) {
            continue;
        }
        match &pair.0 {
            Some(prefix) => {
                out.push_str(" xmlns:");
                out.push_str(prefix);
            }
            None => out.push_str(" xmlns"),
        }
        out.push_str("=\"");
        out.push_str(&escape_attr(&pair.1));
        out.push('"');
        scope.push(pair);
    }

    for attr in node.attributes() {
        out.push(' ');
        out.push_str(attr.name());
        out.push_str("=\"");
        out.push_str(&escape_attr(attr.value()));
        out.push('"');
    }

    let mut closed_open_tag = false;
    for child in node.children() {
        if !child.is_element() && !child.is_text() {
            continue;
        }
        if !closed_open_tag {
            out.push('>');
            closed_open_tag = true;
        }
        if child.is_element() {
            write_element(child, out, &scope);
        } else if let Some(text) = child.text() {
            out.push_str(&escape_text(text));
        }
    }

    if closed_open_tag {
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
    } else {
        out.push_str("/>");
    }
}

/// Tag name with the prefix the source document bound to its namespace.
fn qualified_name(node: Node<'_, '_>) -> String {
    let local = node.tag_name().name();
    let Some(uri) = node.tag_name().namespace() else {
        return local.to_string();
    };
    for ns in node.namespaces() {
        if ns.uri() == uri {
            return match ns.name() {
                Some(prefix) => format!("{prefix}:{local}"),
                None => local.to_string(),
            };
        }
    }
    local.to_string()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
