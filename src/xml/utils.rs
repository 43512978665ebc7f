//! Navigation helpers for namespace-qualified OAI-PMH and Dublin Core trees.

use roxmltree::Node;

/// Find all child elements with the given namespace URI and local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use oai_harvester::xml::children_ns;
///
/// let xml = r#"<r xmlns="urn:a"><item>1</item><item>2</item></r>"#;
/// let doc = Document::parse(xml).unwrap();
/// let items: Vec<_> = children_ns(doc.root_element(), "urn:a", "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn children_ns<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    ns: &'a str,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && has_expanded_name(*child, ns, tag))
}

/// Find all descendant elements with the given namespace URI and local name,
/// in document order.
pub fn descendants_ns<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    ns: &'a str,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .filter(move |n| n.is_element() && has_expanded_name(*n, ns, tag))
}

/// Trimmed text of the first matching descendant, or `None`.
pub fn first_text_ns(node: Node<'_, '_>, ns: &str, tag: &str) -> Option<String> {
    descendants_ns(node, ns, tag)
        .find_map(|n| n.text())
        .map(|s| s.trim().to_string())
}

/// Trimmed non-empty texts of all matching descendants, in document order.
pub fn texts_ns(node: Node<'_, '_>, ns: &str, tag: &str) -> Vec<String> {
    descendants_ns(node, ns, tag)
        .filter_map(|n| n.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Get the text content of a node, trimmed.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn has_expanded_name(node: Node<'_, '_>, ns: &str, tag: &str) -> bool {
    node.tag_name().name() == tag && node.tag_name().namespace() == Some(ns)
}
