//! DOM Operations Adapter
//!
//! The tree access layer used by every extraction pass. It wraps the
//! `dom_query` arena so the rest of the crate speaks in terms of tags,
//! text lengths and node moves rather than raw arena calls.
//!
//! Every mutation here is a single arena operation (or a sequence that
//! detaches before re-attaching), so parent, sibling and child links stay
//! consistent between calls.

use std::collections::HashSet;

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into an arena document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Lowercase tag name, `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether `node` is an element with the given (lowercase) tag.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Whether `node` is an element whose tag is one of `tags`.
#[must_use]
pub fn has_tag(node: &NodeRef, tags: &[&str]) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| tags.iter().any(|t| name.eq_ignore_ascii_case(t)))
}

// === Attribute Operations ===

/// Get any attribute value (first match wins).
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Check if attribute exists, whatever its value.
#[inline]
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.has_attr(name)
}

/// `class` followed by `id`, the string the candidate patterns look at.
#[must_use]
pub fn class_and_id(node: &NodeRef) -> String {
    let mut out = node.attr("class").map(|v| v.to_string()).unwrap_or_default();
    if let Some(id) = node.attr("id") {
        out.push_str(&id);
    }
    out
}

/// All attributes as key-value pairs, in source order.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

// === Text Content ===

/// Text of the node and all its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Length of [`text_content`] in Unicode codepoints.
#[must_use]
pub fn text_length(node: &NodeRef) -> usize {
    node.text().chars().count()
}

/// Whether the node's text is empty or whitespace only.
#[must_use]
pub fn is_blank(node: &NodeRef) -> bool {
    node.text().trim().is_empty()
}

/// A text node holding nothing but whitespace.
#[must_use]
pub fn is_whitespace_text(node: &NodeRef) -> bool {
    node.is_text() && is_blank(node)
}

/// Serialized markup of the node itself and its subtree.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

// === Tree Navigation ===

/// Descendant elements of `root` in document order, `root` excluded.
#[must_use]
pub fn descendant_elements<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    root.descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Descendant elements whose tag is one of `tags`, in document order.
#[must_use]
pub fn elements_by_tag<'a>(root: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    root.descendants()
        .into_iter()
        .filter(|n| has_tag(n, tags))
        .collect()
}

/// Number of descendant elements whose tag is one of `tags`.
#[must_use]
pub fn count_elements(root: &NodeRef, tags: &[&str]) -> usize {
    root.descendants().iter().filter(|n| has_tag(n, tags)).count()
}

/// First descendant element with the given tag.
#[must_use]
pub fn find_first<'a>(root: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    root.descendants().into_iter().find(|n| is_tag(n, tag))
}

/// Child elements, skipping text and comment nodes.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Parent if it is an element (not the document node).
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Whether `node` is still reachable from `root` through parent links.
#[must_use]
pub fn is_attached(node: &NodeRef, root: NodeId) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.id == root {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Visit `elements` in order, skipping those inside a subtree that an
/// earlier call detached.
///
/// `elements` must be in document order, as the collectors above return
/// them. `visit` returns `true` when it detached the node it was given.
pub fn visit_unremoved<'a>(elements: &[NodeRef<'a>], mut visit: impl FnMut(&NodeRef<'a>) -> bool) {
    let mut i = 0;
    while i < elements.len() {
        let node = elements[i];
        i += 1;
        if !visit(&node) {
            continue;
        }
        // the detached subtree is a contiguous run right after `node`
        let inside: HashSet<NodeId> = node.descendants().iter().map(|n| n.id).collect();
        while i < elements.len() && inside.contains(&elements[i].id) {
            i += 1;
        }
    }
}

// === Tree Manipulation ===

/// Detach `node` (and its subtree) from its parent.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Rename an element in place, keeping attributes and children.
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Create a detached element in the same tree as `anchor`.
#[must_use]
pub fn create_element<'a>(anchor: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    anchor.tree.new_element(tag)
}

/// Move `child` to the end of `parent`'s children.
pub fn append_child(parent: &NodeRef, child: &NodeRef) {
    child.remove_from_parent();
    parent.append_child(&child.id);
}

/// Put `replacement` where `old` is and detach `old`.
pub fn replace_node(old: &NodeRef, replacement: &NodeRef) {
    if replacement.id == old.id {
        return;
    }
    replacement.remove_from_parent();
    old.insert_before(&replacement.id);
    old.remove_from_parent();
}

/// Wrap `node` in a new `tag` element placed where `node` was.
pub fn wrap<'a>(node: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    let wrapper = create_element(node, tag);
    node.insert_before(&wrapper.id);
    append_child(&wrapper, node);
    wrapper
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Document, tag: &str) -> NodeRef<'a> {
        find_first(&doc.root(), tag).unwrap()
    }

    #[test]
    fn test_tag_helpers() {
        let doc = parse(r#"<article><SECTION>content</SECTION></article>"#);
        let section = first(&doc, "section");

        assert_eq!(tag_name(&section), Some("section".to_string()));
        assert!(is_tag(&section, "section"));
        assert!(has_tag(&section, &["p", "section"]));
        assert!(!has_tag(&section, &["p", "div"]));
    }

    #[test]
    fn test_class_and_id_concatenates() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = first(&doc, "div");

        assert_eq!(class_and_id(&div), "containermain");
        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(get_attribute(&div, "data-x"), None);
    }

    #[test]
    fn test_get_all_attributes() {
        let doc = parse(r##"<a href="http://example.com" class="link" title="Example">Link</a>"##);
        let a = first(&doc, "a");

        let attrs = get_all_attributes(&a);
        assert_eq!(attrs.len(), 3);
        assert!(attrs.iter().any(|(k, v)| k == "href" && v == "http://example.com"));
        assert!(attrs.iter().any(|(k, v)| k == "title" && v == "Example"));
    }

    #[test]
    fn test_text_length_counts_codepoints() {
        let doc = parse("<p>héllo wörld</p>");
        let p = first(&doc, "p");

        assert_eq!(text_length(&p), 11);
        assert!(!is_blank(&p));
    }

    #[test]
    fn test_elements_by_tag_in_document_order() {
        let doc = parse(r#"<div><p id="a">1</p><td>x</td><div><p id="b">2</p></div></div>"#);
        let body = first(&doc, "body");

        let found = elements_by_tag(&body, &["p"]);
        let ids: Vec<_> = found.iter().filter_map(|n| get_attribute(n, "id")).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(count_elements(&body, &["p", "div"]), 4);
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let doc = parse(r#"<div><span class="ad"><b>ad</b></span><p>content</p></div>"#);
        let span = first(&doc, "span");
        let b = first(&doc, "b");
        let root = doc.root().id;

        remove(&span);

        assert!(!is_attached(&span, root));
        assert!(!is_attached(&b, root));
        assert!(find_first(&doc.root(), "span").is_none());
        assert!(find_first(&doc.root(), "p").is_some());
    }

    #[test]
    fn test_visit_unremoved_skips_detached_subtrees() {
        let doc = parse(
            r#"<div id="a"><div id="b"><span id="c">x</span></div></div><div id="d"><b id="e">y</b></div>"#,
        );
        let body = first(&doc, "body");
        let elements = descendant_elements(&body);

        let mut seen = Vec::new();
        visit_unremoved(&elements, |node| {
            let id = get_attribute(node, "id").unwrap_or_default();
            seen.push(id.clone());
            if id == "a" {
                remove(node);
                return true;
            }
            false
        });

        assert_eq!(seen, vec!["a", "d", "e"]);
        assert!(find_first(&doc.root(), "span").is_none());
        assert!(find_first(&doc.root(), "b").is_some());
    }

    #[test]
    fn test_visit_unremoved_on_deep_nesting() {
        let depth = 500;
        let html = format!("{}text{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let doc = parse(&html);
        let body = first(&doc, "body");
        let elements = descendant_elements(&body);

        let mut visits = 0;
        visit_unremoved(&elements, |node| {
            visits += 1;
            remove(node);
            true
        });

        assert_eq!(visits, 1);
        assert!(find_first(&doc.root(), "span").is_none());
    }

    #[test]
    fn test_replace_node_keeps_position() {
        let doc = parse(r#"<main><i>before</i><div id="old"><p id="inner">text</p></div><i>after</i></main>"#);
        let div = first(&doc, "div");
        let p = first(&doc, "p");

        replace_node(&div, &p);

        let main = first(&doc, "main");
        let tags: Vec<_> = element_children(&main).iter().filter_map(tag_name).collect();
        assert_eq!(tags, vec!["i", "p", "i"]);
        assert_eq!(p.parent().map(|n| n.id), Some(main.id));
        assert!(!is_attached(&div, doc.root().id));
    }

    #[test]
    fn test_wrap_moves_node_into_wrapper() {
        let doc = parse(r#"<div>loose text<p>para</p></div>"#);
        let div = first(&doc, "div");
        let text = div.first_child().unwrap();

        let wrapper = wrap(&text, "p");

        assert_eq!(wrapper.parent().map(|n| n.id), Some(div.id));
        assert_eq!(text.parent().map(|n| n.id), Some(wrapper.id));
        assert_eq!(element_children(&div).len(), 2);
        assert_eq!(&*text_content(&wrapper), "loose text");
    }

    #[test]
    fn test_rename_element() {
        let doc = parse(r#"<div id="test">content</div>"#);
        let div = first(&doc, "div");

        rename(&div, "p");

        let p = first(&doc, "p");
        assert_eq!(get_attribute(&p, "id"), Some("test".to_string()));
        assert!(find_first(&doc.root(), "div").is_none());
    }

    #[test]
    fn test_whitespace_text_detection() {
        let doc = parse("<div>   <br>  text </div>");
        let div = first(&doc, "div");
        let children = div.children();

        assert!(is_whitespace_text(&children[0]));
        assert!(!is_whitespace_text(&children[1]));
        assert!(!is_whitespace_text(&children[2]));
    }

    #[test]
    fn test_parent_element_stops_at_document() {
        let doc = parse("<p>x</p>");
        let html = first(&doc, "html");
        let body = first(&doc, "body");

        assert!(parent_element(&html).is_none());
        assert_eq!(parent_element(&body).map(|n| n.id), Some(html.id));
    }
}
