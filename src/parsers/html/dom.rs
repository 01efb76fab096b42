use std::cell::RefCell;
use std::rc::Rc;

use encoding_rs::Encoding;
use html5ever::interface::QualName;
use html5ever::tendril::TendrilSink;
use html5ever::{namespace_url, ns, parse_document, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

/// Parses HTML bytes into a DOM.
pub fn html_to_dom(data: &[u8], document_encoding: String) -> RcDom {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// Returns the first child element with the given name.
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    let matching_children = children.iter().find(|child| match child.data {
        NodeData::Element { ref name, .. } => &*name.local == node_name,
        _ => false,
    });
    matching_children.cloned()
}

/// Returns a node's attribute value.
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// Returns a node's element name.
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Sets a node's attribute, removing it when the value is `None`.
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    use html5ever::interface::Attribute;
    use html5ever::tendril::format_tendril;

    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.clone() {
                    let _ = &attrs_mut[i].value.clear();
                    let _ = &attrs_mut[i].value.push_slice(attr_value.as_str());
                } else {
                    // Remove attr completely if attr_value is not defined
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            // Add new attribute (since originally the target node didn't have it)
            if let Some(attr_value) = attr_value.clone() {
                let name = LocalName::from(attr_name);

                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), name),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}

/// Collects the text content of a node and all of its descendants.
pub fn get_node_text(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Replaces a node's children with a single text node.
pub fn set_node_text(node: &Handle, text: &str) {
    let text_node = Node::new(NodeData::Text {
        contents: RefCell::new(text.to_string().into()),
    });
    text_node.parent.set(Some(Rc::downgrade(node)));

    let mut children = node.children.borrow_mut();
    children.clear();
    children.push(text_node);
}

/// Replaces a node's children with parsed markup. The markup is trusted
/// and inserted as-is, not escaped.
pub fn set_node_markup(node: &Handle, markup: &str) {
    let fragment = parse_markup_fragment(markup);

    let mut children = node.children.borrow_mut();
    children.clear();
    for child in fragment {
        child.parent.set(Some(Rc::downgrade(node)));
        children.push(child);
    }
}

fn parse_markup_fragment(markup: &str) -> Vec<Handle> {
    // The parser synthesizes html/head/body around the markup; body-level
    // content ends up as body children.
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut markup.as_bytes())
        .unwrap();

    let Some(html) = get_child_node_by_name(&dom.document, "html") else {
        return Vec::new();
    };
    let Some(body) = get_child_node_by_name(&html, "body") else {
        return Vec::new();
    };

    let nodes = body.children.borrow_mut().drain(..).collect();
    nodes
}

/// Finds the element with the given `id` attribute.
pub fn find_element_by_id(node: &Handle, id: &str) -> Option<Handle> {
    if let NodeData::Element { .. } = node.data {
        if get_node_attr(node, "id").as_deref() == Some(id) {
            return Some(node.clone());
        }
    }

    for child in node.children.borrow().iter() {
        if let Some(found) = find_element_by_id(child, id) {
            return Some(found);
        }
    }

    None
}
