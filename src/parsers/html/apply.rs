//! Applies resolved translations to flagged DOM elements.
//!
//! Page templates mark elements with `data-i18n*` attributes; each flag
//! variant is scanned independently, and any flag whose key resolves to an
//! empty string is skipped so the element keeps its pre-existing content
//! instead of being cleared.

use markup5ever_rcdom::{Handle, NodeData};

use crate::i18n::{Language, TranslationRegistry};

use super::dom::{
    find_element_by_id, get_child_node_by_name, get_node_attr, get_node_text, set_node_attr,
    set_node_markup, set_node_text,
};

/// Attribute flags consumed by [`apply_translations`].
pub mod flags {
    /// Plain text: the resolved string replaces the element's text content.
    pub const TEXT: &str = "data-i18n";
    /// Attribute target: the resolved string is written to the attribute
    /// named by [`ATTR_NAME`] instead of the text content.
    pub const ATTR: &str = "data-i18n-attr";
    /// Companion to [`ATTR`]: names the attribute to set.
    pub const ATTR_NAME: &str = "data-i18n-attr-name";
    /// Raw markup: the resolved string is trusted HTML, not escaped.
    /// Fragments registered under such keys must be safe markup.
    pub const HTML: &str = "data-i18n-html";
    /// Counter suffix: the resolved string is stored for the
    /// counter-animation component.
    pub const COUNTER: &str = "data-i18n-counter";
    /// Companion data attributes on counter elements.
    pub const COUNTER_PREFIX: &str = "data-counter-prefix";
    pub const COUNTER_TARGET: &str = "data-counter-target";
    pub const COUNTER_SUFFIX: &str = "data-counter-suffix";
}

/// Container holding the language-switch controls.
pub const SWITCHER_CONTAINER_ID: &str = "language-switcher";
/// Marker attribute on switch controls, carrying the language code.
pub const SWITCH_LANG_ATTR: &str = "data-lang";

const ACTIVE_CLASS: &str = "active";

/// Re-applies resolved text to every flagged element under `root`.
///
/// Flagged elements are snapshotted per pass before any mutation, so
/// markup inserted by one pass is not rescanned by the same pass.
pub fn apply_translations(root: &Handle, registry: &TranslationRegistry) {
    for node in collect_flagged(root, flags::TEXT) {
        if let Some(resolved) = resolve_flag(&node, flags::TEXT, registry) {
            set_node_text(&node, &resolved);
        }
    }

    for node in collect_flagged(root, flags::ATTR) {
        let Some(resolved) = resolve_flag(&node, flags::ATTR, registry) else {
            continue;
        };
        let Some(target) = get_node_attr(&node, flags::ATTR_NAME) else {
            tracing::warn!("element flagged {} lacks {}", flags::ATTR, flags::ATTR_NAME);
            continue;
        };
        set_node_attr(&node, &target, Some(resolved));
    }

    for node in collect_flagged(root, flags::HTML) {
        if let Some(resolved) = resolve_flag(&node, flags::HTML, registry) {
            set_node_markup(&node, &resolved);
        }
    }

    for node in collect_flagged(root, flags::COUNTER) {
        if let Some(resolved) = resolve_flag(&node, flags::COUNTER, registry) {
            apply_counter(&node, &resolved);
        }
    }
}

/// Marks the switch control matching the active language inside the
/// `#language-switcher` container, unmarking the rest.
pub fn sync_language_switcher(root: &Handle, active: Language) {
    let Some(container) = find_element_by_id(root, SWITCHER_CONTAINER_ID) else {
        return;
    };

    for node in collect_flagged(&container, SWITCH_LANG_ATTR) {
        let code = get_node_attr(&node, SWITCH_LANG_ATTR).unwrap_or_default();
        set_class(&node, ACTIVE_CLASS, Language::parse(&code) == Some(active));
    }
}

/// Sets the `lang` attribute on the document's `<html>` element.
pub fn set_document_language(root: &Handle, language: Language) {
    if let Some(html) = get_child_node_by_name(root, "html") {
        set_node_attr(&html, "lang", Some(language.code().to_string()));
    }
}

fn resolve_flag(node: &Handle, flag: &str, registry: &TranslationRegistry) -> Option<String> {
    let key_path = get_node_attr(node, flag)?;
    let resolved = registry.translate(&key_path);
    if resolved.is_empty() {
        // Lookup failure keeps the element's existing content.
        return None;
    }
    Some(resolved)
}

fn apply_counter(node: &Handle, suffix: &str) {
    set_node_attr(node, flags::COUNTER_SUFFIX, Some(suffix.to_string()));

    // Animation-finished heuristic carried over from the page scripts: a
    // displayed value without any '0' digit is taken as final. Final
    // values that legitimately contain a zero are misread as still
    // animating and keep their stale suffix until the counter component
    // picks up the data attribute.
    let displayed = get_node_text(node);
    if !displayed.contains('0') {
        let prefix = get_node_attr(node, flags::COUNTER_PREFIX).unwrap_or_default();
        let target = get_node_attr(node, flags::COUNTER_TARGET).unwrap_or_default();
        set_node_text(node, &format!("{}{}{}", prefix, target, suffix));
    }
}

fn collect_flagged(root: &Handle, flag: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    walk_flagged(root, flag, &mut found);
    found
}

fn walk_flagged(node: &Handle, flag: &str, found: &mut Vec<Handle>) {
    if let NodeData::Element { .. } = node.data {
        if get_node_attr(node, flag).is_some() {
            found.push(node.clone());
        }
    }

    for child in node.children.borrow().iter() {
        walk_flagged(child, flag, found);
    }
}

fn set_class(node: &Handle, class: &str, enabled: bool) {
    let current = get_node_attr(node, "class").unwrap_or_default();
    let mut classes: Vec<&str> = current
        .split_whitespace()
        .filter(|existing| *existing != class)
        .collect();
    if enabled {
        classes.push(class);
    }
    set_node_attr(node, "class", Some(classes.join(" ")));
}
