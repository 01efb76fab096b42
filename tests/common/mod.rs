// Shared helpers for the integration tests.
#![allow(dead_code)]

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use serde_json::{json, Value};

use dwibahasa::i18n::{Localizer, TranslationRegistry};
use dwibahasa::parsers::html::get_node_attr;

/// Parses an HTML string into a DOM.
pub fn parse_page(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap()
}

/// Registry without external persistence.
pub fn memory_registry() -> TranslationRegistry {
    TranslationRegistry::with_memory_store()
}

/// Parses a page and binds it to a registry preloaded with `fragments`.
pub fn localizer_for(html: &str, fragments: &[Value]) -> Localizer {
    let mut registry = memory_registry();
    for fragment in fragments {
        registry.register(fragment);
    }
    Localizer::new(parse_page(html), registry)
}

/// A page exercising every translation flag plus the switcher contract.
pub const SAMPLE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="id">
<head><meta charset="utf-8"><title>Institut</title></head>
<body>
  <nav id="language-switcher">
    <a href="#" data-lang="id" class="lang active">ID</a>
    <a href="#" data-lang="en" class="lang">EN</a>
  </nav>
  <a id="about-link" href="/about" data-i18n="nav.about">Tentang Kami</a>
  <h1 id="hero-title" data-i18n="hero.title">Selamat Datang</h1>
  <input id="name-field" type="text" data-i18n-attr="form.name" data-i18n-attr-name="placeholder" placeholder="Nama">
  <p id="footer-note" data-i18n-html="footer.note">Catatan</p>
  <span id="alumni-counter" data-i18n-counter="stats.alumni" data-counter-prefix="+" data-counter-target="1234567">1,234,567</span>
  <p id="untranslated" data-i18n="missing.key">Tetap</p>
</body>
</html>"##;

/// Dictionary fragments matching [`SAMPLE_PAGE`], split the way page
/// modules would register them.
pub fn sample_fragments() -> Vec<Value> {
    vec![
        json!({"nav": {"about": {"id": "Tentang Kami", "en": "About Us"}}}),
        json!({"hero": {"title": {"id": "Selamat Datang", "en": "Welcome"}}}),
        json!({"form": {"name": {"id": "Nama Anda", "en": "Your name"}}}),
        json!({"footer": {"note": {
            "id": "Catatan <strong>penting</strong>",
            "en": "An <strong>important</strong> note"
        }}}),
        json!({"stats": {"alumni": {"id": " Juta", "en": " Million"}}}),
    ]
}

/// Finds the first element whose attribute `name` equals `value`.
pub fn find_by_attr(node: &Handle, name: &str, value: &str) -> Option<Handle> {
    if let NodeData::Element { .. } = node.data {
        if get_node_attr(node, name).as_deref() == Some(value) {
            return Some(node.clone());
        }
    }

    for child in node.children.borrow().iter() {
        if let Some(found) = find_by_attr(child, name, value) {
            return Some(found);
        }
    }

    None
}
