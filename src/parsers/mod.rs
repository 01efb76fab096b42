//! Document parsers and writers.
//!
//! - `html` - HTML document parsing, DOM operations, translation
//!   application, serialization

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    apply_translations, find_element_by_id, get_node_attr, get_node_name, get_node_text,
    html_to_dom, serialize_document, set_document_language, set_node_attr, set_node_markup,
    set_node_text, sync_language_switcher,
};
