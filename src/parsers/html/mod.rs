//! HTML parsing and processing.
//!
//! - `dom`: parsing and basic DOM operations
//! - `apply`: translation flags, switcher sync, document language
//! - `serializer`: serialization back to bytes

pub mod apply;
pub mod dom;
pub mod serializer;

// Re-export the public API
pub use apply::{
    apply_translations, flags, set_document_language, sync_language_switcher,
    SWITCHER_CONTAINER_ID, SWITCH_LANG_ATTR,
};
pub use dom::{
    find_element_by_id, get_child_node_by_name, get_node_attr, get_node_name, get_node_text,
    html_to_dom, set_node_attr, set_node_markup, set_node_text,
};
pub use serializer::serialize_document;
