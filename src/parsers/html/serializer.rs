use encoding_rs::Encoding;
use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever_rcdom::{RcDom, SerializableHandle};

/// Serializes the document back to bytes, transcoding to the document's
/// original encoding when one is given.
pub fn serialize_document(dom: &RcDom, document_encoding: &str) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");

    if !document_encoding.is_empty() {
        if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
            let s: &str = &String::from_utf8_lossy(&buf);
            let (data, _, _) = encoding.encode(s);
            buf = data.to_vec();
        }
    }

    buf
}
