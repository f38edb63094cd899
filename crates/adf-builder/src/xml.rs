//! XML output: escaping and the tree serializer

pub mod escape;
pub mod writer;

pub use escape::{escape_attribute, escape_text};
pub use writer::{is_xml_attribute, serialize, XML_ATTRIBUTES};
