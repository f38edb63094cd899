//! Tree to XML serializer

use crate::config::Config;
use crate::node::Node;
use crate::scalar::Scalar;
use crate::xml::escape::{escape_attribute, escape_text};

/// Attribute keys rendered as real XML attributes.
///
/// Any other key in a node's attribute map is written as a simple child
/// element (`<key>value</key>`) ahead of the node's own children.
pub const XML_ATTRIBUTES: &[&str] = &[
    "part",
    "type",
    "status",
    "sequence",
    "source",
    "id",
    "valid",
    "preferredcontact",
    "time",
    "interest",
    "units",
    "width",
    "height",
    "alttext",
    "limit",
    "currency",
    "delta",
    "relativeto",
    "line",
];

const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;
const ADF_INSTRUCTION: &str = r#"<?ADF version="1.0"?>"#;

pub fn is_xml_attribute(key: &str) -> bool {
    XML_ATTRIBUTES.contains(&key)
}

/// Serializes a root node as a complete ADF document.
///
/// The root renders as the `<adf>` element. The tree is written as is;
/// callers wanting schema guarantees validate first.
pub fn serialize(root: &Node, config: &Config) -> String {
    let mut writer = Writer::new(config);
    writer.line(0, XML_DECLARATION);
    writer.line(0, ADF_INSTRUCTION);
    writer.node(root, 0, config.is_pretty());
    tracing::debug!(
        elements = writer.elements,
        bytes = writer.output.len(),
        "serialized ADF document"
    );
    writer.output
}

struct Writer<'c> {
    config: &'c Config,
    output: String,
    elements: usize,
}

impl<'c> Writer<'c> {
    fn new(config: &'c Config) -> Self {
        Self {
            config,
            output: String::new(),
            elements: 0,
        }
    }

    fn indent(&mut self, depth: usize, pretty: bool) {
        if pretty {
            for _ in 0..depth * self.config.indent {
                self.output.push(' ');
            }
        }
    }

    fn newline(&mut self, pretty: bool) {
        if pretty {
            self.output.push('\n');
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        let pretty = self.config.is_pretty();
        self.indent(depth, pretty);
        self.output.push_str(text);
        self.newline(pretty);
    }

    fn node(&mut self, node: &Node, depth: usize, pretty: bool) {
        self.elements += 1;
        let name = node.element_name();

        self.indent(depth, pretty);
        self.output.push('<');
        self.output.push_str(name);
        for (key, value) in node.attributes() {
            if is_xml_attribute(key) {
                self.output.push(' ');
                self.output.push_str(key);
                self.output.push_str("=\"");
                self.output.push_str(&escape_attribute(&value.to_string()));
                self.output.push('"');
            }
        }

        let has_element_content = !node.children().is_empty()
            || node.attributes().keys().any(|key| !is_xml_attribute(key));

        match (node.value(), has_element_content) {
            (None, false) => {
                self.output.push_str("/>");
            }
            (Some(value), false) => {
                self.output.push('>');
                self.output.push_str(&escape_text(&value.to_string()));
                self.close(name);
            }
            (Some(value), true) => {
                // Mixed content is written inline so the text is not padded
                self.output.push('>');
                self.element_content(node, Some(value), depth, false);
                self.close(name);
            }
            (None, true) => {
                self.output.push('>');
                self.newline(pretty);
                self.element_content(node, None, depth + 1, pretty);
                self.indent(depth, pretty);
                self.close(name);
            }
        }
        self.newline(pretty);
    }

    fn element_content(&mut self, node: &Node, text: Option<&Scalar>, depth: usize, pretty: bool) {
        for (key, value) in node.attributes() {
            if !is_xml_attribute(key) {
                self.elements += 1;
                self.indent(depth, pretty);
                self.output.push('<');
                self.output.push_str(key);
                self.output.push('>');
                self.output.push_str(&escape_text(&value.to_string()));
                self.close(key);
                self.newline(pretty);
            }
        }
        if let Some(text) = text {
            self.output.push_str(&escape_text(&text.to_string()));
        }
        for child in node.children() {
            self.node(child, depth, pretty);
        }
    }

    fn close(&mut self, name: &str) {
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push('>');
    }
}
