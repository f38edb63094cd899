//! `<id>` elements shared by prospect, vehicle, customer, vendor and provider

use crate::error::{Error, Result};
use crate::node::Node;
use crate::scalar::{Attributes, Scalar};
use crate::schema::Variant;

/// Builds an `<id>` node; `source` is mandatory, `sequence` is written first when given
pub(crate) fn id_node(value: impl Into<Scalar>, mut attributes: Attributes) -> Result<Node> {
    let Some(source) = attributes.remove("source") else {
        return Err(Error::missing_argument("id", "source"));
    };

    let mut node = Node::new(Variant::Id).with_value(value);
    if let Some(sequence) = attributes.remove("sequence") {
        node.set("sequence", sequence);
    }
    node.set("source", source);
    Ok(node.with_attributes(attributes))
}
