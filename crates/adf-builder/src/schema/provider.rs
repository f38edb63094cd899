//! `<provider>`: the lead source that produced the document

use crate::error::Result;
use crate::node::Node;
use crate::scalar::{Attributes, Scalar};
use crate::schema::id::id_node;
use crate::schema::{Contact, Variant};
use crate::validate::Rule;

pub(crate) const RULES: &[Rule] = &[Rule::Presence { element: "name" }];

schema_view!(
    /// Builder view over `<provider>`
    Provider
);

impl Provider<'_> {
    leaf_setters! {
        name => "name",
        service => "service",
        url => "url",
        email => "email",
        phone => "phone",
    }

    /// Appends an `<id>`; `attributes` must contain `source`
    pub fn id(&mut self, value: impl Into<Scalar>, attributes: Attributes) -> Result<&mut Self> {
        self.node.add_child(id_node(value, attributes)?);
        Ok(self)
    }

    pub fn contact<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Contact<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Contact);
        block(&mut Contact::new(&mut node))?;
        self.node.replace_child(node);
        Ok(self)
    }
}
