//! `<prospect>`: one sales lead

use time::OffsetDateTime;

use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::scalar::{Attributes, Scalar};
use crate::schema::id::id_node;
use crate::schema::{Customer, Provider, Variant, Vehicle, Vendor};
use crate::validate::Rule;

pub(crate) const RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "status",
        allowed: &["new", "resend"],
    },
    Rule::Check(check_sections),
];

/// Required children, each with its own message, in checking order
const REQUIRED_SECTIONS: [(&str, &str); 4] = [
    ("requestdate", "Prospect must have a requestdate"),
    ("vehicle", "Prospect must have at least one vehicle"),
    ("customer", "Prospect must have a customer"),
    ("vendor", "Prospect must have a vendor"),
];

fn check_sections(node: &Node) -> Result<()> {
    for (element, message) in REQUIRED_SECTIONS {
        if !node.has_child(element) {
            return Err(Error::with_message(
                ErrorKind::MissingElement {
                    element: element.to_owned(),
                    parent: "prospect".to_owned(),
                },
                message,
            ));
        }
    }
    Ok(())
}

schema_view!(
    /// Builder view over a `<prospect>` node
    Prospect
);

impl Prospect<'_> {
    /// Sets the `status` attribute (`new` or `resend`)
    pub fn status(&mut self, value: impl Into<Scalar>) -> &mut Self {
        self.node.set("status", value);
        self
    }

    /// Appends an `<id>`; `attributes` must contain `source`
    pub fn id(&mut self, value: impl Into<Scalar>, attributes: Attributes) -> Result<&mut Self> {
        self.node.add_child(id_node(value, attributes)?);
        Ok(self)
    }

    /// Sets `<requestdate>`, replacing any previous one
    pub fn request_date(&mut self, value: impl Into<Scalar>) -> &mut Self {
        self.node.replace_child(Node::leaf("requestdate", value));
        self
    }

    /// Sets `<requestdate>` to the current UTC time
    pub fn request_date_now(&mut self) -> &mut Self {
        self.request_date(OffsetDateTime::now_utc())
    }

    /// Appends a `<vehicle>` built by `block`
    pub fn vehicle<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Vehicle<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Vehicle);
        block(&mut Vehicle::new(&mut node))?;
        self.node.add_child(node);
        Ok(self)
    }

    /// Sets the `<customer>` built by `block`
    pub fn customer<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Customer<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Customer);
        block(&mut Customer::new(&mut node))?;
        self.node.replace_child(node);
        Ok(self)
    }

    /// Sets the `<vendor>` built by `block`
    pub fn vendor<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Vendor<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Vendor);
        block(&mut Vendor::new(&mut node))?;
        self.node.replace_child(node);
        Ok(self)
    }

    /// Sets the `<provider>` built by `block`
    pub fn provider<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Provider<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Provider);
        block(&mut Provider::new(&mut node))?;
        self.node.replace_child(node);
        Ok(self)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node.children_of(Variant::Vehicle)
    }

    /// Typed mutable access to the vehicles, for editing after the fact
    pub fn vehicles_mut(&mut self) -> impl Iterator<Item = Vehicle<'_>> + '_ {
        self.node.children_of_mut(Variant::Vehicle).map(Vehicle::new)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node.children_of(Variant::Customer)
    }

    pub fn customers_mut(&mut self) -> impl Iterator<Item = Customer<'_>> + '_ {
        self.node
            .children_of_mut(Variant::Customer)
            .map(Customer::new)
    }
}
