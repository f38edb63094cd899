//! `<vendor>`: the dealership receiving the lead

use crate::error::Result;
use crate::node::Node;
use crate::scalar::{Attributes, Scalar};
use crate::schema::id::id_node;
use crate::schema::{Contact, Variant};
use crate::validate::Rule;

pub(crate) const RULES: &[Rule] = &[
    Rule::Presence {
        element: "vendorname",
    },
    Rule::Presence { element: "contact" },
];

schema_view!(
    /// Builder view over `<vendor>`
    Vendor
);

impl Vendor<'_> {
    leaf_setters! {
        vendor_name => "vendorname",
        url => "url",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::validate::validate;

    #[test]
    fn test_vendor_presence_order() -> Result<()> {
        let mut node = Node::new(Variant::Vendor);
        let err = validate(&node, &Config::default()).err();
        assert_eq!(
            err.map(|e| e.message().to_owned()),
            Some("Missing required Element: vendorname in vendor".to_owned())
        );

        Vendor::new(&mut node).vendor_name("Dealer Inc");
        let err = validate(&node, &Config::default()).err();
        assert_eq!(
            err.map(|e| e.message().to_owned()),
            Some("Missing required Element: contact in vendor".to_owned())
        );

        Vendor::new(&mut node).contact(|c| {
            c.name("Sales Desk");
            c.email("sales@dealer.example");
            Ok(())
        })?;
        validate(&node, &Config::default())
    }

    #[test]
    fn test_vendor_contact_is_singular() -> Result<()> {
        let mut node = Node::new(Variant::Vendor);
        let mut vendor = Vendor::new(&mut node);
        for phone in ["555-0001", "555-0002"] {
            vendor.contact(|c| {
                c.name("Desk");
                c.phone(phone);
                Ok(())
            })?;
        }
        assert_eq!(node.children_named("contact").count(), 1);
        Ok(())
    }
}
