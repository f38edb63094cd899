//! `<contact>` and its name, phone, email and address children

use crate::codes::is_country_code;
use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::scalar::Scalar;
use crate::schema::{Variant, CONTACT_FLAG};
use crate::validate::Rule;

const MAX_STREETS: usize = 5;
/// Accepted `line` values, matched on the rendered form
const STREET_LINES: &[&str] = &["1", "2", "3", "4", "5"];
const STREET_LINE_MIN: i64 = 1;
const STREET_LINE_MAX: i64 = 5;

pub(crate) const CONTACT_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "primarycontact",
        allowed: CONTACT_FLAG,
    },
    Rule::Presence { element: "name" },
    Rule::Check(check_reachable),
];

pub(crate) const NAME_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "part",
        allowed: &["first", "middle", "suffix", "last", "full"],
    },
    Rule::Inclusion {
        attribute: "type",
        allowed: &["individual", "business"],
    },
];

pub(crate) const PHONE_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "type",
        allowed: &["voice", "fax", "cellphone", "pager"],
    },
    Rule::Inclusion {
        attribute: "time",
        allowed: &["morning", "afternoon", "evening", "nopreference", "day"],
    },
    Rule::Inclusion {
        attribute: "preferredcontact",
        allowed: CONTACT_FLAG,
    },
];

pub(crate) const EMAIL_RULES: &[Rule] = &[Rule::Inclusion {
    attribute: "preferredcontact",
    allowed: CONTACT_FLAG,
}];

pub(crate) const ADDRESS_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "type",
        allowed: &["work", "home", "delivery"],
    },
    Rule::Check(check_streets),
    Rule::Check(check_country),
];

fn check_reachable(node: &Node) -> Result<()> {
    if node.has_child("phone") || node.has_child("email") {
        Ok(())
    } else {
        Err(Error::constraint(
            "contact",
            "Contact must have at least one Phone or Email",
        ))
    }
}

fn check_streets(node: &Node) -> Result<()> {
    let streets = node.children_named("street").count();
    if streets == 0 {
        return Err(Error::constraint(
            "address",
            "Address must have at least one street line",
        ));
    }
    if streets > MAX_STREETS {
        return Err(Error::constraint(
            "address",
            "Address can have at most 5 street lines",
        ));
    }

    for street in node.children_named("street") {
        let Some(line) = street.attribute("line") else {
            continue;
        };
        let line = line.to_string();
        if !STREET_LINES.contains(&line.as_str()) {
            return Err(Error::new(ErrorKind::OutOfRange {
                field: "line".to_owned(),
                value: line,
                min: STREET_LINE_MIN,
                max: STREET_LINE_MAX,
            }));
        }
    }
    Ok(())
}

fn check_country(node: &Node) -> Result<()> {
    for country in node.children_named("country").filter_map(Node::value) {
        let country = country.to_string();
        if !is_country_code(&country) {
            return Err(Error::new(ErrorKind::InvalidCountry { value: country }));
        }
    }
    Ok(())
}

schema_view!(
    /// Builder view over `<contact>`
    Contact
);

impl Contact<'_> {
    attribute_setters! {
        /// `1` marks the primary contact, `0` a secondary one
        primary_contact => "primarycontact",
    }

    /// Appends a `<name>`
    pub fn name(&mut self, value: impl Into<Scalar>) -> Name<'_> {
        let node = Node::new(Variant::Name).with_value(value);
        Name::new(self.node.add_child(node))
    }

    /// Appends an `<email>`
    pub fn email(&mut self, value: impl Into<Scalar>) -> Email<'_> {
        let node = Node::new(Variant::Email).with_value(value);
        Email::new(self.node.add_child(node))
    }

    /// Appends a `<phone>`
    pub fn phone(&mut self, value: impl Into<Scalar>) -> Phone<'_> {
        let node = Node::new(Variant::Phone).with_value(value);
        Phone::new(self.node.add_child(node))
    }

    /// Appends an `<address>` built by `block`
    pub fn address<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Address<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Address);
        block(&mut Address::new(&mut node))?;
        self.node.add_child(node);
        Ok(self)
    }
}

schema_view!(Name);

impl Name<'_> {
    attribute_setters! {
        /// `first`, `middle`, `suffix`, `last` or `full`
        part => "part",
        /// `individual` or `business`
        kind => "type",
    }
}

schema_view!(Phone);

impl Phone<'_> {
    attribute_setters! {
        /// `voice`, `fax`, `cellphone` or `pager`
        kind => "type",
        /// Best time to call
        time => "time",
        preferred_contact => "preferredcontact",
    }
}

schema_view!(Email);

impl Email<'_> {
    attribute_setters! {
        preferred_contact => "preferredcontact",
    }
}

schema_view!(
    /// Builder view over `<address>`
    Address
);

impl Address<'_> {
    attribute_setters! {
        /// `work`, `home` or `delivery`
        kind => "type",
    }

    leaf_setters! {
        apartment => "apartment",
        city => "city",
        region_code => "regioncode",
        postal_code => "postalcode",
        /// ISO 3166 alpha-2 code
        country => "country",
    }

    /// Appends a `<street>`; an address holds one to five
    pub fn street(&mut self, value: impl Into<Scalar>) -> Street<'_> {
        Street::new(self.node.add_child(Node::leaf("street", value)))
    }
}

schema_view!(
    /// One `<street>` line of an address
    Street
);

impl Street<'_> {
    attribute_setters! {
        /// Line number, `1` to `5`
        line => "line",
    }
}
