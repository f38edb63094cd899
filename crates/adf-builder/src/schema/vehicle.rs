//! `<vehicle>` and its attribute-carrying leaves

use crate::error::Result;
use crate::node::Node;
use crate::scalar::{Attributes, Scalar};
use crate::schema::id::id_node;
use crate::schema::{ColorCombination, Finance, Price, Variant, VehicleOption};
use crate::validate::{check_child_value, Rule};

const CONDITIONS: &[&str] = &["excellent", "good", "fair", "poor", "unknown"];

pub(crate) const VEHICLE_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "status",
        allowed: &["new", "used"],
    },
    Rule::Inclusion {
        attribute: "interest",
        allowed: &["buy", "lease", "sell", "trade-in", "test-drive"],
    },
    Rule::Presence { element: "year" },
    Rule::Presence { element: "make" },
    Rule::Presence { element: "model" },
    Rule::Check(check_condition),
];

pub(crate) const ODOMETER_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "status",
        allowed: &["unknown", "rolledover", "replaced", "original"],
    },
    Rule::Inclusion {
        attribute: "units",
        allowed: &["km", "mi"],
    },
];

fn check_condition(node: &Node) -> Result<()> {
    check_child_value(node, "condition", "condition", CONDITIONS)
}

schema_view!(
    /// Builder view over a `<vehicle>` node
    Vehicle
);

impl Vehicle<'_> {
    attribute_setters! {
        /// `new` or `used`
        status => "status",
        /// `buy`, `lease`, `sell`, `trade-in` or `test-drive`
        interest => "interest",
    }

    leaf_setters! {
        year => "year",
        make => "make",
        model => "model",
        vin => "vin",
        stock => "stock",
        trim => "trim",
        doors => "doors",
        body_style => "bodystyle",
        transmission => "transmission",
        price_comments => "pricecomments",
        comments => "comments",
        /// `excellent`, `good`, `fair`, `poor` or `unknown`
        condition => "condition",
    }

    /// Appends an `<id>`; `attributes` must contain `source`
    pub fn id(&mut self, value: impl Into<Scalar>, attributes: Attributes) -> Result<&mut Self> {
        self.node.add_child(id_node(value, attributes)?);
        Ok(self)
    }

    /// Sets `<odometer>` and returns it for its `status` and `units` attributes
    pub fn odometer(&mut self, value: impl Into<Scalar>) -> Odometer<'_> {
        let node = Node::new(Variant::Odometer).with_value(value);
        Odometer::new(self.node.replace_child(node))
    }

    /// Sets `<imagetag>` (an image URL)
    pub fn image_tag(&mut self, value: impl Into<Scalar>) -> ImageTag<'_> {
        let node = Node::new(Variant::ImageTag).with_value(value);
        ImageTag::new(self.node.replace_child(node))
    }

    /// Sets `<price>`; the price starts as `type="quote"`
    pub fn price(&mut self, value: impl Into<Scalar>) -> Price<'_> {
        let node = Node::new(Variant::Price).with_value(value);
        Price::new(self.node.replace_child(node))
    }

    pub fn finance<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Finance<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Finance);
        block(&mut Finance::new(&mut node))?;
        self.node.replace_child(node);
        Ok(self)
    }

    /// Appends an `<option>`
    pub fn option<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut VehicleOption<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::VehicleOption);
        block(&mut VehicleOption::new(&mut node))?;
        self.node.add_child(node);
        Ok(self)
    }

    /// Appends a `<colorcombination>`
    pub fn color_combination<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut ColorCombination<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::ColorCombination);
        block(&mut ColorCombination::new(&mut node))?;
        self.node.add_child(node);
        Ok(self)
    }
}

schema_view!(
    /// `<odometer>` with `status` and `units`
    Odometer
);

impl Odometer<'_> {
    attribute_setters! {
        /// `unknown`, `rolledover`, `replaced` or `original`
        status => "status",
        /// `km` or `mi`
        units => "units",
    }
}

schema_view!(ImageTag);

impl ImageTag<'_> {
    attribute_setters! {
        width => "width",
        height => "height",
        alt_text => "alttext",
    }
}
