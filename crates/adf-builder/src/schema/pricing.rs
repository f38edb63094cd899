//! Prices and financing terms

use crate::error::Result;
use crate::node::Node;
use crate::scalar::Scalar;
use crate::schema::{Variant, CURRENCY_RULE};
use crate::validate::{check_child_value, Rule};

const FINANCE_METHODS: &[&str] = &["cash", "finance", "lease"];

pub(crate) const PRICE_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "type",
        allowed: &[
            "quote",
            "offer",
            "msrp",
            "invoice",
            "call",
            "appraisal",
            "asking",
        ],
    },
    CURRENCY_RULE,
    Rule::Inclusion {
        attribute: "delta",
        allowed: &["absolute", "relative", "percentage"],
    },
    Rule::Inclusion {
        attribute: "relativeto",
        allowed: &["msrp", "invoice"],
    },
];

pub(crate) const FINANCE_RULES: &[Rule] = &[Rule::Check(check_method)];

pub(crate) const AMOUNT_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "type",
        allowed: &["downpayment", "monthly", "total"],
    },
    Rule::Inclusion {
        attribute: "limit",
        allowed: &["maximum", "minimum", "exact"],
    },
    CURRENCY_RULE,
];

pub(crate) const BALANCE_RULES: &[Rule] = &[
    Rule::Inclusion {
        attribute: "type",
        allowed: &["finance", "residual"],
    },
    CURRENCY_RULE,
];

fn check_method(node: &Node) -> Result<()> {
    check_child_value(node, "method", "finance method", FINANCE_METHODS)
}

schema_view!(
    /// `<price>` with its pricing attributes
    Price
);

impl Price<'_> {
    attribute_setters! {
        /// `quote`, `offer`, `msrp`, `invoice`, `call`, `appraisal` or `asking`
        kind => "type",
        /// ISO 4217 code, e.g. `USD`
        currency => "currency",
        /// `absolute`, `relative` or `percentage`
        delta => "delta",
        /// `msrp` or `invoice`
        relative_to => "relativeto",
        source => "source",
    }
}

schema_view!(
    /// Builder view over `<finance>`
    Finance
);

impl Finance<'_> {
    leaf_setters! {
        /// `cash`, `finance` or `lease`
        method => "method",
    }

    /// Appends an `<amount>` (starts as `type="total" limit="maximum"`)
    pub fn amount(&mut self, value: impl Into<Scalar>) -> Amount<'_> {
        let node = Node::new(Variant::Amount).with_value(value);
        Amount::new(self.node.add_child(node))
    }

    /// Appends a `<balance>` (starts as `type="finance"`)
    pub fn balance(&mut self, value: impl Into<Scalar>) -> Balance<'_> {
        let node = Node::new(Variant::Balance).with_value(value);
        Balance::new(self.node.add_child(node))
    }
}

schema_view!(Amount);

impl Amount<'_> {
    attribute_setters! {
        /// `downpayment`, `monthly` or `total`
        kind => "type",
        /// `maximum`, `minimum` or `exact`
        limit => "limit",
        currency => "currency",
    }
}

schema_view!(Balance);

impl Balance<'_> {
    attribute_setters! {
        /// `finance` or `residual`
        kind => "type",
        currency => "currency",
    }
}
