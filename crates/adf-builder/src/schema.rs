//! ADF schema variants and their typed builders
//!
//! Every section of an ADF document is a [`Node`](crate::Node) tagged with a
//! [`Variant`]. The variant supplies the element name, default attributes
//! and the static rule table used by validation. The typed builder views
//! (`Prospect`, `Vehicle`, `Contact`, ...) wrap a `&mut Node` and expose one
//! method per allowed child or attribute; they dereference to `Node`, so
//! the open-extension methods (`child`, `child_with`, `nested`, `set`) stay
//! available for tags the schema does not name.

use crate::validate::Rule;

/// Declares a typed builder view over a `&mut Node`
macro_rules! schema_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<'a> {
            node: &'a mut Node,
        }

        impl<'a> $name<'a> {
            /// Wraps a node; the node's variant is not checked
            pub fn new(node: &'a mut Node) -> Self {
                Self { node }
            }
        }

        impl std::ops::Deref for $name<'_> {
            type Target = Node;

            fn deref(&self) -> &Node {
                self.node
            }
        }

        impl std::ops::DerefMut for $name<'_> {
            fn deref_mut(&mut self) -> &mut Node {
                self.node
            }
        }
    };
}

/// Singular text children: each call replaces the previous element
macro_rules! leaf_setters {
    ($($(#[$meta:meta])* $method:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self, value: impl Into<Scalar>) -> &mut Self {
                self.node.replace_child(Node::leaf($tag, value));
                self
            }
        )*
    };
}

/// Attribute setters, overwriting in place
macro_rules! attribute_setters {
    ($($(#[$meta:meta])* $method:ident => $key:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self, value: impl Into<Scalar>) -> &mut Self {
                self.node.set($key, value);
                self
            }
        )*
    };
}

pub mod contact;
pub mod customer;
pub mod id;
pub mod options;
pub mod pricing;
pub mod prospect;
pub mod provider;
pub mod vehicle;
pub mod vendor;

pub use contact::{Address, Contact, Email, Name, Phone, Street};
pub use customer::{Customer, Timeframe};
pub use options::{ColorCombination, VehicleOption};
pub use pricing::{Amount, Balance, Finance, Price};
pub use prospect::Prospect;
pub use provider::Provider;
pub use vehicle::{ImageTag, Odometer, Vehicle};
pub use vendor::Vendor;

/// The ADF section a node represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// The `<adf>` document root
    Root,
    /// Element outside the typed schema (open extension)
    Generic,
    Prospect,
    Vehicle,
    Odometer,
    ImageTag,
    Price,
    Finance,
    Amount,
    Balance,
    VehicleOption,
    ColorCombination,
    Customer,
    Timeframe,
    Contact,
    Name,
    Phone,
    Email,
    Address,
    Vendor,
    Provider,
    Id,
}

impl Variant {
    /// Element name used when a node has no explicit tag
    pub const fn element_name(self) -> &'static str {
        match self {
            Self::Root => "adf",
            Self::Generic => "element",
            Self::Prospect => "prospect",
            Self::Vehicle => "vehicle",
            Self::Odometer => "odometer",
            Self::ImageTag => "imagetag",
            Self::Price => "price",
            Self::Finance => "finance",
            Self::Amount => "amount",
            Self::Balance => "balance",
            Self::VehicleOption => "option",
            Self::ColorCombination => "colorcombination",
            Self::Customer => "customer",
            Self::Timeframe => "timeframe",
            Self::Contact => "contact",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Vendor => "vendor",
            Self::Provider => "provider",
            Self::Id => "id",
        }
    }

    /// Validation rules, in the order they are checked
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::Root | Self::Generic | Self::ImageTag | Self::ColorCombination | Self::Id => &[],
            Self::Prospect => prospect::RULES,
            Self::Vehicle => vehicle::VEHICLE_RULES,
            Self::Odometer => vehicle::ODOMETER_RULES,
            Self::Price => pricing::PRICE_RULES,
            Self::Finance => pricing::FINANCE_RULES,
            Self::Amount => pricing::AMOUNT_RULES,
            Self::Balance => pricing::BALANCE_RULES,
            Self::VehicleOption => options::OPTION_RULES,
            Self::Customer => customer::CUSTOMER_RULES,
            Self::Timeframe => customer::TIMEFRAME_RULES,
            Self::Contact => contact::CONTACT_RULES,
            Self::Name => contact::NAME_RULES,
            Self::Phone => contact::PHONE_RULES,
            Self::Email => contact::EMAIL_RULES,
            Self::Address => contact::ADDRESS_RULES,
            Self::Vendor => vendor::RULES,
            Self::Provider => provider::RULES,
        }
    }

    /// Attributes a freshly created node starts with
    pub fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Prospect => &[("status", "new")],
            Self::Vehicle => &[("status", "new"), ("interest", "buy")],
            Self::Price => &[("type", "quote")],
            Self::Amount => &[("type", "total"), ("limit", "maximum")],
            Self::Balance => &[("type", "finance")],
            _ => &[],
        }
    }
}

/// Values accepted by every `preferredcontact`/`primarycontact` flag
pub(crate) const CONTACT_FLAG: &[&str] = &["0", "1"];

/// Currency attribute check shared by price, amount and balance
pub(crate) const CURRENCY_RULE: Rule = Rule::Lookup {
    attribute: "currency",
    table: "ISO 4217 currency codes",
    contains: crate::codes::is_currency_code,
};
