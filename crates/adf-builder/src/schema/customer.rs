//! `<customer>` and its purchase `<timeframe>`

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::scalar::{Attributes, Scalar};
use crate::schema::id::id_node;
use crate::schema::{Contact, Variant};
use crate::validate::Rule;

const TIMEFRAME_DATES: [&str; 2] = ["earliestdate", "latestdate"];

pub(crate) const CUSTOMER_RULES: &[Rule] = &[Rule::Presence { element: "contact" }];

pub(crate) const TIMEFRAME_RULES: &[Rule] = &[Rule::Check(check_dates)];

fn check_dates(node: &Node) -> Result<()> {
    if !TIMEFRAME_DATES.iter().any(|date| node.has_child(date)) {
        return Err(Error::constraint(
            "timeframe",
            "Timeframe must have at least one of earliestdate or latestdate",
        ));
    }
    for element in TIMEFRAME_DATES {
        for value in node.children_named(element).filter_map(Node::value) {
            if !is_iso8601(value) {
                return Err(Error::new(ErrorKind::InvalidDate {
                    element: element.to_owned(),
                    value: value.to_string(),
                }));
            }
        }
    }
    Ok(())
}

/// Accepts a calendar date, a local date-time or an RFC 3339 timestamp
fn is_iso8601(value: &Scalar) -> bool {
    let text = match value {
        Scalar::DateTime(_) => return true,
        Scalar::Text(text) => text.trim(),
        Scalar::Integer(_) | Scalar::Float(_) | Scalar::Bool(_) => return false,
    };

    let local_date = format_description!("[year]-[month]-[day]");
    let local_datetime = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let local_datetime_frac =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

    OffsetDateTime::parse(text, &Rfc3339).is_ok()
        || PrimitiveDateTime::parse(text, &local_datetime).is_ok()
        || PrimitiveDateTime::parse(text, &local_datetime_frac).is_ok()
        || Date::parse(text, &local_date).is_ok()
}

schema_view!(
    /// Builder view over `<customer>`
    Customer
);

impl Customer<'_> {
    leaf_setters! {
        comments => "comments",
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

    pub fn timeframe<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Timeframe<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Timeframe);
        block(&mut Timeframe::new(&mut node))?;
        self.node.replace_child(node);
        Ok(self)
    }
}

schema_view!(
    /// When the customer intends to buy
    Timeframe
);

impl Timeframe<'_> {
    leaf_setters! {
        description => "description",
        /// ISO 8601 date or date-time
        earliest_date => "earliestdate",
        /// ISO 8601 date or date-time
        latest_date => "latestdate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::validate::validate;
    use time::macros::datetime;

    fn timeframe(block: impl FnOnce(&mut Timeframe<'_>)) -> Node {
        let mut node = Node::new(Variant::Timeframe);
        block(&mut Timeframe::new(&mut node));
        node
    }

    #[test]
    fn test_timeframe_requires_a_date() {
        let node = timeframe(|t| {
            t.description("Within a month");
        });
        let err = validate(&node, &Config::default()).err();
        assert_eq!(
            err.map(|e| e.message().to_owned()),
            Some("Timeframe must have at least one of earliestdate or latestdate".to_owned())
        );
    }

    #[test]
    fn test_timeframe_date_formats() {
        for date in [
            "2024-06-01",
            "2024-06-01T10:30:00",
            "2024-06-01T10:30:00.250",
            "2024-06-01T10:30:00Z",
            "2024-06-01T10:30:00+02:00",
        ] {
            let node = timeframe(|t| {
                t.earliest_date(date);
            });
            assert!(validate(&node, &Config::default()).is_ok(), "{date}");
        }

        let node = timeframe(|t| {
            t.latest_date(datetime!(2024-07-01 0:00 UTC));
        });
        assert!(validate(&node, &Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_timeframe_date() {
        let node = timeframe(|t| {
            t.earliest_date("2024-06-01").latest_date("next month");
        });
        let err = validate(&node, &Config::default()).err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::InvalidDate {
                element: "latestdate".to_owned(),
                value: "next month".to_owned(),
            })
        );
        let node = timeframe(|t| {
            t.earliest_date("2024-13-45");
        });
        assert!(validate(&node, &Config::default()).is_err());
    }

    #[test]
    fn test_every_date_is_checked() {
        let node = timeframe(|t| {
            t.earliest_date("2024-06-01");
            t.child("earliestdate", "someday");
        });
        let err = validate(&node, &Config::default()).err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::InvalidDate {
                element: "earliestdate".to_owned(),
                value: "someday".to_owned(),
            })
        );
    }

    #[test]
    fn test_customer_requires_contact() {
        let mut node = Node::new(Variant::Customer);
        Customer::new(&mut node).comments("Call after 5pm");
        let err = validate(&node, &Config::default()).err();
        assert_eq!(
            err.map(|e| e.message().to_owned()),
            Some("Missing required Element: contact in customer".to_owned())
        );
    }
}
