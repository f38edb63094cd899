//! Declarative validation rules and the tree walk that applies them
//!
//! Each [`Variant`](crate::Variant) owns a static rule table. Validation
//! runs a node's own rules in declaration order, stopping at the first
//! failure, and only then descends into the children in stored order.

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;

/// One entry of a variant's rule table
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Attribute, if present, must be one of `allowed`
    Inclusion {
        attribute: &'static str,
        allowed: &'static [&'static str],
    },
    /// Attribute, if present, must be a member of a lookup table
    Lookup {
        attribute: &'static str,
        table: &'static str,
        contains: fn(&str) -> bool,
    },
    /// A child element with this name must exist
    Presence { element: &'static str },
    /// Bespoke cross-field check
    Check(fn(&Node) -> Result<()>),
}

impl Rule {
    /// Applies the rule to a single node (children are not visited)
    pub fn check(&self, node: &Node) -> Result<()> {
        match self {
            Self::Inclusion { attribute, allowed } => {
                let Some(value) = node.attribute(attribute) else {
                    return Ok(());
                };
                let value = value.to_string();
                if allowed.contains(&value.as_str()) {
                    Ok(())
                } else {
                    Err(Error::new(ErrorKind::InvalidValue {
                        attribute: (*attribute).to_owned(),
                        value,
                        allowed: allowed.join(", "),
                    }))
                }
            }
            Self::Lookup {
                attribute,
                table,
                contains,
            } => {
                let Some(value) = node.attribute(attribute) else {
                    return Ok(());
                };
                let value = value.to_string();
                if contains(&value) {
                    Ok(())
                } else {
                    Err(Error::new(ErrorKind::InvalidValue {
                        attribute: (*attribute).to_owned(),
                        value,
                        allowed: (*table).to_owned(),
                    }))
                }
            }
            Self::Presence { element } => {
                if node.has_child(element) {
                    Ok(())
                } else {
                    Err(Error::new(ErrorKind::MissingElement {
                        element: (*element).to_owned(),
                        parent: node.element_name().to_owned(),
                    }))
                }
            }
            Self::Check(check) => check(node),
        }
    }
}

/// Validates `node` and its whole subtree, failing fast on the first violation
pub fn validate(node: &Node, config: &Config) -> Result<()> {
    let mut path = Vec::new();
    let result = walk(node, 0, config, &mut path);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "validation failed");
    }
    result
}

fn walk<'a>(node: &'a Node, depth: usize, config: &Config, path: &mut Vec<&'a str>) -> Result<()> {
    path.push(node.element_name());

    if config.depth_exceeded(depth) {
        return Err(Error::new(ErrorKind::MaxDepthExceeded {
            max: config.max_depth,
        })
        .at(path.join("/")));
    }

    tracing::trace!(element = node.element_name(), depth, "validating");
    for rule in node.variant().rules() {
        rule.check(node).map_err(|err| err.at(path.join("/")))?;
    }

    for child in node.children() {
        walk(child, depth + 1, config, path)?;
    }

    path.pop();
    Ok(())
}

/// Shared helper for rules that restrict a child element's text to a fixed set
pub(crate) fn check_child_value(
    node: &Node,
    element: &str,
    label: &str,
    allowed: &[&str],
) -> Result<()> {
    for child in node.children_named(element) {
        let value = child.value().map(ToString::to_string).unwrap_or_default();
        if !allowed.contains(&value.as_str()) {
            return Err(Error::new(ErrorKind::InvalidContent {
                element: label.to_owned(),
                value,
                allowed: allowed.join(", "),
            }));
        }
    }
    Ok(())
}
