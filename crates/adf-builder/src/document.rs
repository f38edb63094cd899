//! The `<adf>` document root

use std::ops::{Deref, DerefMut};

use crate::config::Config;
use crate::error::Result;
use crate::node::Node;
use crate::schema::{Prospect, Variant};
use crate::xml;

/// A complete ADF document: an `<adf>` root holding one or more prospects
///
/// Dereferences to the root [`Node`], so arbitrary elements can be added
/// next to the prospects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new() -> Self {
        Self {
            root: Node::new(Variant::Root),
        }
    }

    /// Appends a `<prospect>` built by `block`
    pub fn prospect<F>(&mut self, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Prospect<'_>) -> Result<()>,
    {
        let mut node = Node::new(Variant::Prospect);
        block(&mut Prospect::new(&mut node))?;
        self.root.add_child(node);
        Ok(self)
    }

    pub fn prospects(&self) -> impl Iterator<Item = &Node> + '_ {
        self.root.children_of(Variant::Prospect)
    }

    pub fn prospects_mut(&mut self) -> impl Iterator<Item = Prospect<'_>> + '_ {
        self.root
            .children_of_mut(Variant::Prospect)
            .map(Prospect::new)
    }

    pub fn first_prospect(&self) -> Option<&Node> {
        self.prospects().next()
    }

    /// Typed access to the first prospect, for editing a built tree
    pub fn first_prospect_mut(&mut self) -> Option<Prospect<'_>> {
        self.prospects_mut().next()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn validate(&self) -> Result<()> {
        self.root.validate()
    }

    /// Validates, then serializes with the default configuration
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with_config(&Config::default())
    }

    /// Validates, then serializes; nothing is written if validation fails
    pub fn to_xml_with_config(&self, config: &Config) -> Result<String> {
        self.root.validate_with_config(config)?;
        Ok(xml::serialize(&self.root, config))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Document {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.root
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.root
    }
}
