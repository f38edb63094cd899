//! The generic tree primitive shared by every ADF section

use crate::config::Config;
use crate::error::Result;
use crate::scalar::{Attributes, Scalar};
use crate::schema::Variant;
use crate::validate;

/// A single element of the document tree
///
/// A node has an optional explicit tag, an ordered attribute map, an
/// ordered list of owned children and an optional scalar value. When the
/// tag is absent the element name comes from the node's [`Variant`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    variant: Variant,
    tag: Option<String>,
    attributes: Attributes,
    children: Vec<Node>,
    value: Option<Scalar>,
}

impl Node {
    /// Creates a node for a schema variant, with the variant's default attributes applied
    pub fn new(variant: Variant) -> Self {
        let attributes = variant.defaults().iter().copied().collect();
        Self {
            variant,
            tag: None,
            attributes,
            children: Vec::new(),
            value: None,
        }
    }

    /// Creates an empty generic element with an explicit tag
    pub fn generic(tag: impl Into<String>) -> Self {
        Self {
            variant: Variant::Generic,
            tag: Some(tag.into()),
            attributes: Attributes::new(),
            children: Vec::new(),
            value: None,
        }
    }

    /// Creates a generic text element, e.g. `<make>Toyota</make>`
    pub fn leaf(tag: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::generic(tag).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<Scalar>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        for (key, value) in attributes {
            self.attributes.insert(key, value);
        }
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Explicit tag, if one was given
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Name this node renders as: the explicit tag, else the variant's element name
    pub fn element_name(&self) -> &str {
        self.tag
            .as_deref()
            .unwrap_or_else(|| self.variant.element_name())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Scalar> {
        self.attributes.get(key)
    }

    /// Sets (or overwrites in place) an attribute
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> &mut Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<Scalar>) -> &mut Self {
        self.value = value;
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Appends a child and returns it
    #[allow(clippy::indexing_slicing)]
    pub fn add_child(&mut self, node: Node) -> &mut Node {
        let index = self.children.len();
        self.children.push(node);
        &mut self.children[index]
    }

    /// Removes every child rendering as `tag`, returning how many were removed
    pub fn remove_children(&mut self, tag: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|child| child.element_name() != tag);
        before - self.children.len()
    }

    /// Singular-element semantics: drop existing children with the same name, then append
    pub fn replace_child(&mut self, node: Node) -> &mut Node {
        let name = node.element_name().to_owned();
        self.remove_children(&name);
        self.add_child(node)
    }

    pub fn has_child(&self, tag: &str) -> bool {
        self.children.iter().any(|child| child.element_name() == tag)
    }

    pub fn first_child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.element_name() == tag)
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children
            .iter()
            .filter(move |child| child.element_name() == tag)
    }

    pub fn children_of(&self, variant: Variant) -> impl Iterator<Item = &Node> + '_ {
        self.children
            .iter()
            .filter(move |child| child.variant == variant)
    }

    pub(crate) fn children_of_mut(
        &mut self,
        variant: Variant,
    ) -> impl Iterator<Item = &mut Node> + '_ {
        self.children
            .iter_mut()
            .filter(move |child| child.variant == variant)
    }

    /// Open extension: appends an arbitrary text element
    ///
    /// ```
    /// use adf_builder::Node;
    ///
    /// let mut node = Node::generic("prospect");
    /// node.child("custom_tag", "Custom Value").set("type", "urgent");
    /// assert_eq!(node.children()[0].element_name(), "custom_tag");
    /// ```
    pub fn child(&mut self, tag: impl Into<String>, value: impl Into<Scalar>) -> &mut Node {
        self.add_child(Self::leaf(tag, value))
    }

    /// Open extension, full form: optional text plus attributes.
    /// Without a value the element is empty and carries only its attributes.
    pub fn child_with(
        &mut self,
        tag: impl Into<String>,
        value: Option<Scalar>,
        attributes: Attributes,
    ) -> &mut Node {
        let mut node = Self::generic(tag).with_attributes(attributes);
        node.value = value;
        self.add_child(node)
    }

    /// Open extension, structural form: the block populates the new element.
    ///
    /// The child is attached only once the block has succeeded.
    pub fn nested<F>(&mut self, tag: impl Into<String>, block: F) -> Result<&mut Node>
    where
        F: FnOnce(&mut Node) -> Result<()>,
    {
        let mut node = Self::generic(tag);
        block(&mut node)?;
        Ok(self.add_child(node))
    }

    /// Validates this node and its subtree with the default configuration
    pub fn validate(&self) -> Result<()> {
        validate::validate(self, &Config::default())
    }

    /// Validates this node and its subtree
    pub fn validate_with_config(&self, config: &Config) -> Result<()> {
        validate::validate(self, config)
    }
}
