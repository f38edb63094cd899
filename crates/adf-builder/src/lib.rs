//! adf-builder - Build, validate and serialize ADF (Auto-lead Data Format) leads
//!
//! A document is described with nested closures, one per section. Each
//! section is a typed view over a generic [`Node`], so tags outside the
//! schema can always be added with [`Node::child`], [`Node::child_with`]
//! and [`Node::nested`]. Serialization validates the whole tree first and
//! fails with the first schema violation it finds.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), adf_builder::Error> {
//! let xml = adf_builder::build(|adf| {
//!     adf.prospect(|prospect| {
//!         prospect.request_date("2024-06-15T10:00:00Z");
//!         prospect.vehicle(|vehicle| {
//!             vehicle.year(2024).make("Toyota").model("Camry");
//!             Ok(())
//!         })?;
//!         prospect.customer(|customer| {
//!             customer.contact(|contact| {
//!                 contact.name("John Doe");
//!                 contact.email("john@example.com");
//!                 Ok(())
//!             })?;
//!             Ok(())
//!         })?;
//!         prospect.vendor(|vendor| {
//!             vendor.vendor_name("Example Motors");
//!             vendor.contact(|contact| {
//!                 contact.name("Sales");
//!                 contact.phone("555-0100");
//!                 Ok(())
//!             })?;
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//! assert!(xml.contains("<make>Toyota</make>"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod codes;

pub mod config;
pub use config::Config;

pub mod document;
pub use document::Document;

pub mod error;
pub use error::{Error, ErrorCategory, ErrorKind, Result};

pub mod node;
pub use node::Node;

pub mod scalar;
pub use scalar::{Attributes, Scalar};

pub mod schema;
pub use schema::{
    Address, Amount, Balance, ColorCombination, Contact, Customer, Email, Finance, ImageTag, Name,
    Odometer, Phone, Price, Prospect, Provider, Street, Timeframe, Variant, Vehicle, VehicleOption,
    Vendor,
};

pub mod validate;
pub use validate::Rule;

pub mod xml;

/// Build a document and serialize it with the default configuration
pub fn build<F>(block: F) -> Result<String>
where
    F: FnOnce(&mut Document) -> Result<()>,
{
    build_with_config(&Config::default(), block)
}

/// Build a document and serialize it with a custom configuration
pub fn build_with_config<F>(config: &Config, block: F) -> Result<String>
where
    F: FnOnce(&mut Document) -> Result<()>,
{
    let document = tree(block)?;
    document.to_xml_with_config(config)
}

/// Build a document without serializing it, for inspection or editing
pub fn tree<F>(block: F) -> Result<Document>
where
    F: FnOnce(&mut Document) -> Result<()>,
{
    tracing::debug!("building ADF document");
    let mut document = Document::new();
    block(&mut document)?;
    Ok(document)
}
