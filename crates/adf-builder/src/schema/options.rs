//! Vehicle options and colour combinations

use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::scalar::Scalar;
use crate::validate::Rule;

const WEIGHTING_MIN: i64 = -100;
const WEIGHTING_MAX: i64 = 100;

pub(crate) const OPTION_RULES: &[Rule] = &[Rule::Check(check_weighting)];

/// `weighting` must read as a number in `-100..=100`
#[allow(clippy::as_conversions)]
fn check_weighting(node: &Node) -> Result<()> {
    for value in node.children_named("weighting").filter_map(Node::value) {
        let in_range = value
            .to_number()
            .is_some_and(|n| (WEIGHTING_MIN as f64..=WEIGHTING_MAX as f64).contains(&n));
        if !in_range {
            let value = value.to_string();
            let message =
                format!("Weighting must be between {WEIGHTING_MIN} and {WEIGHTING_MAX}, got {value}");
            return Err(Error::with_message(
                ErrorKind::OutOfRange {
                    field: "weighting".to_owned(),
                    value,
                    min: WEIGHTING_MIN,
                    max: WEIGHTING_MAX,
                },
                message,
            ));
        }
    }
    Ok(())
}

schema_view!(
    /// Builder view over a vehicle `<option>`
    VehicleOption
);

impl VehicleOption<'_> {
    leaf_setters! {
        option_name => "optionname",
        manufacturer_code => "manufacturercode",
        stock => "stock",
        /// Interest in the option, `-100` (must not have) to `100` (must have)
        weighting => "weighting",
        price => "price",
    }
}

schema_view!(ColorCombination);

impl ColorCombination<'_> {
    leaf_setters! {
        interior_color => "interiorcolor",
        exterior_color => "exteriorcolor",
        preference => "preference",
    }
}
