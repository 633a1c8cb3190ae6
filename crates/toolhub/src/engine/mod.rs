//! Unit registry and conversion function.
//!
//! Every category is either *linear* (all units relate to a base unit by a
//! single multiplicative factor) or *affine* (temperature, which needs a
//! scale and an offset and pivots through Celsius). Conversion is a pure
//! function over its inputs; display formatting lives in [`format`] and is
//! never fed back into arithmetic.

mod format;
mod registry;
mod temperature;

pub use format::format_number;

use serde::{Deserialize, Serialize};

/// A family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Length,
    Weight,
    Volume,
    Area,
    Time,
    Speed,
    Energy,
    Temperature,
}

impl Category {
    /// Stable display order used by the unit picker.
    pub const fn ordered() -> [Category; 8] {
        [
            Category::Length,
            Category::Weight,
            Category::Volume,
            Category::Area,
            Category::Time,
            Category::Speed,
            Category::Energy,
            Category::Temperature,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Time => "time",
            Category::Speed => "speed",
            Category::Energy => "energy",
            Category::Temperature => "temperature",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Energy => "Energy",
            Category::Temperature => "Temperature",
        }
    }

    /// Affine categories cannot be converted with a bare factor ratio.
    pub const fn is_affine(self) -> bool {
        matches!(self, Category::Temperature)
    }

    pub fn parse(key: &str) -> Result<Self, ConversionError> {
        Category::ordered()
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| ConversionError::UnknownCategory(key.to_string()))
    }
}

/// Metadata for one unit of measure.
///
/// For linear categories `factor` expresses "1 unit of this = factor
/// base-units"; exactly one unit per category carries factor 1. Affine
/// units (temperature) have no factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

/// Ordered unit table for a category.
pub fn units(category: Category) -> &'static [UnitDescriptor] {
    registry::units(category)
}

/// Look up a single unit, failing `UnknownUnit` when the key is not
/// registered within the category.
pub fn descriptor(category: Category, key: &str) -> Result<&'static UnitDescriptor, ConversionError> {
    registry::units(category)
        .iter()
        .find(|unit| unit.key == key)
        .ok_or_else(|| ConversionError::UnknownUnit {
            category: category.key().to_string(),
            unit: key.to_string(),
        })
}

/// Input-validation failures for the conversion engine. All are local and
/// deterministic; none is retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },
    #[error("value must be a finite number, got {0}")]
    InvalidValue(f64),
}

/// Convert `value` from `from` to `to` within `category`.
///
/// Linear categories use `value * factor(from) / factor(to)` in f64;
/// temperature pivots through Celsius with the affine rules in
/// [`temperature`]. Identical source and target units return the value
/// unchanged, bit for bit.
pub fn convert(
    value: f64,
    category: Category,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }

    let from_unit = descriptor(category, from)?;
    let to_unit = descriptor(category, to)?;

    if from_unit.key == to_unit.key {
        return Ok(value);
    }

    match (from_unit.factor, to_unit.factor) {
        (Some(from_factor), Some(to_factor)) => Ok(value * from_factor / to_factor),
        _ => {
            let from_scale = temperature::Scale::parse(category, from_unit.key)?;
            let to_scale = temperature::Scale::parse(category, to_unit.key)?;
            Ok(to_scale.from_celsius(from_scale.to_celsius(value)))
        }
    }
}
