//! Affine temperature rules. Conversions pivot through Celsius so each
//! scale only has to know its own relationship to the canonical unit.

use super::{Category, ConversionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl Scale {
    pub(super) fn parse(category: Category, key: &str) -> Result<Self, ConversionError> {
        match key {
            "celsius" => Ok(Scale::Celsius),
            "fahrenheit" => Ok(Scale::Fahrenheit),
            "kelvin" => Ok(Scale::Kelvin),
            "rankine" => Ok(Scale::Rankine),
            _ => Err(ConversionError::UnknownUnit {
                category: category.key().to_string(),
                unit: key.to_string(),
            }),
        }
    }

    pub(super) fn to_celsius(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value,
            Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Scale::Kelvin => value - 273.15,
            Scale::Rankine => (value - 491.67) * 5.0 / 9.0,
        }
    }

    pub(super) fn from_celsius(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value,
            Scale::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Scale::Kelvin => value + 273.15,
            Scale::Rankine => (value + 273.15) * 9.0 / 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_round_trips_through_celsius() {
        let celsius = Scale::Fahrenheit.to_celsius(212.0);
        assert_eq!(celsius, 100.0);
        assert_eq!(Scale::Fahrenheit.from_celsius(celsius), 212.0);
    }

    #[test]
    fn kelvin_and_rankine_agree_at_absolute_zero() {
        let from_kelvin = Scale::Kelvin.to_celsius(0.0);
        let from_rankine = Scale::Rankine.to_celsius(0.0);
        assert!((from_kelvin - from_rankine).abs() < 1e-9);
        assert!((from_kelvin + 273.15).abs() < 1e-12);
    }

    #[test]
    fn parse_rejects_linear_unit_keys() {
        let err = Scale::parse(Category::Temperature, "meter").expect_err("not a scale");
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    }
}
