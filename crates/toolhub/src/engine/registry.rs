//! Static unit tables, defined once and immutable for the process lifetime.
//!
//! Factors express "1 unit = factor base-units". Base units (factor 1):
//! meter, gram, liter, square meter, second, meter per second, joule.
//! Temperature units carry no factor; their affine rules live in
//! [`super::temperature`].

use super::{Category, UnitDescriptor};

const fn linear(key: &'static str, display_name: &'static str, factor: f64) -> UnitDescriptor {
    UnitDescriptor {
        key,
        display_name,
        factor: Some(factor),
    }
}

const fn affine(key: &'static str, display_name: &'static str) -> UnitDescriptor {
    UnitDescriptor {
        key,
        display_name,
        factor: None,
    }
}

static LENGTH: &[UnitDescriptor] = &[
    linear("millimeter", "Millimeter (mm)", 0.001),
    linear("centimeter", "Centimeter (cm)", 0.01),
    linear("meter", "Meter (m)", 1.0),
    linear("kilometer", "Kilometer (km)", 1000.0),
    linear("inch", "Inch (in)", 0.0254),
    linear("foot", "Foot (ft)", 0.3048),
    linear("yard", "Yard (yd)", 0.9144),
    linear("mile", "Mile (mi)", 1609.344),
];

static WEIGHT: &[UnitDescriptor] = &[
    linear("milligram", "Milligram (mg)", 0.001),
    linear("gram", "Gram (g)", 1.0),
    linear("kilogram", "Kilogram (kg)", 1000.0),
    linear("metric_ton", "Metric Ton (t)", 1_000_000.0),
    linear("ounce", "Ounce (oz)", 28.349523125),
    linear("pound", "Pound (lb)", 453.59237),
    linear("stone", "Stone (st)", 6350.29318),
];

static VOLUME: &[UnitDescriptor] = &[
    linear("milliliter", "Milliliter (mL)", 0.001),
    linear("liter", "Liter (L)", 1.0),
    linear("cubic_meter", "Cubic Meter (m³)", 1000.0),
    linear("teaspoon", "Teaspoon (tsp)", 0.00492892159375),
    linear("tablespoon", "Tablespoon (tbsp)", 0.01478676478125),
    linear("fluid_ounce", "Fluid Ounce (fl oz)", 0.0295735295625),
    linear("cup", "Cup (c)", 0.2365882365),
    linear("pint", "Pint (pt)", 0.473176473),
    linear("quart", "Quart (qt)", 0.946352946),
    linear("gallon", "Gallon (gal)", 3.785411784),
];

static AREA: &[UnitDescriptor] = &[
    linear("square_millimeter", "Square Millimeter (mm²)", 0.000001),
    linear("square_centimeter", "Square Centimeter (cm²)", 0.0001),
    linear("square_meter", "Square Meter (m²)", 1.0),
    linear("hectare", "Hectare (ha)", 10_000.0),
    linear("square_kilometer", "Square Kilometer (km²)", 1_000_000.0),
    linear("square_inch", "Square Inch (in²)", 0.00064516),
    linear("square_foot", "Square Foot (ft²)", 0.09290304),
    linear("square_yard", "Square Yard (yd²)", 0.83612736),
    linear("acre", "Acre (ac)", 4046.8564224),
];

static TIME: &[UnitDescriptor] = &[
    linear("millisecond", "Millisecond (ms)", 0.001),
    linear("second", "Second (s)", 1.0),
    linear("minute", "Minute (min)", 60.0),
    linear("hour", "Hour (h)", 3600.0),
    linear("day", "Day (d)", 86_400.0),
    linear("week", "Week (wk)", 604_800.0),
    linear("year", "Year (yr)", 31_536_000.0),
];

static SPEED: &[UnitDescriptor] = &[
    linear("meter_per_second", "Meter per Second (m/s)", 1.0),
    linear("kilometer_per_hour", "Kilometer per Hour (km/h)", 0.2777777777777778),
    linear("mile_per_hour", "Mile per Hour (mph)", 0.44704),
    linear("foot_per_second", "Foot per Second (ft/s)", 0.3048),
    linear("knot", "Knot (kn)", 0.5144444444444445),
];

static ENERGY: &[UnitDescriptor] = &[
    linear("joule", "Joule (J)", 1.0),
    linear("kilojoule", "Kilojoule (kJ)", 1000.0),
    linear("calorie", "Calorie (cal)", 4.184),
    linear("kilocalorie", "Kilocalorie (kcal)", 4184.0),
    linear("watt_hour", "Watt Hour (Wh)", 3600.0),
    linear("kilowatt_hour", "Kilowatt Hour (kWh)", 3_600_000.0),
    linear("btu", "British Thermal Unit (BTU)", 1055.05585262),
];

static TEMPERATURE: &[UnitDescriptor] = &[
    affine("celsius", "Celsius (°C)"),
    affine("fahrenheit", "Fahrenheit (°F)"),
    affine("kelvin", "Kelvin (K)"),
    affine("rankine", "Rankine (°R)"),
];

pub(super) fn units(category: Category) -> &'static [UnitDescriptor] {
    match category {
        Category::Length => LENGTH,
        Category::Weight => WEIGHT,
        Category::Volume => VOLUME,
        Category::Area => AREA,
        Category::Time => TIME,
        Category::Speed => SPEED,
        Category::Energy => ENERGY,
        Category::Temperature => TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_linear_category_has_exactly_one_base_unit() {
        for category in Category::ordered() {
            if category.is_affine() {
                continue;
            }
            let base_units = units(category)
                .iter()
                .filter(|unit| unit.factor == Some(1.0))
                .count();
            assert_eq!(base_units, 1, "category {}", category.key());
        }
    }

    #[test]
    fn unit_keys_are_unique_within_each_category() {
        for category in Category::ordered() {
            let table = units(category);
            for (index, unit) in table.iter().enumerate() {
                assert!(
                    table[index + 1..].iter().all(|other| other.key != unit.key),
                    "duplicate key {} in {}",
                    unit.key,
                    category.key()
                );
            }
        }
    }

    #[test]
    fn linear_factors_are_positive_and_finite() {
        for category in Category::ordered() {
            for unit in units(category) {
                if let Some(factor) = unit.factor {
                    assert!(factor.is_finite() && factor > 0.0, "{}", unit.key);
                }
            }
        }
    }

    #[test]
    fn affine_units_appear_only_under_temperature() {
        for category in Category::ordered() {
            let has_affine = units(category).iter().any(|unit| unit.factor.is_none());
            assert_eq!(has_affine, category.is_affine(), "{}", category.key());
        }
    }
}
