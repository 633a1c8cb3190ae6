use toolhub::engine::{convert, format_number, units, Category, ConversionError};

fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

#[test]
fn linear_conversions_round_trip_across_every_unit_pair() {
    let samples = [0.001, 1.0, 42.5, -7.25, 98_765.4321];

    for category in Category::ordered() {
        if category.is_affine() {
            continue;
        }
        let table = units(category);
        for from in table {
            for to in table {
                for value in samples {
                    let forward = convert(value, category, from.key, to.key)
                        .expect("forward conversion succeeds");
                    let back = convert(forward, category, to.key, from.key)
                        .expect("reverse conversion succeeds");
                    assert!(
                        relative_error(back, value) < 1e-9,
                        "{} {} -> {} round trip drifted: {} vs {}",
                        category.key(),
                        from.key,
                        to.key,
                        back,
                        value
                    );
                }
            }
        }
    }
}

#[test]
fn linear_conversions_follow_the_scale_law() {
    for category in Category::ordered() {
        if category.is_affine() {
            continue;
        }
        let table = units(category);
        for from in table {
            for to in table {
                let converted =
                    convert(3.5, category, from.key, to.key).expect("conversion succeeds");
                let expected = 3.5 * from.factor.expect("linear unit has factor")
                    / to.factor.expect("linear unit has factor");
                assert_eq!(converted, expected, "{} -> {}", from.key, to.key);
            }
        }
    }
}

#[test]
fn temperature_round_trips_within_tolerance() {
    let table = units(Category::Temperature);
    for from in table {
        for to in table {
            for value in [-40.0, 0.0, 36.6, 100.0, 451.0] {
                let forward = convert(value, Category::Temperature, from.key, to.key)
                    .expect("forward conversion succeeds");
                let back = convert(forward, Category::Temperature, to.key, from.key)
                    .expect("reverse conversion succeeds");
                assert!(
                    (back - value).abs() < 1e-9,
                    "{} -> {} round trip drifted: {} vs {}",
                    from.key,
                    to.key,
                    back,
                    value
                );
            }
        }
    }
}

#[test]
fn temperature_fixed_points() {
    assert_eq!(
        convert(0.0, Category::Temperature, "celsius", "fahrenheit").expect("converts"),
        32.0
    );
    assert_eq!(
        convert(100.0, Category::Temperature, "celsius", "fahrenheit").expect("converts"),
        212.0
    );
    assert_eq!(
        convert(0.0, Category::Temperature, "celsius", "kelvin").expect("converts"),
        273.15
    );
    // -40 is the scale crossing point.
    assert_eq!(
        convert(-40.0, Category::Temperature, "fahrenheit", "celsius").expect("converts"),
        -40.0
    );
}

#[test]
fn unknown_keys_fail_loudly() {
    assert!(matches!(
        convert(5.0, Category::Length, "meter", "bogus"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        convert(5.0, Category::Length, "bogus", "meter"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        Category::parse("bogus"),
        Err(ConversionError::UnknownCategory(_))
    ));
}

#[test]
fn conversion_then_formatting_produces_display_strings() {
    let kilometers = convert(1_500_000.0, Category::Length, "meter", "kilometer")
        .expect("conversion succeeds");
    assert_eq!(format_number(kilometers), "1,500");

    let meters =
        convert(1.0, Category::Length, "millimeter", "meter").expect("conversion succeeds");
    assert_eq!(format_number(meters), "0.001");

    let grams =
        convert(2.0, Category::Weight, "metric_ton", "gram").expect("conversion succeeds");
    assert_eq!(format_number(grams), "2.000000e6");
}
