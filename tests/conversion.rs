use approx::assert_relative_eq;
use cold_room_heat_load::{
    calc::constants::{KJ_PER_24H_PER_TR, KW_PER_TR},
    conversion::{convert, convert_named, ConversionError},
    quantity::QuantityKind,
};

#[test]
fn one_ton_in_kw_and_kj_per_day() {
    let kw = convert(QuantityKind::Load, 1.0, "TR", "kW").unwrap();
    assert_relative_eq!(kw, KW_PER_TR);
    let kj = convert(QuantityKind::Load, 1.0, "TR", "kJ/24Hr").unwrap();
    assert_relative_eq!(kj, KJ_PER_24H_PER_TR, max_relative = 1e-12);
}

#[test]
fn ton_is_twelve_thousand_btu_per_hour() {
    let btu = convert(QuantityKind::Load, 1.0, "TR", "Btu/h").unwrap();
    assert_relative_eq!(btu, 12_000.0, max_relative = 1e-6);
}

#[test]
fn kcal_per_hour_to_watts() {
    let w = convert(QuantityKind::Load, 860.0, "kcal/h", "W").unwrap();
    assert_relative_eq!(w, 1000.2, max_relative = 1e-4);
}

#[test]
fn temperatures_and_differences() {
    let f = convert(QuantityKind::Temperature, 2.0, "C", "F").unwrap();
    assert_relative_eq!(f, 35.6, max_relative = 1e-12);
    let dt = convert(QuantityKind::TemperatureDifference, 6.0, "K", "°F").unwrap();
    assert_relative_eq!(dt, 10.8, max_relative = 1e-12);
}

#[test]
fn lengths_and_u_factors() {
    let mm = convert(QuantityKind::Length, 1.0, "ft", "mm").unwrap();
    assert_relative_eq!(mm, 304.8, max_relative = 1e-12);
    let imperial = convert(QuantityKind::HeatTransferCoeff, 0.295, "W/m²K", "Btu/h·ft²·°F").unwrap();
    assert_relative_eq!(imperial, 0.295 / 5.678_263, max_relative = 1e-5);
}

#[test]
fn gui_symbols_are_accepted_everywhere() {
    for kind in QuantityKind::ALL {
        for from in kind.unit_symbols() {
            for to in kind.unit_symbols() {
                assert!(convert(kind, 1.0, from, to).is_ok(), "{from} -> {to}");
            }
        }
    }
}

#[test]
fn unknown_units_and_quantities_fail() {
    assert!(matches!(
        convert(QuantityKind::Load, 1.0, "horsepower", "kW"),
        Err(ConversionError::UnknownUnit(_))
    ));
    assert!(matches!(
        convert_named("pressure", 1.0, "bar", "psi"),
        Err(ConversionError::UnknownQuantity(_))
    ));
    let out = convert_named("temperature_diff", 1.8, "F", "K").unwrap();
    assert_relative_eq!(out, 1.0, max_relative = 1e-12);
}
