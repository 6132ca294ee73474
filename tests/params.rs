use cold_room_heat_load::{
    params::{
        parse_numeric, MiscParameters, ParamError, ParameterRecord, ParameterSet,
        ProductParameters, RoomParameters, Section,
    },
    store::parse_parameters,
};

#[test]
fn numeric_parsing_coerces_garbage_to_zero() {
    assert_eq!(parse_numeric("12.5"), 12.5);
    assert_eq!(parse_numeric("  -3.25kg"), -3.25);
    assert_eq!(parse_numeric("1e3"), 1000.0);
    assert_eq!(parse_numeric(".5"), 0.5);
    assert_eq!(parse_numeric("abc"), 0.0);
    assert_eq!(parse_numeric(""), 0.0);
    assert_eq!(parse_numeric("-"), 0.0);
    assert_eq!(parse_numeric("1e999"), 0.0);
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let src = r#"
[room]
length = 10.0

[product]
productName = "Cheese"
"#;
    let params = parse_parameters(src).unwrap();
    assert_eq!(params.room.length, 10.0);
    assert_eq!(params.room.width, RoomParameters::default().width);
    assert_eq!(params.product.product_name, "Cheese");
    assert_eq!(
        params.product.product_mass,
        ProductParameters::default().product_mass
    );
    assert_eq!(params.misc, MiscParameters::default());
}

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(parse_parameters("").unwrap(), ParameterSet::default());
}

#[test]
fn legacy_keys_are_accepted() {
    let src = r#"
[misc]
fanQuantity = 5
capacityIncludingSafety = 15
"#;
    let params = parse_parameters(src).unwrap();
    assert_eq!(params.misc.equipment_quantity, 5.0);
    assert_eq!(params.misc.safety_percent, 15.0);

    let mut misc = MiscParameters::default();
    misc.set("fanQuantity", 2.0).unwrap();
    assert_eq!(misc.equipment_quantity, 2.0);
}

#[test]
fn set_field_accepts_any_key_spelling() {
    let mut params = ParameterSet::default();
    let v = params
        .set_field(Section::Misc, "air_change_rate", "4.2")
        .unwrap();
    assert_eq!(v, 4.2);
    assert_eq!(params.misc.air_change_rate, 4.2);
    assert_eq!(params.get_field(Section::Misc, "AIRCHANGERATE").unwrap(), 4.2);
}

#[test]
fn set_field_stores_zero_for_non_numeric_text() {
    let mut params = ParameterSet::default();
    let v = params.set_field(Section::Room, "height", "tall").unwrap();
    assert_eq!(v, 0.0);
    assert_eq!(params.room.height, 0.0);
    // 0이 들어가도 계산은 계속된다.
    assert!(params.calculate().total_load_kj.is_finite());
}

#[test]
fn unknown_field_is_an_error() {
    let mut params = ParameterSet::default();
    let err = params.set_field(Section::Room, "colour", "1").unwrap_err();
    assert!(matches!(err, ParamError::UnknownField { section: Section::Room, .. }));
    assert_eq!(params, ParameterSet::default());
}

#[test]
fn sections_parse_from_text() {
    assert_eq!("room".parse::<Section>().unwrap(), Section::Room);
    assert_eq!("Product".parse::<Section>().unwrap(), Section::Product);
    assert_eq!("miscellaneous".parse::<Section>().unwrap(), Section::Misc);
    assert!("roof".parse::<Section>().is_err());
}

#[test]
fn field_tables_match_record_values() {
    let params = ParameterSet::default();
    for section in Section::ALL {
        for view in params.views(section) {
            assert_eq!(params.get_field(section, view.key).unwrap(), view.value);
            assert!(view.precision <= 4, "{} precision", view.key);
        }
    }
    assert_eq!(RoomParameters::fields().len(), 10);
    assert_eq!(ProductParameters::fields().len(), 8);
}

#[test]
fn reset_restores_one_section_only() {
    let mut params = ParameterSet::default();
    params.set_field(Section::Room, "length", "20").unwrap();
    params.set_field(Section::Misc, "lightPower", "500").unwrap();
    params.reset(Section::Room);
    assert_eq!(params.room, RoomParameters::default());
    assert_eq!(params.misc.light_power, 500.0);
}
