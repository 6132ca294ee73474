use approx::{assert_abs_diff_eq, assert_relative_eq};
use cold_room_heat_load::{
    calc::{
        calculate_heat_load,
        constants::{KJ_PER_24H_PER_TR, SECONDS_PER_DAY},
        LoadCategory, LoadComponent,
    },
    params::{MiscParameters, ParameterSet, ProductParameters, RoomParameters},
};

fn defaults() -> (RoomParameters, ProductParameters, MiscParameters) {
    (
        RoomParameters::default(),
        ProductParameters::default(),
        MiscParameters::default(),
    )
}

#[test]
fn default_room_reference_values() {
    let (room, product, misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);

    assert_relative_eq!(r.wall_area, 60.0);
    assert_relative_eq!(r.ceiling_area, 24.0);
    assert_relative_eq!(r.wall_load, 50_466.24, max_relative = 1e-12);
    assert_relative_eq!(r.ceiling_load, 20_186.496, max_relative = 1e-12);
    assert_relative_eq!(r.floor_load, 17_127.936, max_relative = 1e-12);
    assert_relative_eq!(r.product_load, 167_900.0, max_relative = 1e-12);
    assert_relative_eq!(r.respiration_load, 2_600.0, max_relative = 1e-12);
    assert_relative_eq!(r.total_load_kj, 326_116.192, max_relative = 1e-9);
    assert_relative_eq!(r.total_load_kw, r.total_load_kj / 86_400.0);
}

#[test]
fn misc_reference_loads_in_kw() {
    let (room, product, misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);

    assert_abs_diff_eq!(r.air_change_load_kw, 0.0068, epsilon = 1e-12);
    assert_abs_diff_eq!(r.equipment_load_kw, 0.37, epsilon = 1e-12);
    assert_abs_diff_eq!(r.occupancy_load_kw, 0.229_166_666_7, epsilon = 1e-9);
    assert_abs_diff_eq!(r.door_heater_load_kw, 0.120_833_333_3, epsilon = 1e-9);
    assert_abs_diff_eq!(
        r.air_change_load,
        0.0068 * SECONDS_PER_DAY,
        epsilon = 1e-9
    );
}

#[test]
fn grand_total_is_sum_of_categories() {
    let (room, product, misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);
    let expected = r.total_transmission_load + r.product_load + r.respiration_load + r.total_misc_load;
    assert_relative_eq!(r.total_load_kj, expected, max_relative = 1e-12);

    let by_category: f64 = [
        LoadCategory::Transmission,
        LoadCategory::Product,
        LoadCategory::Miscellaneous,
    ]
    .iter()
    .map(|c| r.category_total(*c))
    .sum();
    assert_relative_eq!(by_category, r.total_load_kj, max_relative = 1e-12);
}

#[test]
fn component_tr_values_sum_to_total() {
    let (room, product, misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);
    let sum: f64 = LoadComponent::ALL.iter().map(|c| c.tr(&r)).sum();
    assert_relative_eq!(sum, r.total_load_tr, max_relative = 1e-12);
    assert_relative_eq!(r.total_load_tr, r.total_load_kj / KJ_PER_24H_PER_TR);
}

#[test]
fn safety_factor_scales_capacity() {
    let (room, product, mut misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);
    assert_relative_eq!(r.capacity_including_safety, r.refrigeration_capacity_tr * 1.1);

    misc.safety_percent = 0.0;
    let r = calculate_heat_load(&room, &product, &misc);
    assert_eq!(r.capacity_including_safety, r.refrigeration_capacity_tr);

    misc.safety_percent = 100.0;
    let r = calculate_heat_load(&room, &product, &misc);
    assert_relative_eq!(r.capacity_including_safety, 2.0 * r.refrigeration_capacity_tr);
}

#[test]
fn zero_usage_hours_zero_every_timed_component() {
    let (room, product, misc) = defaults();
    let idle = misc.clone().with_zero_usage_hours();
    let busy = calculate_heat_load(&room, &product, &misc);
    let r = calculate_heat_load(&room, &product, &idle);

    assert_eq!(r.air_change_load, 0.0);
    assert_eq!(r.equipment_load, 0.0);
    assert_eq!(r.occupancy_load, 0.0);
    assert_eq!(r.light_load, 0.0);
    assert_eq!(r.door_heater_load, 0.0);
    assert_eq!(r.total_misc_load, 0.0);
    assert_eq!(r.continuous_heater_load_kw, busy.continuous_heater_load_kw);
    assert!(r.continuous_heater_load_kw > 0.0);
}

#[test]
fn continuous_heaters_stay_out_of_totals() {
    let (room, product, mut misc) = defaults();
    let before = calculate_heat_load(&room, &product, &misc);
    misc.tray_heaters = 5_000.0;
    let after = calculate_heat_load(&room, &product, &misc);

    assert!(after.continuous_heater_load > before.continuous_heater_load);
    assert_eq!(after.total_load_kj, before.total_load_kj);
}

#[test]
fn identical_inputs_give_identical_results() {
    let params = ParameterSet::default();
    let a = params.calculate();
    let b = params.calculate();
    assert_eq!(a, b);
    assert_eq!(a.total_load_kj.to_bits(), b.total_load_kj.to_bits());
}

#[test]
fn freezing_product_adds_latent_heat() {
    let (room, mut product, misc) = defaults();
    product.outgoing_temperature = -18.0;
    let r = calculate_heat_load(&room, &product, &misc);

    assert_relative_eq!(r.latent_heat, 2000.0 * 250.0);
    assert_relative_eq!(r.product_latent_load, r.latent_heat);
    assert!(r.sensible_heat_ratio < 1.0);
    assert_relative_eq!(
        r.sensible_heat_ratio,
        r.sensible_heat / (r.sensible_heat + r.latent_heat)
    );
}

#[test]
fn chilling_only_is_all_sensible() {
    let (room, product, misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);
    assert_eq!(r.latent_heat, 0.0);
    assert_relative_eq!(r.sensible_heat_ratio, 1.0);
    assert_relative_eq!(r.sensible_heat, r.total_load_kj, max_relative = 1e-12);
}

#[test]
fn zero_room_gives_finite_zeros() {
    let room = RoomParameters {
        length: 0.0,
        width: 0.0,
        height: 0.0,
        coil_temperature_difference: 0.0,
        ..RoomParameters::default()
    };
    let product = ProductParameters {
        product_mass: 0.0,
        ..ProductParameters::default()
    };
    let misc = MiscParameters {
        air_change_rate: 0.0,
        fan_motor_rating: 0.0,
        occupancy_count: 0.0,
        light_power: 0.0,
        door_heater_capacity: 0.0,
        ..MiscParameters::default()
    };
    let r = calculate_heat_load(&room, &product, &misc);
    assert_eq!(r.total_load_kj, 0.0);
    assert_eq!(r.sensible_heat_ratio, 0.0);
    assert_eq!(r.air_qty_required, 0.0);
}

#[test]
fn negative_inputs_propagate_without_panicking() {
    let (mut room, product, misc) = defaults();
    room.ambient_temperature = -10.0;
    room.ground_temperature = -10.0;
    let r = calculate_heat_load(&room, &product, &misc);
    assert!(r.total_transmission_load < 0.0);
    assert!(r.total_load_kj.is_finite());
}

#[test]
fn air_quantity_follows_sensible_heat_and_coil_td() {
    let (mut room, product, misc) = defaults();
    let r6 = calculate_heat_load(&room, &product, &misc);
    room.coil_temperature_difference = 12.0;
    let r12 = calculate_heat_load(&room, &product, &misc);
    assert!(r6.air_qty_required > 0.0);
    assert_relative_eq!(r6.air_qty_required, 2.0 * r12.air_qty_required, max_relative = 1e-12);
}

#[test]
fn door_geometry_matches_default_capacity() {
    let (room, product, misc) = defaults();
    let r = calculate_heat_load(&room, &product, &misc);
    assert_relative_eq!(r.door_heater_capacity_from_geometry, 0.145, max_relative = 1e-12);
}
