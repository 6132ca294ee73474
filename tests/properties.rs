use approx::assert_relative_eq;
use cold_room_heat_load::{
    calc::{calculate_heat_load, LoadComponent},
    params::{MiscParameters, ProductParameters, RoomParameters},
};
use proptest::prelude::*;

prop_compose! {
    fn room()(
        length in 0.5f64..50.0,
        width in 0.5f64..50.0,
        height in 2.0f64..12.0,
        ambient in -10.0f64..50.0,
        room_t in -35.0f64..15.0,
        u in 0.05f64..1.5,
        coil_td in 2.0f64..12.0,
    ) -> RoomParameters {
        RoomParameters {
            length,
            width,
            height,
            ambient_temperature: ambient,
            room_temperature: room_t,
            ground_temperature: ambient - 5.0,
            wall_u_factor: u,
            ceiling_u_factor: u,
            floor_u_factor: u,
            coil_temperature_difference: coil_td,
        }
    }
}

prop_compose! {
    fn product()(
        mass in 0.0f64..50_000.0,
        incoming in -20.0f64..40.0,
        outgoing in -30.0f64..10.0,
        freezing in -6.0f64..0.0,
    ) -> ProductParameters {
        ProductParameters {
            product_mass: mass,
            incoming_temperature: incoming,
            outgoing_temperature: outgoing,
            freezing_point: freezing,
            ..ProductParameters::default()
        }
    }
}

prop_compose! {
    fn misc()(
        hours in 0.0f64..24.0,
        people in 0.0f64..10.0,
        fans in 0.0f64..12.0,
        safety in 0.0f64..100.0,
    ) -> MiscParameters {
        MiscParameters {
            hours_of_load: hours,
            equipment_usage_hours: hours,
            occupancy_usage_hours: hours,
            occupancy_count: people,
            equipment_quantity: fans,
            safety_percent: safety,
            ..MiscParameters::default()
        }
    }
}

proptest! {
    #[test]
    fn grand_total_matches_category_sum(r in room(), p in product(), m in misc()) {
        let res = calculate_heat_load(&r, &p, &m);
        let sum = res.total_transmission_load
            + res.product_load
            + res.respiration_load
            + res.total_misc_load;
        assert_relative_eq!(res.total_load_kj, sum, max_relative = 1e-12, epsilon = 1e-9);
    }

    #[test]
    fn component_tr_sum_matches_total(r in room(), p in product(), m in misc()) {
        let res = calculate_heat_load(&r, &p, &m);
        let sum: f64 = LoadComponent::ALL.iter().map(|c| c.tr(&res)).sum();
        assert_relative_eq!(sum, res.total_load_tr, max_relative = 1e-9, epsilon = 1e-9);
    }

    #[test]
    fn safety_scales_capacity(r in room(), p in product(), m in misc()) {
        let res = calculate_heat_load(&r, &p, &m);
        let expected = res.refrigeration_capacity_tr * (1.0 + m.safety_percent / 100.0);
        prop_assert_eq!(res.capacity_including_safety, expected);
    }

    #[test]
    fn recalculation_is_bit_identical(r in room(), p in product(), m in misc()) {
        let a = calculate_heat_load(&r, &p, &m);
        let b = calculate_heat_load(&r, &p, &m);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn results_are_always_finite(r in room(), p in product(), m in misc()) {
        let res = calculate_heat_load(&r, &p, &m);
        prop_assert!(res.total_load_kj.is_finite());
        prop_assert!(res.sensible_heat_ratio.is_finite());
        prop_assert!(res.air_qty_required.is_finite());
    }
}
