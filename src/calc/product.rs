use crate::params::ProductParameters;

/// 제품 냉각 부하 분해 [kJ/24Hr].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductLoads {
    /// 빙결점 이상 구간 현열
    pub sensible_above: f64,
    /// 동결 잠열
    pub latent: f64,
    /// 빙결점 이하 구간 현열
    pub sensible_below: f64,
    /// 세 구간 합
    pub total: f64,
    pub respiration: f64,
}

/// 입고 온도에서 출고 온도까지 제품을 냉각하는 열량을 구간별로 나눈다.
///
/// 입고 온도가 빙결점보다 높고 출고 온도가 빙결점보다 낮을 때만 잠열이 생긴다.
/// 출고 온도가 입고 온도보다 높으면 음의 부하가 그대로 전파된다.
pub fn product_loads(p: &ProductParameters) -> ProductLoads {
    let m = p.product_mass;
    let t_in = p.incoming_temperature;
    let t_out = p.outgoing_temperature;
    let t_f = p.freezing_point;

    let (sensible_above, latent, sensible_below) = if t_in > t_f {
        if t_out < t_f {
            (
                m * p.specific_heat_above_freezing * (t_in - t_f),
                m * p.latent_heat_of_freezing,
                m * p.specific_heat_below_freezing * (t_f - t_out),
            )
        } else {
            (m * p.specific_heat_above_freezing * (t_in - t_out), 0.0, 0.0)
        }
    } else {
        (0.0, 0.0, m * p.specific_heat_below_freezing * (t_in - t_out))
    };

    ProductLoads {
        sensible_above,
        latent,
        sensible_below,
        total: sensible_above + latent + sensible_below,
        respiration: respiration_load(p),
    }
}

/// 호흡열 = 입고량 × 호흡열 계수
pub fn respiration_load(p: &ProductParameters) -> f64 {
    p.product_mass * p.respiration_heat
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chilling_only_has_no_latent_part() {
        let loads = product_loads(&ProductParameters::default());
        assert_relative_eq!(loads.sensible_above, 2000.0 * 3.65 * 23.0);
        assert_eq!(loads.latent, 0.0);
        assert_eq!(loads.sensible_below, 0.0);
        assert_relative_eq!(loads.respiration, 2600.0);
    }

    #[test]
    fn freezing_splits_into_three_phases() {
        let p = ProductParameters {
            product_mass: 1000.0,
            incoming_temperature: 10.0,
            outgoing_temperature: -18.0,
            freezing_point: -2.0,
            specific_heat_above_freezing: 3.5,
            specific_heat_below_freezing: 1.8,
            latent_heat_of_freezing: 250.0,
            ..ProductParameters::default()
        };
        let loads = product_loads(&p);
        assert_relative_eq!(loads.sensible_above, 1000.0 * 3.5 * 12.0);
        assert_relative_eq!(loads.latent, 250_000.0);
        assert_relative_eq!(loads.sensible_below, 1000.0 * 1.8 * 16.0);
        assert_relative_eq!(
            loads.total,
            loads.sensible_above + loads.latent + loads.sensible_below
        );
    }

    #[test]
    fn frozen_storage_uses_below_freezing_heat() {
        let p = ProductParameters {
            incoming_temperature: -15.0,
            outgoing_temperature: -20.0,
            ..ProductParameters::default()
        };
        let loads = product_loads(&p);
        assert_eq!(loads.sensible_above, 0.0);
        assert_eq!(loads.latent, 0.0);
        assert_relative_eq!(loads.sensible_below, 2000.0 * 1.90 * 5.0);
    }
}
