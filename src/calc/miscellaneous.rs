use super::constants::DOOR_HEATER_KW_PER_M;
use crate::params::MiscParameters;

/// 기타 부하 [kW, 하루 평균].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiscLoads {
    pub air_change: f64,
    pub equipment: f64,
    pub occupancy: f64,
    pub light: f64,
    pub door_heater: f64,
    /// 상시 운전 히터. 기타 부하 합계에는 넣지 않는다.
    pub continuous_heaters: f64,
    /// 환기 + 장비 + 인원 + 조명 + 도어 히터
    pub total: f64,
}

/// 환기량 × 엔탈피 차 × 부하 시간 / 1000
pub fn air_change_load(m: &MiscParameters) -> f64 {
    m.air_change_rate * m.enthalpy_diff * m.hours_of_load / 1000.0
}

/// 팬 모터 정격 × 수량 × 사용 시간 / 24
pub fn equipment_load(m: &MiscParameters) -> f64 {
    m.fan_motor_rating * m.equipment_quantity * m.equipment_usage_hours / 24.0
}

/// 인원 × 1인당 발열(W) × 사용 시간 / (24 × 1000)
pub fn occupancy_load(m: &MiscParameters) -> f64 {
    m.occupancy_count * m.occupancy_heat_equiv * m.occupancy_usage_hours / (24.0 * 1000.0)
}

/// 조명 전력(W) × 사용 시간 / (24 × 1000)
pub fn light_load(m: &MiscParameters) -> f64 {
    m.light_power * m.light_usage_hours / (24.0 * 1000.0)
}

/// 도어 히터 용량(kW) × 수량 × 사용 시간 / 24
pub fn door_heater_load(m: &MiscParameters) -> f64 {
    m.door_heater_capacity * m.door_heater_quantity * m.door_heater_usage_hours / 24.0
}

/// 상시 히터(외곽/도어 프레임/트레이/드레인) 정격 × 수량 / 1000. 사용 시간 계수 없음.
pub fn continuous_heater_load(m: &MiscParameters) -> f64 {
    let peripheral = m.peripheral_heaters * m.peripheral_heaters_quantity;
    let door = m.door_heaters * m.door_heaters_quantity;
    let tray = m.tray_heaters * m.tray_heaters_quantity;
    let drain = m.drain_heaters * m.drain_heaters_quantity;
    (peripheral + door + tray + drain) / 1000.0
}

/// 도어 개구 둘레 기준 히터 용량 추정 [kW] = (폭 + 높이)[m] × 2 × 0.025
pub fn door_heater_capacity_from_geometry(m: &MiscParameters) -> f64 {
    (m.door_clear_opening_width + m.door_clear_opening_height) / 1000.0
        * 2.0
        * DOOR_HEATER_KW_PER_M
}

pub fn misc_loads(m: &MiscParameters) -> MiscLoads {
    let air_change = air_change_load(m);
    let equipment = equipment_load(m);
    let occupancy = occupancy_load(m);
    let light = light_load(m);
    let door_heater = door_heater_load(m);
    MiscLoads {
        air_change,
        equipment,
        occupancy,
        light,
        door_heater,
        continuous_heaters: continuous_heater_load(m),
        total: air_change + equipment + occupancy + light + door_heater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_continuous_heaters() {
        // (1.5×8 + 0.27×8 + 2.2 + 0.04) / 1000
        assert_relative_eq!(
            continuous_heater_load(&MiscParameters::default()),
            0.0164,
            max_relative = 1e-12
        );
    }

    #[test]
    fn door_geometry_reproduces_default_capacity() {
        let m = MiscParameters::default();
        assert_relative_eq!(
            door_heater_capacity_from_geometry(&m),
            m.door_heater_capacity,
            max_relative = 1e-12
        );
    }

    #[test]
    fn light_load_default() {
        assert_relative_eq!(
            light_load(&MiscParameters::default()),
            70.0 * 20.0 / 24_000.0
        );
    }
}
