use serde::{Deserialize, Serialize};

use super::{field, FieldSpec, ParameterRecord, Section};

/// 환기/장비/인원/조명/히터 등 기타 부하 조건.
///
/// 기본값은 기준 엑셀 시트와 동일하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiscParameters {
    /// 환기량 [L/s]
    pub air_change_rate: f64,
    /// 외기-실내 엔탈피 차 [kJ/L]
    pub enthalpy_diff: f64,
    /// 환기 부하 발생 시간 [h]
    pub hours_of_load: f64,

    /// 팬 모터 정격 [kW]
    pub fan_motor_rating: f64,
    #[serde(alias = "fanQuantity")]
    pub equipment_quantity: f64,
    pub equipment_usage_hours: f64,

    /// 인원 수
    pub occupancy_count: f64,
    /// 1인당 발열 [W]
    pub occupancy_heat_equiv: f64,
    pub occupancy_usage_hours: f64,

    /// 조명 전력 [W]
    pub light_power: f64,
    pub light_usage_hours: f64,

    /// 도어 히터 용량 [kW]
    pub door_heater_capacity: f64,
    pub door_heater_quantity: f64,
    pub door_heater_usage_hours: f64,

    // 상시 운전 히터 (정격 × 수량 / 1000)
    pub peripheral_heaters: f64,
    pub peripheral_heaters_quantity: f64,
    pub door_heaters: f64,
    pub door_heaters_quantity: f64,
    pub tray_heaters: f64,
    pub tray_heaters_quantity: f64,
    pub drain_heaters: f64,
    pub drain_heaters_quantity: f64,

    /// 도어 유효 개구 폭 [mm]
    pub door_clear_opening_width: f64,
    /// 도어 유효 개구 높이 [mm]
    pub door_clear_opening_height: f64,

    /// 냉동능력 안전율 [%]. 10이면 1.1배.
    #[serde(alias = "capacityIncludingSafety")]
    pub safety_percent: f64,
}

impl Default for MiscParameters {
    fn default() -> Self {
        Self {
            air_change_rate: 3.4,
            enthalpy_diff: 0.10,
            hours_of_load: 20.0,
            fan_motor_rating: 0.37,
            equipment_quantity: 3.0,
            equipment_usage_hours: 8.0,
            occupancy_count: 1.0,
            occupancy_heat_equiv: 275.0,
            occupancy_usage_hours: 20.0,
            light_power: 70.0,
            light_usage_hours: 20.0,
            door_heater_capacity: 0.145,
            door_heater_quantity: 1.0,
            door_heater_usage_hours: 20.0,
            peripheral_heaters: 1.5,
            peripheral_heaters_quantity: 8.0,
            door_heaters: 0.27,
            door_heaters_quantity: 8.0,
            tray_heaters: 2.2,
            tray_heaters_quantity: 1.0,
            drain_heaters: 0.04,
            drain_heaters_quantity: 1.0,
            door_clear_opening_width: 900.0,
            door_clear_opening_height: 2000.0,
            safety_percent: 10.0,
        }
    }
}

impl MiscParameters {
    /// 사용 시간 계수가 붙는 필드를 모두 0으로 만든다. 휴지 조건 점검용.
    pub fn with_zero_usage_hours(mut self) -> Self {
        self.hours_of_load = 0.0;
        self.equipment_usage_hours = 0.0;
        self.occupancy_usage_hours = 0.0;
        self.light_usage_hours = 0.0;
        self.door_heater_usage_hours = 0.0;
        self
    }
}

const FIELDS: &[FieldSpec<MiscParameters>] = &[
    field!("airChangeRate", air_change_rate, "Air Change Rate", "L/S", 2),
    field!("enthalpyDiff", enthalpy_diff, "Enthalpy Difference", "kJ/L", 2),
    field!("hoursOfLoad", hours_of_load, "Hours of Load", "hrs", 0),
    field!("fanMotorRating", fan_motor_rating, "Fan Motor Rating", "kW", 2),
    field!("equipmentQuantity", equipment_quantity, "Equipment Quantity", "", 0),
    field!("equipmentUsageHours", equipment_usage_hours, "Equipment Usage Hours", "hrs", 0),
    field!("occupancyCount", occupancy_count, "Number of People", "", 1),
    field!("occupancyHeatEquiv", occupancy_heat_equiv, "Heat per Person", "W", 0),
    field!("occupancyUsageHours", occupancy_usage_hours, "Occupancy Usage Hours", "hrs", 0),
    field!("lightPower", light_power, "Light Power", "W", 0),
    field!("lightUsageHours", light_usage_hours, "Light Usage Hours", "hrs", 0),
    field!("doorHeaterCapacity", door_heater_capacity, "Door Heater Capacity", "kW", 3),
    field!("doorHeaterQuantity", door_heater_quantity, "Door Heater Quantity", "", 0),
    field!(
        "doorHeaterUsageHours",
        door_heater_usage_hours,
        "Door Heater Usage Hours",
        "hrs",
        0
    ),
    field!("peripheralHeaters", peripheral_heaters, "Peripheral Heaters", "W", 2),
    field!(
        "peripheralHeatersQuantity",
        peripheral_heaters_quantity,
        "Peripheral Heaters Quantity",
        "",
        0
    ),
    field!("doorHeaters", door_heaters, "Door Frame Heaters", "W", 2),
    field!("doorHeatersQuantity", door_heaters_quantity, "Door Frame Heaters Quantity", "", 0),
    field!("trayHeaters", tray_heaters, "Tray Heaters", "W", 2),
    field!("trayHeatersQuantity", tray_heaters_quantity, "Tray Heaters Quantity", "", 0),
    field!("drainHeaters", drain_heaters, "Drain Heaters", "W", 2),
    field!("drainHeatersQuantity", drain_heaters_quantity, "Drain Heaters Quantity", "", 0),
    field!(
        "doorClearOpeningWidth",
        door_clear_opening_width,
        "Door Clear Opening Width",
        "mm",
        0
    ),
    field!(
        "doorClearOpeningHeight",
        door_clear_opening_height,
        "Door Clear Opening Height",
        "mm",
        0
    ),
    field!("safetyPercent", safety_percent, "Capacity Including Safety", "%", 0),
];

const ALIASES: &[(&str, &str)] = &[
    ("fanQuantity", "equipmentQuantity"),
    ("capacityIncludingSafety", "safetyPercent"),
];

impl ParameterRecord for MiscParameters {
    const SECTION: Section = Section::Misc;

    fn fields() -> &'static [FieldSpec<Self>] {
        FIELDS
    }

    fn aliases() -> &'static [(&'static str, &'static str)] {
        ALIASES
    }
}
