//! 냉장실 냉동 부하 계산기.
//!
//! 세 입력 레코드만 보고 결과 레코드를 새로 만들어 돌려주는 순수 함수이다.
//! 입력 검증은 하지 않으며 0이나 음수도 산술적으로 그대로 전파된다.

pub mod constants;
pub mod miscellaneous;
pub mod product;
pub mod transmission;

use serde::Serialize;

use crate::params::{MiscParameters, ProductParameters, RoomParameters};
use constants::{
    kj_per_day_to_kw, kj_per_day_to_tr, kw_to_kj_per_day, AIR_SENSIBLE_FACTOR,
    BTU_PER_HOUR_PER_KW,
};

/// 계산 결과. 필드는 모두 평평한 숫자이며 단위는 이름 접미사/주석을 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatLoadResults {
    // 전열면적 [m²]
    pub wall_area: f64,
    pub ceiling_area: f64,
    pub floor_area: f64,

    // 전도 부하 [kJ/24Hr]
    pub wall_load: f64,
    pub ceiling_load: f64,
    pub floor_load: f64,
    pub total_transmission_load: f64,

    // 제품 부하 [kJ/24Hr]
    pub product_sensible_above_freezing: f64,
    pub product_latent_load: f64,
    pub product_sensible_below_freezing: f64,
    pub product_load: f64,
    pub respiration_load: f64,

    // 기타 부하 [kW]
    pub air_change_load_kw: f64,
    pub equipment_load_kw: f64,
    pub occupancy_load_kw: f64,
    pub light_load_kw: f64,
    pub door_heater_load_kw: f64,
    pub continuous_heater_load_kw: f64,
    pub total_misc_load_kw: f64,

    // 기타 부하 [kJ/24Hr]
    pub air_change_load: f64,
    pub equipment_load: f64,
    pub occupancy_load: f64,
    pub light_load: f64,
    pub door_heater_load: f64,
    pub continuous_heater_load: f64,
    pub total_misc_load: f64,

    // 합계
    pub total_load_kj: f64,
    pub total_load_kw: f64,
    pub refrigeration_capacity_tr: f64,
    pub total_load_tr: f64,
    pub capacity_including_safety: f64,

    // 성분별 TR
    pub wall_load_tr: f64,
    pub ceiling_load_tr: f64,
    pub floor_load_tr: f64,
    pub product_load_tr: f64,
    pub respiration_load_tr: f64,
    pub air_change_load_tr: f64,
    pub equipment_load_tr: f64,
    pub occupancy_load_tr: f64,
    pub light_load_tr: f64,
    pub door_heater_load_tr: f64,

    // 열 분포
    pub sensible_heat: f64,
    pub latent_heat: f64,
    pub sensible_heat_ratio: f64,
    /// 필요 풍량 [cfm]
    pub air_qty_required: f64,

    /// 도어 개구 치수로 추정한 도어 히터 용량 [kW]
    pub door_heater_capacity_from_geometry: f64,
}

/// 부하 합계 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadCategory {
    Transmission,
    Product,
    Miscellaneous,
}

/// 총 부하를 이루는 열 개의 성분. 각 성분은 정확히 한 분류에 속한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadComponent {
    Wall,
    Ceiling,
    Floor,
    Product,
    Respiration,
    AirChange,
    Equipment,
    Occupancy,
    Light,
    DoorHeater,
}

impl LoadComponent {
    pub const ALL: [LoadComponent; 10] = [
        LoadComponent::Wall,
        LoadComponent::Ceiling,
        LoadComponent::Floor,
        LoadComponent::Product,
        LoadComponent::Respiration,
        LoadComponent::AirChange,
        LoadComponent::Equipment,
        LoadComponent::Occupancy,
        LoadComponent::Light,
        LoadComponent::DoorHeater,
    ];

    pub fn category(self) -> LoadCategory {
        match self {
            LoadComponent::Wall | LoadComponent::Ceiling | LoadComponent::Floor => {
                LoadCategory::Transmission
            }
            LoadComponent::Product | LoadComponent::Respiration => LoadCategory::Product,
            LoadComponent::AirChange
            | LoadComponent::Equipment
            | LoadComponent::Occupancy
            | LoadComponent::Light
            | LoadComponent::DoorHeater => LoadCategory::Miscellaneous,
        }
    }

    /// 보고서 번역 키 접미사. `report.<key>` / `report.<key>_tr`로 쓴다.
    pub fn key(self) -> &'static str {
        match self {
            LoadComponent::Wall => "wall_load",
            LoadComponent::Ceiling => "ceiling_load",
            LoadComponent::Floor => "floor_load",
            LoadComponent::Product => "product_load",
            LoadComponent::Respiration => "respiration_load",
            LoadComponent::AirChange => "air_change_load",
            LoadComponent::Equipment => "equipment_load",
            LoadComponent::Occupancy => "occupancy_load",
            LoadComponent::Light => "light_load",
            LoadComponent::DoorHeater => "door_heater_load",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            LoadComponent::Wall => "Wall Load",
            LoadComponent::Ceiling => "Ceiling Load",
            LoadComponent::Floor => "Floor Load",
            LoadComponent::Product => "Product Load",
            LoadComponent::Respiration => "Respiration Load",
            LoadComponent::AirChange => "Air Change Load",
            LoadComponent::Equipment => "Equipment Load",
            LoadComponent::Occupancy => "Occupancy Load",
            LoadComponent::Light => "Light Load",
            LoadComponent::DoorHeater => "Door Heater Load",
        }
    }

    /// 성분 부하 [kJ/24Hr]
    pub fn kj_per_day(self, r: &HeatLoadResults) -> f64 {
        match self {
            LoadComponent::Wall => r.wall_load,
            LoadComponent::Ceiling => r.ceiling_load,
            LoadComponent::Floor => r.floor_load,
            LoadComponent::Product => r.product_load,
            LoadComponent::Respiration => r.respiration_load,
            LoadComponent::AirChange => r.air_change_load,
            LoadComponent::Equipment => r.equipment_load,
            LoadComponent::Occupancy => r.occupancy_load,
            LoadComponent::Light => r.light_load,
            LoadComponent::DoorHeater => r.door_heater_load,
        }
    }

    pub fn tr(self, r: &HeatLoadResults) -> f64 {
        match self {
            LoadComponent::Wall => r.wall_load_tr,
            LoadComponent::Ceiling => r.ceiling_load_tr,
            LoadComponent::Floor => r.floor_load_tr,
            LoadComponent::Product => r.product_load_tr,
            LoadComponent::Respiration => r.respiration_load_tr,
            LoadComponent::AirChange => r.air_change_load_tr,
            LoadComponent::Equipment => r.equipment_load_tr,
            LoadComponent::Occupancy => r.occupancy_load_tr,
            LoadComponent::Light => r.light_load_tr,
            LoadComponent::DoorHeater => r.door_heater_load_tr,
        }
    }
}

impl HeatLoadResults {
    /// 분류별 합계 [kJ/24Hr]
    pub fn category_total(&self, category: LoadCategory) -> f64 {
        match category {
            LoadCategory::Transmission => self.total_transmission_load,
            LoadCategory::Product => self.product_load + self.respiration_load,
            LoadCategory::Miscellaneous => self.total_misc_load,
        }
    }
}

/// 분모가 정확히 0이면 NaN/∞ 대신 0을 돌려준다.
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// 세 입력 레코드로 냉동 부하를 계산한다.
pub fn calculate_heat_load(
    room: &RoomParameters,
    product: &ProductParameters,
    misc: &MiscParameters,
) -> HeatLoadResults {
    let tx = transmission::transmission_loads(room);
    let pr = product::product_loads(product);
    let ms = miscellaneous::misc_loads(misc);

    let air_change_load = kw_to_kj_per_day(ms.air_change);
    let equipment_load = kw_to_kj_per_day(ms.equipment);
    let occupancy_load = kw_to_kj_per_day(ms.occupancy);
    let light_load = kw_to_kj_per_day(ms.light);
    let door_heater_load = kw_to_kj_per_day(ms.door_heater);
    let total_misc_load =
        air_change_load + equipment_load + occupancy_load + light_load + door_heater_load;

    let total_load_kj = tx.total + pr.total + pr.respiration + total_misc_load;
    let refrigeration_capacity_tr = kj_per_day_to_tr(total_load_kj);

    let latent_heat = pr.latent;
    let sensible_heat = tx.total
        + pr.sensible_above
        + pr.sensible_below
        + pr.respiration
        + total_misc_load;

    // 현열 [Btu/h] / (1.08 × 코일 ΔT[°F])
    let sensible_btu_h = kj_per_day_to_kw(sensible_heat) * BTU_PER_HOUR_PER_KW;
    let coil_dt_f = room.coil_temperature_difference * 1.8;
    let air_qty_required = ratio_or_zero(sensible_btu_h, AIR_SENSIBLE_FACTOR * coil_dt_f);

    let results = HeatLoadResults {
        wall_area: tx.wall_area,
        ceiling_area: tx.ceiling_area,
        floor_area: tx.floor_area,

        wall_load: tx.wall_load,
        ceiling_load: tx.ceiling_load,
        floor_load: tx.floor_load,
        total_transmission_load: tx.total,

        product_sensible_above_freezing: pr.sensible_above,
        product_latent_load: pr.latent,
        product_sensible_below_freezing: pr.sensible_below,
        product_load: pr.total,
        respiration_load: pr.respiration,

        air_change_load_kw: ms.air_change,
        equipment_load_kw: ms.equipment,
        occupancy_load_kw: ms.occupancy,
        light_load_kw: ms.light,
        door_heater_load_kw: ms.door_heater,
        continuous_heater_load_kw: ms.continuous_heaters,
        total_misc_load_kw: ms.total,

        air_change_load,
        equipment_load,
        occupancy_load,
        light_load,
        door_heater_load,
        continuous_heater_load: kw_to_kj_per_day(ms.continuous_heaters),
        total_misc_load,

        total_load_kj,
        total_load_kw: kj_per_day_to_kw(total_load_kj),
        refrigeration_capacity_tr,
        total_load_tr: refrigeration_capacity_tr,
        capacity_including_safety: refrigeration_capacity_tr
            * (1.0 + misc.safety_percent / 100.0),

        wall_load_tr: kj_per_day_to_tr(tx.wall_load),
        ceiling_load_tr: kj_per_day_to_tr(tx.ceiling_load),
        floor_load_tr: kj_per_day_to_tr(tx.floor_load),
        product_load_tr: kj_per_day_to_tr(pr.total),
        respiration_load_tr: kj_per_day_to_tr(pr.respiration),
        air_change_load_tr: kj_per_day_to_tr(air_change_load),
        equipment_load_tr: kj_per_day_to_tr(equipment_load),
        occupancy_load_tr: kj_per_day_to_tr(occupancy_load),
        light_load_tr: kj_per_day_to_tr(light_load),
        door_heater_load_tr: kj_per_day_to_tr(door_heater_load),

        sensible_heat,
        latent_heat,
        sensible_heat_ratio: ratio_or_zero(sensible_heat, sensible_heat + latent_heat),
        air_qty_required,

        door_heater_capacity_from_geometry: miscellaneous::door_heater_capacity_from_geometry(
            misc,
        ),
    };

    tracing::debug!(
        total_load_kj = results.total_load_kj,
        capacity_tr = results.refrigeration_capacity_tr,
        "heat load calculated"
    );
    results
}
