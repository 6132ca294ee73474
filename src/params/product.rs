use serde::{Deserialize, Serialize};

use super::{field, FieldSpec, ParameterRecord, Section};
use crate::product_db::ProductData;

/// 제품(저장물) 열물성 및 입출고 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductParameters {
    /// 표시용 제품명
    pub product_name: String,
    /// 1일 입고량 [kg/24Hr], 기본 2000
    pub product_mass: f64,
    /// 입고 온도 [°C], 기본 25
    pub incoming_temperature: f64,
    /// 출고(최종) 온도 [°C], 기본 2
    pub outgoing_temperature: f64,
    /// 빙결점 [°C], 기본 -0.8
    pub freezing_point: f64,
    /// 빙결점 이상 비열 [kJ/kg·K], 기본 3.65
    pub specific_heat_above_freezing: f64,
    /// 빙결점 이하 비열 [kJ/kg·K], 기본 1.90
    pub specific_heat_below_freezing: f64,
    /// 동결 잠열 [kJ/kg], 기본 250
    pub latent_heat_of_freezing: f64,
    /// 호흡열 [kJ/kg·24Hr], 기본 1.3
    pub respiration_heat: f64,
}

impl Default for ProductParameters {
    fn default() -> Self {
        Self {
            product_name: "General produce".into(),
            product_mass: 2000.0,
            incoming_temperature: 25.0,
            outgoing_temperature: 2.0,
            freezing_point: -0.8,
            specific_heat_above_freezing: 3.65,
            specific_heat_below_freezing: 1.90,
            latent_heat_of_freezing: 250.0,
            respiration_heat: 1.3,
        }
    }
}

impl ProductParameters {
    /// 카탈로그 물성값을 덮어쓴다. 입고량과 입출고 온도는 유지한다.
    pub fn apply_preset(&mut self, preset: &ProductData) {
        self.product_name = preset.name.to_string();
        self.freezing_point = preset.freezing_point_c;
        self.specific_heat_above_freezing = preset.cp_above_kj_per_kgk;
        self.specific_heat_below_freezing = preset.cp_below_kj_per_kgk;
        self.latent_heat_of_freezing = preset.latent_heat_kj_per_kg;
        self.respiration_heat = preset.respiration_kj_per_kg_day;
    }
}

const FIELDS: &[FieldSpec<ProductParameters>] = &[
    field!("productMass", product_mass, "Product Mass", "kg/24Hr", 0),
    field!("incomingTemperature", incoming_temperature, "Incoming Temperature", "°C", 1),
    field!("outgoingTemperature", outgoing_temperature, "Outgoing Temperature", "°C", 1),
    field!("freezingPoint", freezing_point, "Freezing Point", "°C", 1),
    field!(
        "specificHeatAboveFreezing",
        specific_heat_above_freezing,
        "Specific Heat Above Freezing",
        "kJ/kg·K",
        2
    ),
    field!(
        "specificHeatBelowFreezing",
        specific_heat_below_freezing,
        "Specific Heat Below Freezing",
        "kJ/kg·K",
        2
    ),
    field!(
        "latentHeatOfFreezing",
        latent_heat_of_freezing,
        "Latent Heat of Freezing",
        "kJ/kg",
        0
    ),
    field!("respirationHeat", respiration_heat, "Respiration Heat", "kJ/kg·24Hr", 2),
];

impl ParameterRecord for ProductParameters {
    const SECTION: Section = Section::Product;

    fn fields() -> &'static [FieldSpec<Self>] {
        FIELDS
    }
}
