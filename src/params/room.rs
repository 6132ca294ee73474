use serde::{Deserialize, Serialize};

use super::{field, FieldSpec, ParameterRecord, Section};

/// 냉장실 치수/단열/온도 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomParameters {
    /// 내부 길이 [m], 기본 6.0
    pub length: f64,
    /// 내부 폭 [m], 기본 4.0
    pub width: f64,
    /// 내부 높이 [m], 기본 3.0
    pub height: f64,
    /// 외기 온도 [°C], 기본 35
    pub ambient_temperature: f64,
    /// 실내 설계 온도 [°C], 기본 2
    pub room_temperature: f64,
    /// 바닥 하부(지면) 온도 [°C], 기본 30
    pub ground_temperature: f64,
    /// 벽체 열관류율 [W/m²·K], 기본 0.295 (PUF 패널 80mm급)
    pub wall_u_factor: f64,
    /// 천장 열관류율 [W/m²·K]
    pub ceiling_u_factor: f64,
    /// 바닥 열관류율 [W/m²·K]
    pub floor_u_factor: f64,
    /// 증발기 코일 온도차 [K]. 필요 풍량 산정에 쓴다.
    pub coil_temperature_difference: f64,
}

impl Default for RoomParameters {
    fn default() -> Self {
        Self {
            length: 6.0,
            width: 4.0,
            height: 3.0,
            ambient_temperature: 35.0,
            room_temperature: 2.0,
            ground_temperature: 30.0,
            wall_u_factor: 0.295,
            ceiling_u_factor: 0.295,
            floor_u_factor: 0.295,
            coil_temperature_difference: 6.0,
        }
    }
}

impl RoomParameters {
    /// 네 벽 면적 합계 [m²]
    pub fn wall_area(&self) -> f64 {
        2.0 * (self.length + self.width) * self.height
    }

    pub fn ceiling_area(&self) -> f64 {
        self.length * self.width
    }

    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }
}

const FIELDS: &[FieldSpec<RoomParameters>] = &[
    field!("length", length, "Length", "m", 2),
    field!("width", width, "Width", "m", 2),
    field!("height", height, "Height", "m", 2),
    field!("ambientTemperature", ambient_temperature, "Ambient Temperature", "°C", 1),
    field!("roomTemperature", room_temperature, "Room Temperature", "°C", 1),
    field!("groundTemperature", ground_temperature, "Ground Temperature", "°C", 1),
    field!("wallUFactor", wall_u_factor, "Wall U-Factor", "W/m²K", 3),
    field!("ceilingUFactor", ceiling_u_factor, "Ceiling U-Factor", "W/m²K", 3),
    field!("floorUFactor", floor_u_factor, "Floor U-Factor", "W/m²K", 3),
    field!(
        "coilTemperatureDifference",
        coil_temperature_difference,
        "Coil Temperature Difference",
        "K",
        1
    ),
];

impl ParameterRecord for RoomParameters {
    const SECTION: Section = Section::Room;

    fn fields() -> &'static [FieldSpec<Self>] {
        FIELDS
    }
}
