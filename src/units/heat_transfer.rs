use serde::{Deserialize, Serialize};

/// 단열 패널 열관류율(U) 단위. 내부 기준은 W/m²·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    KcalPerHourSquareMeterC,
    BtuPerHourSquareFootF,
}

impl HeatTransferUnit {
    pub const ALL: [HeatTransferUnit; 3] = [
        HeatTransferUnit::WPerSquareMeterK,
        HeatTransferUnit::KcalPerHourSquareMeterC,
        HeatTransferUnit::BtuPerHourSquareFootF,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/m²K",
            HeatTransferUnit::KcalPerHourSquareMeterC => "kcal/h·m²·°C",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/h·ft²·°F",
        }
    }

    fn w_per_m2k(self) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => 1.0,
            HeatTransferUnit::KcalPerHourSquareMeterC => 1.163,
            HeatTransferUnit::BtuPerHourSquareFootF => 5.678_263,
        }
    }
}

/// 열관류율을 변환한다.
pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    value * from.w_per_m2k() / to.w_per_m2k()
}
