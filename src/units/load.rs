use serde::{Deserialize, Serialize};

use crate::calc::constants::{BTU_PER_HOUR_PER_KW, KW_PER_TR, SECONDS_PER_DAY};

/// 냉동 부하(열유량) 단위. 내부 기준은 kW이다.
///
/// kJ/24Hr는 하루 적산 열량을 평균 열유량으로 본 값이고,
/// TR 환산은 부하 계산과 같은 상수를 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadUnit {
    Watt,
    Kilowatt,
    KjPer24h,
    KjPerHour,
    KcalPerHour,
    BtuPerHour,
    TonRefrigeration,
}

impl LoadUnit {
    pub const ALL: [LoadUnit; 7] = [
        LoadUnit::Watt,
        LoadUnit::Kilowatt,
        LoadUnit::KjPer24h,
        LoadUnit::KjPerHour,
        LoadUnit::KcalPerHour,
        LoadUnit::BtuPerHour,
        LoadUnit::TonRefrigeration,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            LoadUnit::Watt => "W",
            LoadUnit::Kilowatt => "kW",
            LoadUnit::KjPer24h => "kJ/24Hr",
            LoadUnit::KjPerHour => "kJ/h",
            LoadUnit::KcalPerHour => "kcal/h",
            LoadUnit::BtuPerHour => "Btu/h",
            LoadUnit::TonRefrigeration => "TR",
        }
    }

    /// 1 단위가 몇 kW인지 반환한다.
    fn kilowatts(self) -> f64 {
        match self {
            LoadUnit::Watt => 0.001,
            LoadUnit::Kilowatt => 1.0,
            LoadUnit::KjPer24h => 1.0 / SECONDS_PER_DAY,
            LoadUnit::KjPerHour => 1.0 / 3600.0,
            LoadUnit::KcalPerHour => 4.1868 / 3600.0,
            LoadUnit::BtuPerHour => 1.0 / BTU_PER_HOUR_PER_KW,
            LoadUnit::TonRefrigeration => KW_PER_TR,
        }
    }
}

/// 부하를 다른 단위로 변환한다.
pub fn convert_load(value: f64, from: LoadUnit, to: LoadUnit) -> f64 {
    value * from.kilowatts() / to.kilowatts()
}
