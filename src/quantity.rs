/// 단위 변환기에서 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Length,
    Area,
    HeatTransferCoeff,
    Load,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Temperature,
        QuantityKind::TemperatureDifference,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::HeatTransferCoeff,
        QuantityKind::Load,
    ];

    /// 번역 키. 화면 표시용 라벨을 조회할 때 쓴다.
    pub fn label_key(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "quantity.temperature",
            QuantityKind::TemperatureDifference => "quantity.temperature_diff",
            QuantityKind::Length => "quantity.length",
            QuantityKind::Area => "quantity.area",
            QuantityKind::HeatTransferCoeff => "quantity.u_factor",
            QuantityKind::Load => "quantity.load",
        }
    }

    /// 영문 기본 라벨.
    pub fn default_label(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "Temperature",
            QuantityKind::TemperatureDifference => "Temperature difference",
            QuantityKind::Length => "Length",
            QuantityKind::Area => "Area",
            QuantityKind::HeatTransferCoeff => "U-factor",
            QuantityKind::Load => "Heat load",
        }
    }

    /// CLI 인자(`temp`, `load` 등)를 물리량으로 해석한다.
    pub fn parse(s: &str) -> Option<QuantityKind> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "temperature" | "temp" | "t" => Some(QuantityKind::Temperature),
            "temperature-diff" | "dt" | "delta-t" => Some(QuantityKind::TemperatureDifference),
            "length" | "len" => Some(QuantityKind::Length),
            "area" => Some(QuantityKind::Area),
            "u" | "u-factor" | "heat-transfer" => Some(QuantityKind::HeatTransferCoeff),
            "load" | "power" | "capacity" => Some(QuantityKind::Load),
            _ => None,
        }
    }

    /// 해당 물리량이 지원하는 단위 기호 목록.
    pub fn unit_symbols(self) -> Vec<&'static str> {
        use crate::units::*;
        match self {
            QuantityKind::Temperature => TemperatureUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::TemperatureDifference => {
                TemperatureDiffUnit::ALL.iter().map(|u| u.symbol()).collect()
            }
            QuantityKind::Length => LengthUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::Area => AreaUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::HeatTransferCoeff => {
                HeatTransferUnit::ALL.iter().map(|u| u.symbol()).collect()
            }
            QuantityKind::Load => LoadUnit::ALL.iter().map(|u| u.symbol()).collect(),
        }
    }
}
