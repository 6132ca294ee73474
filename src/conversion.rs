use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 물리량 이름
    #[error("unknown quantity: {0}")]
    UnknownQuantity(String),
}

/// 문자열로 지정할 수 있는 단위 enum.
///
/// 표시 기호(`symbol`)와 별칭은 대소문자 없이 비교한다.
trait Unit: Copy + 'static {
    fn all() -> &'static [Self];
    fn symbol(self) -> &'static str;
    fn aliases(self) -> &'static [&'static str];
    fn convert(value: f64, from: Self, to: Self) -> f64;

    fn parse(s: &str) -> Result<Self, ConversionError> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|u| u.symbol().to_lowercase() == wanted || u.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

macro_rules! unit {
    ($ty:ident, $convert:ident, { $($variant:ident => [$($alias:literal),* $(,)?]),+ $(,)? }) => {
        impl Unit for $ty {
            fn all() -> &'static [Self] {
                &$ty::ALL
            }
            fn symbol(self) -> &'static str {
                $ty::symbol(self)
            }
            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($ty::$variant => &[$($alias),*],)+
                }
            }
            fn convert(value: f64, from: Self, to: Self) -> f64 {
                $convert(value, from, to)
            }
        }
    };
}

unit!(TemperatureUnit, convert_temperature, {
    Celsius => ["c", "degc", "celsius"],
    Kelvin => ["kelvin"],
    Fahrenheit => ["f", "degf", "fahrenheit"],
});

// 온도차에서는 °C 간격과 K 간격이 같다.
unit!(TemperatureDiffUnit, convert_temperature_diff, {
    Kelvin => ["kelvin", "c", "°c", "degc"],
    Fahrenheit => ["f", "degf", "fahrenheit"],
});

unit!(LengthUnit, convert_length, {
    Millimeter => ["millimeter", "millimetre"],
    Meter => ["meter", "metre"],
    Inch => ["inch", "\""],
    Foot => ["foot", "feet", "'"],
});

unit!(AreaUnit, convert_area, {
    SquareMeter => ["m2", "m^2", "sqm"],
    SquareFoot => ["ft2", "ft^2", "sqft"],
});

unit!(HeatTransferUnit, convert_heat_transfer, {
    WPerSquareMeterK => ["w/m2k", "w/m^2k", "w/m2.k"],
    KcalPerHourSquareMeterC => ["kcal/hm2c", "kcal/h.m2.c"],
    BtuPerHourSquareFootF => ["btu/h-ft2-f", "btu/hft2f", "btu/h.ft2.f"],
});

unit!(LoadUnit, convert_load, {
    Watt => ["watt"],
    Kilowatt => ["kilowatt"],
    KjPer24h => ["kj/24h", "kj/day", "kj/d"],
    KjPerHour => ["kj/hr"],
    KcalPerHour => ["kcal/hr"],
    BtuPerHour => ["btu/hr", "btuh"],
    TonRefrigeration => ["ton", "rt", "usrt"],
});

fn convert_as<U: Unit>(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    Ok(U::convert(value, U::parse(from)?, U::parse(to)?))
}

/// 물리량 종류에 맞는 단위 문자열 두 개로 값을 환산한다.
///
/// 단위는 `°C`, `mm`, `W/m²K`, `kJ/24Hr`, `TR` 같은 표시 기호나 `C`, `m2`, `btuh` 같은 별칭을 받는다.
pub fn convert(kind: QuantityKind, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => convert_as::<TemperatureUnit>(value, from, to),
        QuantityKind::TemperatureDifference => convert_as::<TemperatureDiffUnit>(value, from, to),
        QuantityKind::Length => convert_as::<LengthUnit>(value, from, to),
        QuantityKind::Area => convert_as::<AreaUnit>(value, from, to),
        QuantityKind::HeatTransferCoeff => convert_as::<HeatTransferUnit>(value, from, to),
        QuantityKind::Load => convert_as::<LoadUnit>(value, from, to),
    }
}

/// 물리량 이름까지 문자열로 받는 버전. CLI `convert` 명령에서 쓴다.
pub fn convert_named(kind: &str, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let kind =
        QuantityKind::parse(kind).ok_or_else(|| ConversionError::UnknownQuantity(kind.into()))?;
    convert(kind, value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_and_aliases_resolve_to_same_unit() {
        assert_eq!(LoadUnit::parse("kJ/24Hr").unwrap(), LoadUnit::KjPer24h);
        assert_eq!(LoadUnit::parse(" kj/day ").unwrap(), LoadUnit::KjPer24h);
        assert_eq!(TemperatureUnit::parse("°c").unwrap(), TemperatureUnit::Celsius);
        assert_eq!(AreaUnit::parse("M2").unwrap(), AreaUnit::SquareMeter);
    }

    #[test]
    fn celsius_interval_equals_kelvin_interval() {
        let out = convert(QuantityKind::TemperatureDifference, 5.0, "C", "K").unwrap();
        assert_eq!(out, 5.0);
    }
}
