//! 냉장실 부하 계산에 쓰이는 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod heat_transfer;
pub mod length;
pub mod load;
pub mod temperature;

pub use area::{convert_area, AreaUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use load::{convert_load, LoadUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
