//! 냉장실 열부하 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod calc;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod params;
pub mod product_db;
pub mod quantity;
pub mod report;
pub mod store;
pub mod ui_cli;
pub mod units;
