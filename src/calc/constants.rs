//! 부하 환산 상수. 모든 성분이 같은 상수를 공유해야 성분별 TR 합계가 총 TR과 일치한다.

/// 하루 초 수. kW → kJ/24Hr 환산 계수.
pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// 1 냉동톤(US RT) = 12 000 Btu/h ≈ 3.5168528 kW
pub const KW_PER_TR: f64 = 3.516_852_8;

/// 1 TR을 하루 적산 열량으로 본 값 [kJ/24Hr]
pub const KJ_PER_24H_PER_TR: f64 = KW_PER_TR * SECONDS_PER_DAY;

pub const BTU_PER_HOUR_PER_KW: f64 = 3412.142;

/// 공기 현열 계수 [Btu/h per cfm·°F] (표준 공기 밀도 × 비열 × 60)
pub const AIR_SENSIBLE_FACTOR: f64 = 1.08;

/// 도어 프레임 히터 선밀도 [kW/m]
pub const DOOR_HEATER_KW_PER_M: f64 = 0.025;

/// kW 평균값을 하루 적산 kJ로 변환한다.
pub fn kw_to_kj_per_day(kw: f64) -> f64 {
    kw * SECONDS_PER_DAY
}

pub fn watts_to_kj_per_day(watts: f64) -> f64 {
    kw_to_kj_per_day(watts / 1000.0)
}

pub fn kj_per_day_to_kw(kj: f64) -> f64 {
    kj / SECONDS_PER_DAY
}

pub fn kj_per_day_to_tr(kj: f64) -> f64 {
    kj / KJ_PER_24H_PER_TR
}
