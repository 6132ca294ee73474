//! 저장 품목별 열물성 카탈로그.
//! 값은 ASHRAE 냉동 핸드북 품목표 근사치로 참고용이며, 실제 설계 시 품목 사양으로 검증해야 한다.

#[derive(Debug)]
pub struct ProductData {
    pub code: &'static str,
    pub name: &'static str,
    /// 빙결점 [°C]
    pub freezing_point_c: f64,
    /// 빙결점 이상 비열 [kJ/kg·K]
    pub cp_above_kj_per_kgk: f64,
    /// 빙결점 이하 비열 [kJ/kg·K]
    pub cp_below_kj_per_kgk: f64,
    /// 동결 잠열 [kJ/kg]
    pub latent_heat_kj_per_kg: f64,
    /// 저장 온도대 호흡열 [kJ/kg·24Hr]. 호흡하지 않는 품목은 0.
    pub respiration_kj_per_kg_day: f64,
    /// 권장 저장 온도 [°C]
    pub storage_temp_c: f64,
}

pub fn products() -> &'static [ProductData] {
    PRODUCTS
}

/// 코드나 이름으로 품목을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_product(code: &str) -> Option<&'static ProductData> {
    let code = code.trim();
    PRODUCTS
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code) || p.name.eq_ignore_ascii_case(code))
}

#[allow(clippy::too_many_arguments)]
const fn pd(
    code: &'static str,
    name: &'static str,
    freezing_point_c: f64,
    cp_above_kj_per_kgk: f64,
    cp_below_kj_per_kgk: f64,
    latent_heat_kj_per_kg: f64,
    respiration_kj_per_kg_day: f64,
    storage_temp_c: f64,
) -> ProductData {
    ProductData {
        code,
        name,
        freezing_point_c,
        cp_above_kj_per_kgk,
        cp_below_kj_per_kgk,
        latent_heat_kj_per_kg,
        respiration_kj_per_kg_day,
        storage_temp_c,
    }
}

const PRODUCTS: &[ProductData] = &[
    pd("apple", "Apple", -1.1, 3.64, 1.90, 280.0, 1.3, 0.0),
    pd("potato", "Potato", -0.8, 3.43, 1.80, 258.0, 1.7, 4.0),
    pd("banana", "Banana", -0.8, 3.35, 1.76, 248.0, 4.3, 13.0),
    pd("cabbage", "Cabbage", -0.9, 3.94, 1.97, 306.0, 2.0, 0.0),
    pd("milk", "Milk", -0.6, 3.89, 2.05, 290.0, 0.0, 2.0),
    pd("beef", "Beef (lean)", -1.7, 3.14, 1.68, 220.0, 0.0, 0.0),
    pd("fish", "Fish (fresh)", -2.2, 3.60, 1.89, 260.0, 0.0, -1.0),
    pd("ice_cream", "Ice cream", -5.6, 2.95, 1.63, 210.0, 0.0, -25.0),
    pd("frozen_veg", "Frozen vegetables", -1.0, 3.85, 1.95, 290.0, 0.0, -18.0),
];
