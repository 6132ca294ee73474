use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 지원 언어. 영어 문자열은 호출부의 기본값을 그대로 쓰고, 한국어는 내장 표를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 번역기. 언어팩 파일이 있으면 내장 문자열보다 우선한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Translator {
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(`<dir>/<code>.toml`)로 번역기를 만든다.
    /// 파일이 없으면 내장 문자열만 쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, dir = ?pack_dir, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩 → 내장 표 순으로 찾는다.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Some(v.clone());
        }
        match self.lang {
            Language::Ko => ko(key).map(str::to_string),
            Language::En => None,
        }
    }

    /// 번역 문자열. 없으면 `default`(영문)를 돌려준다.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}

/// CLI 플래그 → 설정 → 시스템 로케일 순으로 언어 코드를 정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 언어팩을 읽는다. 중첩 테이블은 `a.b.c` 형태의 플랫 키로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    try_load(lang).or_else(|| {
        lang.split_once(['-', '_'])
            .and_then(|(base, _)| try_load(base))
    })
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    Some(match key {
        "general.error_prefix" => "오류",
        "general.app_exit" => "프로그램을 종료합니다.",
        "general.invalid_selection" => "잘못된 입력입니다. 다시 선택하세요.",
        "general.saved" => "저장되었습니다.",

        "main_menu.title" => "=== 냉장실 열부하 계산기 ===",
        "main_menu.room" => "1) 실(Room) 파라미터 편집",
        "main_menu.product" => "2) 제품 파라미터 편집",
        "main_menu.misc" => "3) 기타 부하 파라미터 편집",
        "main_menu.results" => "4) 계산 결과 보기",
        "main_menu.export" => "5) 보고서 내보내기",
        "main_menu.preset" => "6) 제품 프리셋 적용",
        "main_menu.unit_conversion" => "7) 단위 변환기",
        "main_menu.settings" => "8) 설정",
        "main_menu.exit" => "0) 종료",
        "prompt.menu_select" => "메뉴 선택: ",
        "prompt.select" => "선택: ",
        "prompt.field_number" => "수정할 필드 번호 (엔터=뒤로, r=기본값 복원): ",
        "prompt.new_value" => "새 값: ",
        "prompt.product_name" => "제품명: ",
        "prompt.preset_code" => "품목 코드: ",
        "prompt.report_format" => "형식 1=텍스트 2=Markdown 3=TOML: ",
        "prompt.report_path" => "저장 경로 (엔터=기본 폴더): ",
        "prompt.value" => "값 입력: ",
        "prompt.from_unit" => "입력 단위: ",
        "prompt.to_unit" => "변환 단위: ",
        "prompt.language" => "언어 (auto/en/ko, 엔터=취소): ",

        "edit.updated" => "갱신됨",
        "edit.reset" => "기본값으로 복원했습니다.",
        "edit.coerced_zero" => "숫자가 아니어서 0으로 저장했습니다.",
        "edit.truncated" => "숫자 뒤의 문자는 무시했습니다.",
        "store.save_failed" => "파라미터 저장 실패",
        "export.done" => "보고서를 저장했습니다",
        "export.failed" => "보고서 내보내기 실패",
        "preset.applied" => "프리셋을 적용했습니다",
        "preset.list_heading" => "-- 제품 프리셋 --",
        "conversion.heading" => "-- 단위 변환 --",
        "conversion.result" => "변환 결과",
        "settings.heading" => "-- 설정 --",
        "settings.current_language" => "현재 언어",

        "section.room" => "실 파라미터",
        "section.product" => "제품 파라미터",
        "section.misc" => "기타 부하 파라미터",

        "quantity.temperature" => "온도",
        "quantity.temperature_diff" => "온도차",
        "quantity.length" => "길이",
        "quantity.area" => "면적",
        "quantity.u_factor" => "열관류율",
        "quantity.load" => "열부하",

        "report.title" => "냉장실 열부하 요약",
        "report.subtitle" => "냉장실 냉동 설비 주요 계산 결과",
        "report.section.final" => "최종 결과",
        "report.section.transmission" => "전도 부하 (kJ/24Hr)",
        "report.section.product_other" => "제품 및 기타 부하 (kJ/24Hr)",
        "report.section.tr" => "성분별 TR",
        "report.section.distribution" => "열 분포",
        "report.total_load_kj" => "부하 (kJ/24Hr)",
        "report.total_load_kw" => "부하 (kW)",
        "report.refrigeration_capacity" => "냉동 능력",
        "report.capacity_including_safety" => "안전율 포함 능력",
        "report.total_transmission" => "전도 부하 합계",
        "report.total_misc" => "기타 부하 합계",
        "report.continuous_heaters" => "상시 히터 부하",
        "report.total_load_tr" => "총 부하 TR",
        "report.sensible_heat" => "현열",
        "report.latent_heat" => "잠열",
        "report.sensible_heat_ratio" => "현열비",
        "report.air_qty_required" => "필요 풍량",
        "report.wall_load" => "벽체 부하",
        "report.ceiling_load" => "천장 부하",
        "report.floor_load" => "바닥 부하",
        "report.product_load" => "제품 부하",
        "report.respiration_load" => "호흡열 부하",
        "report.air_change_load" => "환기 부하",
        "report.equipment_load" => "장비 부하",
        "report.occupancy_load" => "인원 부하",
        "report.light_load" => "조명 부하",
        "report.door_heater_load" => "도어 히터 부하",
        "report.wall_load_tr" => "벽체 부하 TR",
        "report.ceiling_load_tr" => "천장 부하 TR",
        "report.floor_load_tr" => "바닥 부하 TR",
        "report.product_load_tr" => "제품 부하 TR",
        "report.respiration_load_tr" => "호흡열 부하 TR",
        "report.air_change_load_tr" => "환기 부하 TR",
        "report.equipment_load_tr" => "장비 부하 TR",
        "report.occupancy_load_tr" => "인원 부하 TR",
        "report.light_load_tr" => "조명 부하 TR",
        "report.door_heater_load_tr" => "도어 히터 부하 TR",

        "field.length" => "길이",
        "field.width" => "폭",
        "field.height" => "높이",
        "field.ambientTemperature" => "외기 온도",
        "field.roomTemperature" => "실내 온도",
        "field.groundTemperature" => "지면 온도",
        "field.wallUFactor" => "벽체 열관류율",
        "field.ceilingUFactor" => "천장 열관류율",
        "field.floorUFactor" => "바닥 열관류율",
        "field.coilTemperatureDifference" => "코일 온도차",
        "field.productMass" => "입고량",
        "field.incomingTemperature" => "입고 온도",
        "field.outgoingTemperature" => "출고 온도",
        "field.freezingPoint" => "빙결점",
        "field.specificHeatAboveFreezing" => "빙결점 이상 비열",
        "field.specificHeatBelowFreezing" => "빙결점 이하 비열",
        "field.latentHeatOfFreezing" => "동결 잠열",
        "field.respirationHeat" => "호흡열",
        "field.airChangeRate" => "환기량",
        "field.enthalpyDiff" => "엔탈피 차",
        "field.hoursOfLoad" => "부하 시간",
        "field.fanMotorRating" => "팬 모터 정격",
        "field.equipmentQuantity" => "장비 수량",
        "field.equipmentUsageHours" => "장비 사용 시간",
        "field.occupancyCount" => "인원 수",
        "field.occupancyHeatEquiv" => "1인당 발열",
        "field.occupancyUsageHours" => "인원 체류 시간",
        "field.lightPower" => "조명 전력",
        "field.lightUsageHours" => "조명 사용 시간",
        "field.doorHeaterCapacity" => "도어 히터 용량",
        "field.doorHeaterQuantity" => "도어 히터 수량",
        "field.doorHeaterUsageHours" => "도어 히터 사용 시간",
        "field.peripheralHeaters" => "외곽 히터",
        "field.peripheralHeatersQuantity" => "외곽 히터 수량",
        "field.doorHeaters" => "도어 프레임 히터",
        "field.doorHeatersQuantity" => "도어 프레임 히터 수량",
        "field.trayHeaters" => "트레이 히터",
        "field.trayHeatersQuantity" => "트레이 히터 수량",
        "field.drainHeaters" => "드레인 히터",
        "field.drainHeatersQuantity" => "드레인 히터 수량",
        "field.doorClearOpeningWidth" => "도어 유효 폭",
        "field.doorClearOpeningHeight" => "도어 유효 높이",
        "field.safetyPercent" => "안전율",

        "main_menu.app_title" => "냉장실 열부하 계산기",
        "gui.nav.heading" => "메뉴",
        "gui.apply" => "적용",
        "gui.unit.quantity" => "물리량",
        "gui.settings_save" => "설정 저장",
        "gui.tab.room" => "실",
        "gui.tab.product" => "제품",
        "gui.tab.misc" => "기타 부하",
        "gui.tab.results" => "결과",
        "gui.tab.convert" => "단위 변환",
        "gui.export" => "보고서 저장",
        "gui.reset_section" => "기본값 복원",
        "gui.preset" => "제품 프리셋",
        "gui.product_name" => "제품명",
        "gui.settings" => "설정",
        "gui.language" => "언어",
        "gui.door_heater_hint" => "개구 치수 기준 도어 히터 용량",
        "gui.misc_total" => "기타 부하 합계",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_uses_default_text() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.text("report.wall_load", "Wall Load"), "Wall Load");
    }

    #[test]
    fn korean_has_built_in_strings() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.text("report.wall_load", "Wall Load"), "벽체 부하");
        assert_eq!(tr.text("no.such.key", "fallback"), "fallback");
    }

    #[test]
    fn nested_pack_is_flattened() {
        let map = parse_toml_to_map("[report]\nwall_load = \"Walls\"\n").unwrap();
        assert_eq!(map.get("report.wall_load").map(String::as_str), Some("Walls"));
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-GB")), "en");
    }
}
