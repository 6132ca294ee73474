//! 냉장실 부하 계산 입력 레코드(실/제품/기타)와 입력 경계 규칙.
//!
//! 세 레코드는 모두 평평한 키-값 구조이며, 키 이름은 기존 저장소 형식과 같은
//! camelCase를 쓴다. 누락된 필드는 역직렬화 시점에 한 번에 기본값으로 채워지므로
//! 계산 로직은 값의 유무를 분기하지 않는다.

pub mod misc;
pub mod product;
pub mod room;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::{self, HeatLoadResults};

pub use misc::MiscParameters;
pub use product::ProductParameters;
pub use room::RoomParameters;

/// 파라미터 조회/수정 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown field `{key}` in {section} parameters")]
    UnknownField { section: Section, key: String },
    #[error("unknown parameter section `{0}` (expected room, product or misc)")]
    UnknownSection(String),
}

/// 파라미터 레코드 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Room,
    Product,
    Misc,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Room, Section::Product, Section::Misc];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Room => "room",
            Section::Product => "product",
            Section::Misc => "misc",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Room => "section.room",
            Section::Product => "section.product",
            Section::Misc => "section.misc",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Section::Room => "Room",
            Section::Product => "Product",
            Section::Misc => "Miscellaneous",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "room" => Ok(Section::Room),
            "product" => Ok(Section::Product),
            "misc" | "miscellaneous" => Ok(Section::Misc),
            other => Err(ParamError::UnknownSection(other.to_string())),
        }
    }
}

/// 숫자 필드 하나의 정의. 모든 화면(CLI/GUI)이 같은 표를 사용한다.
pub struct FieldSpec<T> {
    /// 저장소 키 (camelCase)
    pub key: &'static str,
    /// 영문 기본 라벨. 번역 키는 `field.<key>`이다.
    pub label: &'static str,
    pub unit: &'static str,
    /// 결과 화면 표시 소수 자리수
    pub precision: usize,
    pub get: fn(&T) -> f64,
    pub get_mut: fn(&mut T) -> &mut f64,
}

impl<T> FieldSpec<T> {
    fn matches(&self, key: &str) -> bool {
        normalize_key(self.key) == normalize_key(key)
    }
}

/// 화면 표시용으로 값을 함께 묶은 필드 뷰.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub precision: usize,
    pub value: f64,
}

impl FieldView {
    /// 번역 키 `field.<key>`
    pub fn label_key(&self) -> String {
        format!("field.{}", self.key)
    }
}

/// `airChangeRate`, `air_change_rate`, `AIRCHANGERATE`를 같은 키로 본다.
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// 필드 표를 가진 파라미터 레코드.
pub trait ParameterRecord: Sized + 'static {
    const SECTION: Section;

    fn fields() -> &'static [FieldSpec<Self>];

    /// 예전 저장소 키 → 현재 키.
    fn aliases() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn field(key: &str) -> Result<&'static FieldSpec<Self>, ParamError> {
        let key = Self::aliases()
            .iter()
            .find(|(old, _)| normalize_key(old) == normalize_key(key))
            .map_or(key, |(_, current)| *current);
        Self::fields()
            .iter()
            .find(|f| f.matches(key))
            .ok_or_else(|| ParamError::UnknownField {
                section: Self::SECTION,
                key: key.to_string(),
            })
    }

    fn get(&self, key: &str) -> Result<f64, ParamError> {
        Self::field(key).map(|f| (f.get)(self))
    }

    fn set(&mut self, key: &str, value: f64) -> Result<(), ParamError> {
        let spec = Self::field(key)?;
        *(spec.get_mut)(self) = value;
        Ok(())
    }

    /// 사용자 입력 문자열을 `parse_numeric` 규칙으로 변환해 저장하고 저장된 값을 반환한다.
    fn set_from_text(&mut self, key: &str, text: &str) -> Result<f64, ParamError> {
        let value = parse_numeric(text);
        self.set(key, value)?;
        Ok(value)
    }

    fn views(&self) -> Vec<FieldView> {
        Self::fields()
            .iter()
            .map(|f| FieldView {
                key: f.key,
                label: f.label,
                unit: f.unit,
                precision: f.precision,
                value: (f.get)(self),
            })
            .collect()
    }
}

/// 숫자 입력 문자열을 f64로 변환한다. 해석할 수 없으면 0을 돌려준다.
///
/// 앞쪽 공백을 건너뛴 뒤 가장 긴 숫자 접두부(부호, 정수부, 소수부, 지수부)만
/// 읽는다. `"12.5kg"`은 12.5, `"abc"`와 빈 문자열은 0이다.
pub fn parse_numeric(text: &str) -> f64 {
    let s = text.trim_start();
    match s[..numeric_prefix_len(s)].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// `parse_numeric`이 입력을 어떻게 읽었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericInput {
    /// 입력 전체(앞뒤 공백 제외)가 숫자 하나
    Complete,
    /// 숫자 접두부만 읽고 뒷부분은 버림
    Truncated,
    /// 읽을 숫자가 없거나 유한하지 않아 0으로 대체
    Coerced,
}

pub fn classify_numeric(text: &str) -> NumericInput {
    let s = text.trim();
    let len = numeric_prefix_len(s);
    if len == 0 || !s[..len].parse::<f64>().is_ok_and(f64::is_finite) {
        NumericInput::Coerced
    } else if len == s.len() {
        NumericInput::Complete
    } else {
        NumericInput::Truncated
    }
}

/// 숫자 접두부의 바이트 길이. 숫자가 하나도 없으면 0.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }
    // 지수부는 숫자가 하나 이상 따라올 때만 인정한다.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    end
}

/// 세 레코드를 묶은 파라미터 스냅샷. 저장 파일의 최상위 구조이기도 하다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub room: RoomParameters,
    pub product: ProductParameters,
    pub misc: MiscParameters,
}

impl ParameterSet {
    /// 현재 값으로 부하를 계산한다. 매번 처음부터 다시 계산한다.
    pub fn calculate(&self) -> HeatLoadResults {
        calc::calculate_heat_load(&self.room, &self.product, &self.misc)
    }

    pub fn get_field(&self, section: Section, key: &str) -> Result<f64, ParamError> {
        match section {
            Section::Room => self.room.get(key),
            Section::Product => self.product.get(key),
            Section::Misc => self.misc.get(key),
        }
    }

    /// 필드 하나를 문자열 입력으로 갱신한다. 숫자가 아니면 0으로 저장된다.
    pub fn set_field(&mut self, section: Section, key: &str, text: &str) -> Result<f64, ParamError> {
        match section {
            Section::Room => self.room.set_from_text(key, text),
            Section::Product => self.product.set_from_text(key, text),
            Section::Misc => self.misc.set_from_text(key, text),
        }
    }

    pub fn views(&self, section: Section) -> Vec<FieldView> {
        match section {
            Section::Room => self.room.views(),
            Section::Product => self.product.views(),
            Section::Misc => self.misc.views(),
        }
    }

    pub fn reset(&mut self, section: Section) {
        match section {
            Section::Room => self.room = RoomParameters::default(),
            Section::Product => self.product = ProductParameters::default(),
            Section::Misc => self.misc = MiscParameters::default(),
        }
    }
}

/// 필드 표 항목을 만든다. 클로저는 캡처가 없으므로 함수 포인터로 강제 변환된다.
macro_rules! field {
    ($key:literal, $field:ident, $label:literal, $unit:literal, $precision:literal) => {
        $crate::params::FieldSpec {
            key: $key,
            label: $label,
            unit: $unit,
            precision: $precision,
            get: |p| p.$field,
            get_mut: |p| &mut p.$field,
        }
    };
}
pub(crate) use field;
