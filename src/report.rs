//! 계산 결과 보고서 구성과 내보내기.
//!
//! 보고서는 (라벨, 값, 단위, 강조 여부) 항목을 섹션별로 묶은 순수 표시용 문서다.
//! PDF 렌더링은 다루지 않고 텍스트/Markdown/TOML 파일로 내보낸다.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::{HeatLoadResults, LoadComponent};
use crate::i18n::Translator;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown report format `{0}` (expected text, markdown or toml)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    pub label: String,
    pub value: String,
    pub unit: String,
    #[serde(default)]
    pub is_highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub items: Vec<ReportItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<ReportSection>,
}

/// 내보내기 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Toml,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [
        ReportFormat::Text,
        ReportFormat::Markdown,
        ReportFormat::Toml,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Toml => "toml",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ReportError> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "toml" => Ok(ReportFormat::Toml),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// `toFixed`와 같은 고정 소수 자리 표기.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

struct SectionBuilder<'a> {
    tr: &'a Translator,
    section: ReportSection,
}

impl<'a> SectionBuilder<'a> {
    fn new(tr: &'a Translator, key: &str, default: &str) -> Self {
        Self {
            tr,
            section: ReportSection {
                title: tr.text(key, default),
                items: Vec::new(),
            },
        }
    }

    fn item(mut self, key: &str, default: &str, value: f64, precision: usize, unit: &str) -> Self {
        self.section.items.push(ReportItem {
            label: self.tr.text(key, default),
            value: format_value(value, precision),
            unit: unit.to_string(),
            is_highlighted: false,
        });
        self
    }

    fn highlighted(mut self, key: &str, default: &str, value: f64, precision: usize, unit: &str) -> Self {
        self = self.item(key, default, value, precision, unit);
        if let Some(last) = self.section.items.last_mut() {
            last.is_highlighted = true;
        }
        self
    }

    fn component(self, c: LoadComponent, r: &HeatLoadResults) -> Self {
        let key = format!("report.{}", c.key());
        self.item(&key, c.default_label(), c.kj_per_day(r), 0, "kJ/24Hr")
    }

    fn component_tr(self, c: LoadComponent, r: &HeatLoadResults) -> Self {
        let key = format!("report.{}_tr", c.key());
        let default = format!("{} TR", c.default_label());
        self.item(&key, &default, c.tr(r), 2, "TR")
    }

    fn build(self) -> ReportSection {
        self.section
    }
}

/// 결과 레코드로 보고서 문서를 만든다. 항목은 결과 필드와 1:1로 대응한다.
pub fn build_report(r: &HeatLoadResults, tr: &Translator) -> ReportData {
    use LoadComponent::*;

    let final_results = SectionBuilder::new(tr, "report.section.final", "Final Results")
        .highlighted("report.total_load_kj", "Load in kJ/24Hr", r.total_load_kj, 0, "kJ/24Hr")
        .highlighted("report.total_load_kw", "Load in kW", r.total_load_kw, 2, "kW")
        .highlighted(
            "report.refrigeration_capacity",
            "Refrigeration Capacity",
            r.refrigeration_capacity_tr,
            2,
            "TR",
        )
        .highlighted(
            "report.capacity_including_safety",
            "Capacity Including Safety",
            r.capacity_including_safety,
            2,
            "TR",
        )
        .build();

    let transmission = SectionBuilder::new(
        tr,
        "report.section.transmission",
        "Transmission Loads (kJ/24Hr)",
    )
    .component(Wall, r)
    .component(Ceiling, r)
    .component(Floor, r)
    .item(
        "report.total_transmission",
        "Total Transmission",
        r.total_transmission_load,
        0,
        "kJ/24Hr",
    )
    .build();

    let mut product_other = SectionBuilder::new(
        tr,
        "report.section.product_other",
        "Product & Other Loads (kJ/24Hr)",
    );
    for c in [Product, Respiration, AirChange, Equipment, Occupancy, Light, DoorHeater] {
        product_other = product_other.component(c, r);
    }
    let product_other = product_other
        .item(
            "report.total_misc",
            "Total Miscellaneous Load",
            r.total_misc_load,
            0,
            "kJ/24Hr",
        )
        .item(
            "report.continuous_heaters",
            "Continuous Heater Load",
            r.continuous_heater_load,
            0,
            "kJ/24Hr",
        )
        .build();

    let mut tr_values = SectionBuilder::new(tr, "report.section.tr", "Individual TR Values");
    for c in LoadComponent::ALL {
        tr_values = tr_values.component_tr(c, r);
    }
    let tr_values = tr_values
        .highlighted("report.total_load_tr", "Total Load TR", r.total_load_tr, 2, "TR")
        .build();

    let distribution = SectionBuilder::new(tr, "report.section.distribution", "Heat Distribution")
        .item("report.sensible_heat", "Sensible Heat", r.sensible_heat, 0, "kJ/24Hr")
        .item("report.latent_heat", "Latent Heat", r.latent_heat, 0, "kJ/24Hr")
        .item(
            "report.sensible_heat_ratio",
            "Sensible Heat Ratio",
            r.sensible_heat_ratio,
            3,
            "",
        )
        .item("report.air_qty_required", "Air Qty Required", r.air_qty_required, 0, "cfm")
        .build();

    ReportData {
        title: tr.text("report.title", "Cold Room Heat Load Summary"),
        subtitle: tr.text(
            "report.subtitle",
            "Key calculation results for cold room refrigeration system",
        ),
        sections: vec![final_results, transmission, product_other, tr_values, distribution],
    }
}

/// 보고서를 지정한 형식의 문자열로 만든다.
pub fn render(data: &ReportData, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(data)),
        ReportFormat::Markdown => Ok(render_markdown(data)),
        ReportFormat::Toml => Ok(toml::to_string_pretty(data)?),
    }
}

fn render_text(data: &ReportData) -> String {
    let label_width = data
        .sections
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|i| i.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "{}", data.title);
    let _ = writeln!(out, "{}", data.subtitle);
    for section in &data.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}]", section.title);
        for item in &section.items {
            let marker = if item.is_highlighted { '*' } else { ' ' };
            let pad = label_width - item.label.chars().count();
            let _ = writeln!(
                out,
                "{marker} {}{} : {:>14} {}",
                item.label,
                " ".repeat(pad),
                item.value,
                item.unit
            );
        }
    }
    // 단위가 빈 항목의 끝 공백 정리
    out.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

fn render_markdown(data: &ReportData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", data.title);
    let _ = writeln!(out, "_{}_", data.subtitle);
    for section in &data.sections {
        let _ = writeln!(out, "\n## {}\n", section.title);
        let _ = writeln!(out, "| Item | Value | Unit |");
        let _ = writeln!(out, "|---|---:|---|");
        for item in &section.items {
            if item.is_highlighted {
                let _ = writeln!(out, "| **{}** | **{}** | {} |", item.label, item.value, item.unit);
            } else {
                let _ = writeln!(out, "| {} | {} | {} |", item.label, item.value, item.unit);
            }
        }
    }
    out
}

/// 제목을 파일명으로 쓸 수 있게 바꾼다. `Cold Room Heat Load Summary` → `cold-room-heat-load-summary`
pub fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 보고서를 지정한 경로에 저장한다.
pub fn export_to(data: &ReportData, format: ReportFormat, path: &Path) -> Result<(), ReportError> {
    let content = render(data, format)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), ?format, "report exported");
    Ok(())
}

/// 출력 폴더에 `<제목 slug>.<확장자>`로 저장하고 경로를 돌려준다.
///
/// 실패해도 호출 측의 결과 레코드에는 영향이 없다.
pub fn generate_and_share(
    data: &ReportData,
    format: ReportFormat,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(format!("{}.{}", slug(&data.title), format.extension()));
    export_to(data, format, &path)?;
    Ok(path)
}
