use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::{AppContext, AppError};
use crate::calc::HeatLoadResults;
use crate::conversion;
use crate::i18n::Translator;
use crate::params::{classify_numeric, parse_numeric, FieldView, NumericInput, Section};
use crate::product_db::{self, ProductData};
use crate::quantity::QuantityKind;
use crate::report::{self, ReportFormat};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditSection(Section),
    Results,
    Export,
    ProductPreset,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!();
    println!("{}", tr.text("main_menu.title", "=== Cold Room Heat Load ==="));
    println!("{}", tr.text("main_menu.room", "1) Edit room parameters"));
    println!("{}", tr.text("main_menu.product", "2) Edit product parameters"));
    println!("{}", tr.text("main_menu.misc", "3) Edit miscellaneous parameters"));
    println!("{}", tr.text("main_menu.results", "4) Show results"));
    println!("{}", tr.text("main_menu.export", "5) Export report"));
    println!("{}", tr.text("main_menu.preset", "6) Apply product preset"));
    println!("{}", tr.text("main_menu.unit_conversion", "7) Unit converter"));
    println!("{}", tr.text("main_menu.settings", "8) Settings"));
    println!("{}", tr.text("main_menu.exit", "0) Exit"));
    loop {
        let sel = read_line(&tr.text("prompt.menu_select", "Select menu: "))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditSection(Section::Room)),
            "2" => return Ok(MenuChoice::EditSection(Section::Product)),
            "3" => return Ok(MenuChoice::EditSection(Section::Misc)),
            "4" => return Ok(MenuChoice::Results),
            "5" => return Ok(MenuChoice::Export),
            "6" => return Ok(MenuChoice::ProductPreset),
            "7" => return Ok(MenuChoice::UnitConversion),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!(
                "{}",
                tr.text("general.invalid_selection", "Invalid input. Please try again.")
            ),
        }
    }
}

/// 필드 목록을 번호와 함께 출력한다.
pub fn print_fields(tr: &Translator, section: Section, fields: &[FieldView]) {
    println!(
        "\n-- {} --",
        tr.text(section.label_key(), section.default_label())
    );
    for (i, f) in fields.iter().enumerate() {
        let label = tr.text(&f.label_key(), f.label);
        println!("{:>2}) {label:<34} {:>12} {}", i + 1, f.value, f.unit);
    }
}

/// 섹션 편집 화면. 필드를 고를 때마다 결과 요약을 다시 계산해 보여준다.
pub fn handle_edit_section(ctx: &mut AppContext, section: Section) -> Result<(), AppError> {
    loop {
        let fields = ctx.store.params().views(section);
        print_fields(&ctx.tr, section, &fields);
        if section == Section::Product {
            println!(
                " n) {:<34} {}",
                ctx.tr.text("gui.product_name", "Product name"),
                ctx.store.params().product.product_name
            );
        }
        print_summary(&ctx.tr, &ctx.store.results());
        let sel = read_line(&ctx.tr.text(
            "prompt.field_number",
            "Field number to edit (Enter=back, r=reset defaults): ",
        ))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(());
        }
        if sel.eq_ignore_ascii_case("r") {
            report_store_result(&ctx.tr, ctx.store.reset(section));
            println!("{}", ctx.tr.text("edit.reset", "Defaults restored."));
            continue;
        }
        if section == Section::Product && sel.eq_ignore_ascii_case("n") {
            let name = read_line(&ctx.tr.text("prompt.product_name", "Product name: "))?;
            report_store_result(&ctx.tr, ctx.store.set_product_name(&name));
            continue;
        }
        let Some(field) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| fields.get(i))
        else {
            println!(
                "{}",
                ctx.tr
                    .text("general.invalid_selection", "Invalid input. Please try again.")
            );
            continue;
        };
        let text = read_line(&ctx.tr.text("prompt.new_value", "New value: "))?;
        match ctx.store.update_field(section, field.key, &text) {
            Ok(value) => {
                if let Some((key, default)) = input_notice(&text) {
                    println!("{}", ctx.tr.text(key, default));
                }
                println!("{}: {} = {value}", ctx.tr.text("edit.updated", "Updated"), field.key);
            }
            Err(e) => report_store_result(&ctx.tr, Err(e)),
        }
    }
}

/// 입력이 그대로 저장되지 않았을 때 보여 줄 안내 문구 (번역 키, 기본 문구).
fn input_notice(text: &str) -> Option<(&'static str, &'static str)> {
    match classify_numeric(text) {
        NumericInput::Complete => None,
        NumericInput::Truncated => Some(("edit.truncated", "Trailing text ignored.")),
        NumericInput::Coerced => Some(("edit.coerced_zero", "Not a number, stored as 0.")),
    }
}

/// 저장 실패는 메모리 값에 영향이 없으므로 경고만 출력한다.
fn report_store_result(tr: &Translator, result: Result<(), crate::store::StoreError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "parameter persistence failed");
        println!("{}: {e}", tr.text("store.save_failed", "Failed to save parameters"));
    }
}

/// 편집 화면 하단의 요약 한 줄.
pub fn print_summary(tr: &Translator, r: &HeatLoadResults) {
    println!(
        "   {} {:.0} kJ/24Hr | {:.2} kW | {:.2} TR | {} {:.2} TR",
        tr.text("report.total_load_kj", "Load in kJ/24Hr"),
        r.total_load_kj,
        r.total_load_kw,
        r.refrigeration_capacity_tr,
        tr.text("report.capacity_including_safety", "Capacity Including Safety"),
        r.capacity_including_safety
    );
}

/// 전체 결과를 보고서 텍스트 형식으로 출력한다.
pub fn handle_results(ctx: &AppContext) {
    let data = report::build_report(&ctx.store.results(), &ctx.tr);
    // 텍스트 렌더링은 실패하지 않는다.
    if let Ok(text) = report::render(&data, ReportFormat::Text) {
        println!("\n{text}");
    }
}

/// 보고서를 파일로 내보낸다.
pub fn handle_export(ctx: &AppContext) -> Result<(), AppError> {
    let sel = read_line(&ctx.tr.text(
        "prompt.report_format",
        "Format 1=text 2=markdown 3=toml: ",
    ))?;
    let format = match sel.trim() {
        "2" => ReportFormat::Markdown,
        "3" => ReportFormat::Toml,
        "1" => ReportFormat::Text,
        _ => ctx.config.report.format,
    };
    let path = read_line(&ctx.tr.text("prompt.report_path", "Output path (Enter=default folder): "))?;
    let data = report::build_report(&ctx.store.results(), &ctx.tr);
    let result = if path.trim().is_empty() {
        report::generate_and_share(&data, format, &ctx.config.report_dir())
    } else {
        let path = PathBuf::from(path.trim());
        report::export_to(&data, format, &path).map(|_| path)
    };
    match result {
        Ok(path) => println!(
            "{}: {}",
            ctx.tr.text("export.done", "Report saved"),
            path.display()
        ),
        Err(e) => {
            tracing::warn!(error = %e, "report export failed");
            println!("{}: {e}", ctx.tr.text("export.failed", "Report export failed"));
        }
    }
    Ok(())
}

/// 프리셋 목록 출력.
pub fn print_products() {
    for p in product_db::products() {
        println!("{}", product_line(p));
    }
}

fn product_line(p: &ProductData) -> String {
    format!(
        "{:<12} {:<20} store {:>5.1} °C  Tf {:>5.1} °C  cp {:.2}/{:.2} kJ/kg·K  L {:>5.0} kJ/kg  resp {:.1} kJ/kg·24Hr",
        p.code,
        p.name,
        p.storage_temp_c,
        p.freezing_point_c,
        p.cp_above_kj_per_kgk,
        p.cp_below_kj_per_kgk,
        p.latent_heat_kj_per_kg,
        p.respiration_kj_per_kg_day
    )
}

pub fn handle_product_preset(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("\n{}", ctx.tr.text("preset.list_heading", "-- Product presets --"));
    print_products();
    let code = read_line(&ctx.tr.text("prompt.preset_code", "Product code: "))?;
    if code.trim().is_empty() {
        return Ok(());
    }
    match ctx.store.apply_product_preset(code.trim()) {
        Ok(()) => println!(
            "{}: {}",
            ctx.tr.text("preset.applied", "Preset applied"),
            ctx.store.params().product.product_name
        ),
        Err(e) => println!("{}: {e}", ctx.tr.text("general.error_prefix", "Error")),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("\n{}", tr.text("conversion.heading", "-- Unit Conversion --"));
    for (i, kind) in QuantityKind::ALL.iter().enumerate() {
        println!(
            "{}) {} [{}]",
            i + 1,
            tr.text(kind.label_key(), kind.default_label()),
            kind.unit_symbols().join(", ")
        );
    }
    let kind = loop {
        let sel = read_line(&tr.text("prompt.select", "Select: "))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QuantityKind::ALL.get(i))
        {
            break *kind;
        }
        println!(
            "{}",
            tr.text("general.invalid_selection", "Invalid input. Please try again.")
        );
    };
    let value = parse_numeric(&read_line(&tr.text("prompt.value", "Value: "))?);
    let from_unit = read_line(&tr.text("prompt.from_unit", "From unit: "))?;
    let to_unit = read_line(&tr.text("prompt.to_unit", "To unit: "))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{}: {result} {}",
        tr.text("conversion.result", "Result"),
        to_unit.trim()
    );
    Ok(())
}

/// 설정 메뉴. 현재는 언어만 바꾼다.
pub fn handle_settings(ctx: &mut AppContext) -> Result<(), AppError> {
    println!("\n{}", ctx.tr.text("settings.heading", "-- Settings --"));
    println!(
        "{}: {} ({})",
        ctx.tr.text("settings.current_language", "Current language"),
        ctx.config.language,
        ctx.tr.language_code()
    );
    let sel = read_line(&ctx.tr.text("prompt.language", "Language (auto/en/ko, Enter=cancel): "))?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(());
    }
    ctx.config.language = sel.to_lowercase();
    ctx.reload_translator();
    ctx.save_config()?;
    println!("{}", ctx.tr.text("general.saved", "Saved."));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}
