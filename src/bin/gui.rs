#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::collections::HashMap;
use std::{env, fs, path::Path, path::PathBuf};

use cold_room_heat_load::{
    app::{self, AppContext},
    calc::{miscellaneous, HeatLoadResults},
    config, conversion,
    params::Section,
    product_db,
    quantity::QuantityKind,
    report::{self, ReportFormat},
    store::ParameterStore,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1000.0, 720.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let ctx = load_context(cli_lang.as_deref());
    eframe::run_native(
        "Cold Room Heat Load",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font error: {e}");
            }
            Box::new(GuiApp::new(ctx))
        }),
    )
}

/// 설정/파라미터를 읽지 못해도 기본값으로 창은 띄운다.
fn load_context(cli_lang: Option<&str>) -> AppContext {
    let config_path = PathBuf::from(config::CONFIG_FILE);
    match AppContext::load(config_path.clone(), cli_lang, None) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default settings");
            let config = config::Config::default();
            let tr = app::translator_for(&config, cli_lang);
            AppContext {
                config,
                config_path,
                tr,
                store: ParameterStore::in_memory(Default::default()),
            }
        }
    }
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다. 프로젝트 폴더 → 시스템 폰트 순.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![PathBuf::from("assets/fonts/malgun.ttf")];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found, using the default font.".into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Room,
    Product,
    Misc,
    Results,
    Convert,
}

impl Tab {
    fn section(self) -> Option<Section> {
        match self {
            Tab::Room => Some(Section::Room),
            Tab::Product => Some(Section::Product),
            Tab::Misc => Some(Section::Misc),
            Tab::Results | Tab::Convert => None,
        }
    }
}

struct GuiApp {
    ctx: AppContext,
    tab: Tab,
    /// 입력 중인 문자열. 키: `<section>.<field>`
    buffers: HashMap<String, String>,
    product_name: String,
    results: HeatLoadResults,
    status: Option<String>,
    export_format: ReportFormat,
    show_settings: bool,
    lang_input: String,
    conv_kind: QuantityKind,
    conv_value: String,
    conv_from: String,
    conv_to: String,
}

impl GuiApp {
    fn new(ctx: AppContext) -> Self {
        let lang_input = ctx.config.language.clone();
        let export_format = ctx.config.report.format;
        let results = ctx.store.results();
        let units = QuantityKind::Load.unit_symbols();
        let mut s = Self {
            ctx,
            tab: Tab::Room,
            buffers: HashMap::new(),
            product_name: String::new(),
            results,
            status: None,
            export_format,
            show_settings: false,
            lang_input,
            conv_kind: QuantityKind::Load,
            conv_value: "1".into(),
            conv_from: units.last().copied().unwrap_or_default().into(),
            conv_to: units.get(1).copied().unwrap_or_default().into(),
        };
        s.refresh_buffers();
        s
    }

    /// 저장소 값으로 입력 버퍼를 다시 채운다 (리셋/프리셋 적용 후).
    fn refresh_buffers(&mut self) {
        self.buffers.clear();
        for section in Section::ALL {
            for f in self.ctx.store.params().views(section) {
                self.buffers
                    .insert(buffer_key(section, f.key), f.value.to_string());
            }
        }
        self.product_name = self.ctx.store.params().product.product_name.clone();
        self.results = self.ctx.store.results();
    }

    /// 입력 하나를 반영하고 즉시 다시 계산한다. 저장 실패는 상태줄에만 표시한다.
    fn commit(&mut self, section: Section, key: &str, text: &str) {
        let result = self.ctx.store.update_field(section, key, text);
        self.results = self.ctx.store.results();
        self.note_store_result(result.map(|_| ()));
    }

    fn note_store_result(&mut self, result: Result<(), cold_room_heat_load::store::StoreError>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => {
                tracing::warn!(error = %e, "parameter persistence failed");
                let prefix = self
                    .ctx
                    .tr
                    .text("store.save_failed", "Failed to save parameters");
                self.status = Some(format!("{prefix}: {e}"));
            }
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Room, txt("gui.tab.room", "Room")),
            (Tab::Product, txt("gui.tab.product", "Product")),
            (Tab::Misc, txt("gui.tab.misc", "Miscellaneous")),
            (Tab::Results, txt("gui.tab.results", "Results")),
            (Tab::Convert, txt("gui.tab.convert", "Unit Converter")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
        ui.separator();
        summary_ui(ui, &tr, &self.results);
    }

    fn ui_section(&mut self, ui: &mut egui::Ui, section: Section) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.horizontal(|ui| {
            ui.heading(txt(section.label_key(), section.default_label()));
            if ui.button(txt("gui.reset_section", "Reset to defaults")).clicked() {
                let result = self.ctx.store.reset(section);
                self.refresh_buffers();
                self.note_store_result(result);
            }
        });
        ui.add_space(6.0);

        if section == Section::Product {
            self.ui_product_header(ui);
        }

        let fields = self.ctx.store.params().views(section);
        let mut edited: Option<(&'static str, String)> = None;
        egui::Grid::new(("fields", section.as_str()))
            .num_columns(3)
            .spacing([12.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for f in &fields {
                    ui.label(txt(&f.label_key(), f.label));
                    let buf = self
                        .buffers
                        .entry(buffer_key(section, f.key))
                        .or_insert_with(|| f.value.to_string());
                    let resp = ui.add(egui::TextEdit::singleline(buf).desired_width(120.0));
                    if resp.changed() {
                        edited = Some((f.key, buf.clone()));
                    }
                    ui.label(f.unit);
                    ui.end_row();
                }
            });
        if let Some((key, text)) = edited {
            self.commit(section, key, &text);
        }

        if section == Section::Misc {
            ui.add_space(6.0);
            let capacity =
                miscellaneous::door_heater_capacity_from_geometry(&self.ctx.store.params().misc);
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{}: {capacity:.3} kW",
                    txt("gui.door_heater_hint", "Door heater capacity from opening")
                ));
                if ui.button(txt("gui.apply", "Apply")).clicked() {
                    let text = capacity.to_string();
                    self.buffers
                        .insert(buffer_key(Section::Misc, "doorHeaterCapacity"), text.clone());
                    self.commit(Section::Misc, "doorHeaterCapacity", &text);
                }
            });
        }
    }

    fn ui_product_header(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let mut preset: Option<&'static str> = None;
        ui.horizontal(|ui| {
            ui.label(txt("gui.product_name", "Product name"));
            if ui
                .add(egui::TextEdit::singleline(&mut self.product_name).desired_width(200.0))
                .changed()
            {
                let result = self.ctx.store.set_product_name(&self.product_name);
                self.note_store_result(result);
            }
            egui::ComboBox::from_id_source("product_preset")
                .selected_text(txt("gui.preset", "Product preset"))
                .show_ui(ui, |ui| {
                    for p in product_db::products() {
                        let label = format!("{} ({:.1} °C)", p.name, p.storage_temp_c);
                        if ui.selectable_label(false, label).clicked() {
                            preset = Some(p.code);
                        }
                    }
                });
        });
        if let Some(code) = preset {
            let result = self.ctx.store.apply_product_preset(code);
            self.refresh_buffers();
            self.note_store_result(result);
        }
        ui.add_space(6.0);
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let data = report::build_report(&self.results, &tr);
        ui.heading(&data.title);
        ui.label(&data.subtitle);
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("export_format")
                .selected_text(self.export_format.extension())
                .show_ui(ui, |ui| {
                    for f in ReportFormat::ALL {
                        ui.selectable_value(&mut self.export_format, f, f.extension());
                    }
                });
            if ui.button(txt("gui.export", "Save report")).clicked() {
                self.export(&data);
            }
        });
        ui.separator();
        for section in &data.sections {
            egui::CollapsingHeader::new(&section.title)
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new(("report", section.title.as_str()))
                        .num_columns(3)
                        .spacing([16.0, 4.0])
                        .striped(true)
                        .show(ui, |ui| {
                            for item in &section.items {
                                if item.is_highlighted {
                                    ui.strong(&item.label);
                                    ui.strong(&item.value);
                                } else {
                                    ui.label(&item.label);
                                    ui.label(&item.value);
                                }
                                ui.label(&item.unit);
                                ui.end_row();
                            }
                        });
                });
        }
    }

    fn export(&mut self, data: &report::ReportData) {
        let format = self.export_format;
        let file_name = format!("{}.{}", report::slug(&data.title), format.extension());
        let Some(path) = FileDialog::new()
            .add_filter(format.extension(), &[format.extension()])
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };
        self.status = Some(match report::export_to(data, format, &path) {
            Ok(()) => format!(
                "{}: {}",
                self.ctx.tr.text("export.done", "Report saved"),
                path.display()
            ),
            Err(e) => {
                tracing::warn!(error = %e, "report export failed");
                format!("{}: {e}", self.ctx.tr.text("export.failed", "Report export failed"))
            }
        });
    }

    fn ui_convert(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        ui.heading(txt("conversion.heading", "Unit Conversion"));
        ui.add_space(8.0);
        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(txt("gui.unit.quantity", "Quantity"));
                let before = self.conv_kind;
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(txt(self.conv_kind.label_key(), self.conv_kind.default_label()))
                    .show_ui(ui, |ui| {
                        for kind in QuantityKind::ALL {
                            ui.selectable_value(
                                &mut self.conv_kind,
                                kind,
                                txt(kind.label_key(), kind.default_label()),
                            );
                        }
                    });
                if before != self.conv_kind {
                    let units = self.conv_kind.unit_symbols();
                    self.conv_from = units.first().copied().unwrap_or_default().into();
                    self.conv_to = units.get(1).copied().unwrap_or_default().into();
                }
                ui.end_row();

                ui.label(txt("prompt.value", "Value"));
                ui.add(egui::TextEdit::singleline(&mut self.conv_value).desired_width(120.0));
                ui.end_row();

                ui.label(txt("prompt.from_unit", "From unit"));
                unit_combo(ui, "conv_from", &mut self.conv_from, self.conv_kind);
                ui.end_row();

                ui.label(txt("prompt.to_unit", "To unit"));
                unit_combo(ui, "conv_to", &mut self.conv_to, self.conv_kind);
                ui.end_row();
            });
        ui.separator();
        let value = cold_room_heat_load::params::parse_numeric(&self.conv_value);
        match conversion::convert(self.conv_kind, value, &self.conv_from, &self.conv_to) {
            Ok(out) => ui.strong(format!(
                "{}: {} {}",
                txt("conversion.result", "Result"),
                report::format_value(out, 4),
                self.conv_to
            )),
            Err(e) => ui.colored_label(egui::Color32::RED, e.to_string()),
        };
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let mut open = self.show_settings;
        let mut save = false;
        egui::Window::new(txt("gui.settings", "Settings"))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(txt("gui.language", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                if ui.button(txt("gui.settings_save", "Save settings")).clicked() {
                    save = true;
                }
            });
        self.show_settings = open;
        if save {
            self.ctx.config.language = self.lang_input.clone();
            self.ctx.config.report.format = self.export_format;
            self.ctx.reload_translator();
            self.status = Some(match self.ctx.save_config() {
                Ok(()) => self.ctx.tr.text("general.saved", "Saved."),
                Err(e) => format!("{}: {e}", self.ctx.tr.text("general.error_prefix", "Error")),
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.ctx.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("main_menu.app_title", "Cold Room Heat Load"));
                ui.separator();
                if ui.button(txt("gui.settings", "Settings")).clicked() {
                    self.show_settings = true;
                }
            });
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_deref().unwrap_or_default());
        });
        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(160.0)
            .default_width(220.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match (self.tab, self.tab.section()) {
                    (_, Some(section)) => self.ui_section(ui, section),
                    (Tab::Results, None) => self.ui_results(ui),
                    _ => self.ui_convert(ui),
                });
        });
    }
}

fn buffer_key(section: Section, key: &str) -> String {
    format!("{}.{key}", section.as_str())
}

/// 사이드 패널 하단의 최종 결과 요약.
fn summary_ui(ui: &mut egui::Ui, tr: &cold_room_heat_load::i18n::Translator, r: &HeatLoadResults) {
    egui::Grid::new("summary").num_columns(2).show(ui, |ui| {
        for (key, default, value, unit) in [
            ("report.total_load_kj", "Load in kJ/24Hr", r.total_load_kj, "kJ/24Hr"),
            ("report.total_load_kw", "Load in kW", r.total_load_kw, "kW"),
            (
                "report.refrigeration_capacity",
                "Refrigeration Capacity",
                r.refrigeration_capacity_tr,
                "TR",
            ),
            (
                "report.capacity_including_safety",
                "Capacity Including Safety",
                r.capacity_including_safety,
                "TR",
            ),
        ] {
            ui.small(tr.text(key, default));
            ui.strong(format!("{} {unit}", report::format_value(value, 2)));
            ui.end_row();
        }
    });
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, kind: QuantityKind) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for sym in kind.unit_symbols() {
                ui.selectable_value(value, sym.to_string(), sym);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use cold_room_heat_load::config::Config;

    fn test_app() -> GuiApp {
        let config = Config::default();
        let tr = app::translator_for(&config, Some("en"));
        GuiApp::new(AppContext {
            config,
            config_path: PathBuf::new(),
            tr,
            store: ParameterStore::in_memory(Default::default()),
        })
    }

    #[test]
    fn buffers_cover_every_field() {
        let app = test_app();
        let count: usize = Section::ALL
            .iter()
            .map(|s| app.ctx.store.params().views(*s).len())
            .sum();
        assert_eq!(app.buffers.len(), count);
    }

    #[test]
    fn commit_recalculates_results() {
        let mut app = test_app();
        let before = app.results.total_load_kj;
        app.commit(Section::Room, "length", "12");
        assert!(app.results.total_load_kj > before);
        assert!(app.status.is_none());
    }

    #[test]
    fn non_numeric_input_is_stored_as_zero() {
        let mut app = test_app();
        app.commit(Section::Misc, "occupancyCount", "abc");
        assert_eq!(app.ctx.store.params().misc.occupancy_count, 0.0);
        assert_eq!(app.results.occupancy_load, 0.0);
    }

    #[test]
    fn preset_refreshes_buffers() {
        let mut app = test_app();
        let result = app.ctx.store.apply_product_preset("apple");
        assert!(result.is_ok());
        app.refresh_buffers();
        let apple = product_db::find_product("apple").unwrap();
        assert_eq!(app.product_name, apple.name);
        assert_eq!(
            app.buffers["product.freezingPoint"],
            apple.freezing_point_c.to_string()
        );
    }
}
