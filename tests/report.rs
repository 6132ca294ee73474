use std::path::PathBuf;

use cold_room_heat_load::{
    calc::HeatLoadResults,
    i18n::Translator,
    params::ParameterSet,
    report::{self, build_report, render, ReportData, ReportFormat},
};

fn default_results() -> HeatLoadResults {
    ParameterSet::default().calculate()
}

fn default_report() -> ReportData {
    build_report(&default_results(), &Translator::new("en"))
}

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cold_room_report_{name}_{}", std::process::id()))
}

#[test]
fn report_has_five_sections_in_screen_order() {
    let data = default_report();
    let titles: Vec<&str> = data.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Final Results",
            "Transmission Loads (kJ/24Hr)",
            "Product & Other Loads (kJ/24Hr)",
            "Individual TR Values",
            "Heat Distribution",
        ]
    );
    assert_eq!(data.title, "Cold Room Heat Load Summary");
}

#[test]
fn final_results_are_highlighted() {
    let data = default_report();
    let final_section = &data.sections[0];
    assert_eq!(final_section.items.len(), 4);
    assert!(final_section.items.iter().all(|i| i.is_highlighted));

    let tr_section = &data.sections[3];
    assert_eq!(tr_section.items.len(), 11);
    let highlighted: Vec<_> = tr_section.items.iter().filter(|i| i.is_highlighted).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].label, "Total Load TR");
}

#[test]
fn values_use_fixed_precision() {
    let r = default_results();
    let data = default_report();
    let final_section = &data.sections[0];
    assert_eq!(final_section.items[0].value, format!("{:.0}", r.total_load_kj));
    assert_eq!(final_section.items[0].unit, "kJ/24Hr");
    assert_eq!(final_section.items[2].value, format!("{:.2}", r.refrigeration_capacity_tr));

    let distribution = &data.sections[4];
    assert_eq!(distribution.items[2].value, "1.000");
    assert_eq!(distribution.items[3].unit, "cfm");
    assert_eq!(report::format_value(0.12083, 3), "0.121");
}

#[test]
fn korean_labels_come_from_translator() {
    let data = build_report(&default_results(), &Translator::new("ko"));
    assert_eq!(data.sections[0].title, "최종 결과");
    assert_eq!(data.sections[1].items[0].label, "벽체 부하");
}

#[test]
fn text_and_markdown_renderings() {
    let data = default_report();
    let text = render(&data, ReportFormat::Text).unwrap();
    assert!(text.starts_with("Cold Room Heat Load Summary\n"));
    assert!(text.contains("[Heat Distribution]"));
    assert!(text.lines().any(|l| l.starts_with('*') && l.contains("Total Load TR")));

    let md = render(&data, ReportFormat::Markdown).unwrap();
    assert!(md.starts_with("# Cold Room Heat Load Summary"));
    assert!(md.contains("## Final Results"));
    assert!(md.contains("| **Load in kW** |"));
}

#[test]
fn toml_rendering_reads_back() {
    let data = default_report();
    let text = render(&data, ReportFormat::Toml).unwrap();
    let back: ReportData = toml::from_str(&text).unwrap();
    assert_eq!(back, data);
}

#[test]
fn slug_makes_file_names() {
    assert_eq!(report::slug("Cold Room Heat Load Summary"), "cold-room-heat-load-summary");
    assert_eq!(report::slug("  --  "), "report");
}

#[test]
fn format_names_parse() {
    assert_eq!(ReportFormat::parse("md").unwrap(), ReportFormat::Markdown);
    assert_eq!(ReportFormat::parse("TOML").unwrap(), ReportFormat::Toml);
    assert!(ReportFormat::parse("pdf").is_err());
}

#[test]
fn generate_and_share_writes_into_folder() {
    let dir = temp_dir("share");
    let data = default_report();
    let path = report::generate_and_share(&data, ReportFormat::Markdown, &dir).unwrap();
    assert_eq!(path, dir.join("cold-room-heat-load-summary.md"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&data, ReportFormat::Markdown).unwrap());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_failure_leaves_results_untouched() {
    let dir = temp_dir("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    // 디렉터리를 파일 경로로 쓰면 실패한다.
    let results = default_results();
    let data = build_report(&results, &Translator::new("en"));
    assert!(report::export_to(&data, ReportFormat::Text, &dir).is_err());
    assert_eq!(results, default_results());
    let _ = std::fs::remove_dir_all(&dir);
}
