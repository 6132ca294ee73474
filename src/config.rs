use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::ReportFormat;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 보고서 내보내기 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: ReportFormat,
    /// 파일명을 지정하지 않았을 때 저장할 폴더
    pub output_dir: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            output_dir: "reports".into(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `auto`, `en`, `ko`
    pub language: String,
    /// 사용자 언어팩 폴더 (`<dir>/<lang>.toml`)
    pub language_pack_dir: Option<String>,
    /// 실/제품/기타 파라미터를 저장하는 TOML 파일
    pub parameters_path: String,
    pub report: ReportSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            parameters_path: "heat_load.toml".into(),
            report: ReportSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 읽는다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

impl Config {
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn parameters_path(&self) -> PathBuf {
        PathBuf::from(&self.parameters_path)
    }

    pub fn report_dir(&self) -> PathBuf {
        PathBuf::from(&self.report.output_dir)
    }
}
