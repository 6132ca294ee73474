//! 파라미터 저장소. 세 레코드를 TOML 파일 하나에 보관한다.
//!
//! 계산기는 저장소를 직접 보지 않고 `snapshot()`으로 복사한 값만 받는다.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::calc::HeatLoadResults;
use crate::params::{ParamError, ParameterSet, Section};
use crate::product_db;

/// 저장소 로드/저장 오류.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access parameter file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse parameter file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize parameters: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error("unknown product preset `{0}`")]
    UnknownPreset(String),
}

/// 파일 경로에 묶인 파라미터 저장소.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    path: PathBuf,
    params: ParameterSet,
}

impl ParameterStore {
    /// 파일이 있으면 읽고, 없으면 기본값으로 시작한다. 파일은 처음 저장할 때 만들어진다.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let params = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let params = parse_parameters(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "loaded parameters");
            params
        } else {
            tracing::info!(path = %path.display(), "parameter file not found, using defaults");
            ParameterSet::default()
        };
        Ok(Self { path, params })
    }

    /// 저장 없이 메모리에서만 쓰는 저장소.
    pub fn in_memory(params: ParameterSet) -> Self {
        Self {
            path: PathBuf::new(),
            params,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// 계산기에 넘길 불변 스냅샷.
    pub fn snapshot(&self) -> ParameterSet {
        self.params.clone()
    }

    pub fn results(&self) -> HeatLoadResults {
        self.params.calculate()
    }

    /// 필드 하나를 갱신하고 저장한다.
    ///
    /// 저장에 실패해도 메모리상의 변경은 유지되며 오류만 돌려준다.
    pub fn update_field(
        &mut self,
        section: Section,
        key: &str,
        text: &str,
    ) -> Result<f64, StoreError> {
        let value = self.params.set_field(section, key, text)?;
        tracing::debug!(%section, key, value, "parameter updated");
        self.save()?;
        Ok(value)
    }

    /// 제품명은 숫자 필드가 아니므로 따로 갱신한다.
    pub fn set_product_name(&mut self, name: &str) -> Result<(), StoreError> {
        self.params.product.product_name = name.trim().to_string();
        self.save()
    }

    pub fn reset(&mut self, section: Section) -> Result<(), StoreError> {
        self.params.reset(section);
        tracing::info!(%section, "section reset to defaults");
        self.save()
    }

    /// 카탈로그 품목의 물성값을 제품 레코드에 적용한다.
    pub fn apply_product_preset(&mut self, code: &str) -> Result<(), StoreError> {
        let preset = product_db::find_product(code)
            .ok_or_else(|| StoreError::UnknownPreset(code.to_string()))?;
        self.params.product.apply_preset(preset);
        tracing::info!(preset = preset.code, "product preset applied");
        self.save()
    }

    pub fn save(&self) -> Result<(), StoreError> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        save_parameters(&self.path, &self.params)?;
        tracing::debug!(path = %self.path.display(), "parameters saved");
        Ok(())
    }
}

/// TOML 문자열을 파라미터로 읽는다. 빠진 섹션/필드는 기본값으로 채워진다.
pub fn parse_parameters(content: &str) -> Result<ParameterSet, toml::de::Error> {
    toml::from_str(content)
}

/// 파라미터를 TOML 파일로 저장한다. 상위 디렉터리가 없으면 만든다.
pub fn save_parameters(path: &Path, params: &ParameterSet) -> Result<(), StoreError> {
    let content = toml::to_string_pretty(params)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
