use std::path::PathBuf;

use thiserror::Error;

use crate::config::{self, Config};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::params::ParamError;
use crate::report::ReportError;
use crate::store::{ParameterStore, StoreError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// 표준 입력이 닫힘 (파이프 입력 종료 등)
    #[error("input closed")]
    InputClosed,
}

/// CLI/GUI가 공유하는 실행 상태: 설정, 번역기, 파라미터 저장소.
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    pub store: ParameterStore,
}

impl AppContext {
    /// 설정 파일을 읽고(없으면 생성) 언어와 파라미터 저장소를 준비한다.
    ///
    /// `params_override`가 있으면 설정의 파라미터 경로 대신 사용한다.
    pub fn load(
        config_path: PathBuf,
        cli_lang: Option<&str>,
        params_override: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let config = config::load_or_create(&config_path)?;
        let tr = translator_for(&config, cli_lang);
        let params_path = params_override.unwrap_or_else(|| config.parameters_path());
        let store = ParameterStore::open(params_path)?;
        Ok(Self {
            config,
            config_path,
            tr,
            store,
        })
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save_to(&self.config_path)?;
        Ok(())
    }

    /// 설정의 언어가 바뀐 뒤 번역기를 다시 만든다.
    pub fn reload_translator(&mut self) {
        self.tr = translator_for(&self.config, None);
    }
}

pub fn translator_for(config: &Config, cli_lang: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// 대화형 CLI 메인 루프를 실행한다.
pub fn run(ctx: &mut AppContext) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(&ctx.tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::EditSection(section) => ui_cli::handle_edit_section(ctx, section),
            MenuChoice::Results => {
                ui_cli::handle_results(ctx);
                Ok(())
            }
            MenuChoice::Export => ui_cli::handle_export(ctx),
            MenuChoice::ProductPreset => ui_cli::handle_product_preset(ctx),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(&ctx.tr),
            MenuChoice::Settings => ui_cli::handle_settings(ctx),
            MenuChoice::Exit => {
                println!("{}", ctx.tr.text("general.app_exit", "Exiting application."));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            // 화면 단위 오류는 보고만 하고 메뉴로 돌아간다.
            Err(e) => println!("{}: {e}", ctx.tr.text("general.error_prefix", "Error")),
        }
    }
    Ok(())
}
