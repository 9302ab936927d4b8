use std::path::Path;
use thiserror::Error;

use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::irrigation::{self, CalcError, DesignInput, DesignResult};
use crate::report::{self, ReportError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 설계 계산 오류
    #[error("설계 계산 오류: {0}")]
    Calc(#[from] CalcError),
    /// 보고서 작성/저장 오류
    #[error("보고서 오류: {0}")]
    Report(#[from] ReportError),
}

/// 대화형 세션 상태. 마지막 계산 결과를 명시적으로 들고 다닌다.
#[derive(Debug, Clone)]
pub struct Session {
    pub input: DesignInput,
    pub last_result: Option<DesignResult>,
}

impl Session {
    pub fn new(input: DesignInput) -> Self {
        Self {
            input,
            last_result: None,
        }
    }

    /// 입력을 바꾸고 다시 계산한다. 실패하면 이전 결과를 버린다.
    pub fn recompute(&mut self, input: DesignInput) -> Result<&DesignResult, CalcError> {
        self.input = input;
        self.last_result = None;
        let result = irrigation::compute_design(&self.input)?;
        Ok(self.last_result.insert(result))
    }

    /// 마지막 결과로 보고서 본문을 만든다. 결과가 없으면 `None`.
    pub fn report_text(&self) -> Option<Result<String, ReportError>> {
        self.last_result
            .as_ref()
            .map(|r| report::build_report(&self.input, r))
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let mut session = Session::new(config.last_input);
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Design => {
                ui_cli::handle_design(tr, config, &mut session)?;
                config.last_input = session.input;
                config.save_to(config_path)?;
            }
            MenuChoice::PumpCurve => ui_cli::handle_pump_curve(tr, config, &session)?,
            MenuChoice::PressureProfile => ui_cli::handle_pressure_profile(tr, config, &session)?,
            MenuChoice::Report => ui_cli::handle_report(tr, &session)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
