use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::irrigation::{DesignInput, DEFAULT_CURVE_SAMPLES, DEFAULT_PROFILE_SAMPLES};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시에 우선 사용할 단위 체계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// m, kPa, L/s 우선
    Metric,
    /// ft, psi, gpm 우선
    UsCustomary,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드(auto/ko/en-us 등)
    pub language: String,
    /// TOML 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub curve_samples: usize,
    pub profile_samples: usize,
    /// 마지막으로 계산한 입력값
    pub last_input: DesignInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            language: "auto".into(),
            language_pack_dir: None,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            profile_samples: DEFAULT_PROFILE_SAMPLES,
            last_input: DesignInput::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(DEFAULT_CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(DEFAULT_CONFIG_PATH)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
