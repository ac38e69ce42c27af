use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::currency::CurrencyFormat;
use crate::lighting::{LampConstants, UsageProfile};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 기본 사용 조건 (시나리오에 없을 때 사용)
    pub usage: UsageProfile,
    /// 램프 수명/단가/탄소 계수
    pub lamp: LampConstants,
    /// 통화 표시 형식
    pub currency: CurrencyFormat,
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

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 그 경로에 저장한다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        warn!(path = %path.display(), "설정 파일이 없어 기본값으로 생성합니다");
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 TOML로 저장한다.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
