use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 정책 모델 설정을 표현한다.
///
/// 설정 파일의 `baseline_emissions_mmt`는 유한한 값만 허용한다. `build_policy_table`에
/// 직접 넘기는 명시값은 검증 없이 그대로 쓰이므로 0이나 inf/NaN도 전파된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// 명시적 기준 배출량 [MMT]. 지정하면 "Baseline" 행 추론보다 우선한다.
    #[serde(default)]
    pub baseline_emissions_mmt: Option<f64>,
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// 값 검증 오류
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Invalid(msg) => write!(f, "설정 값 오류: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl ModelConfig {
    /// TOML 문자열에서 설정을 읽는다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: ModelConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(v) = self.baseline_emissions_mmt {
            if !v.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "baseline_emissions_mmt는 유한한 값이어야 합니다: {v}"
                )));
            }
        }
        Ok(())
    }
}

/// 설정 파일을 로드한다.
pub fn load(path: impl AsRef<Path>) -> Result<ModelConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    ModelConfig::from_toml_str(&content)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 사용한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ModelConfig, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load(path)
    } else {
        debug!(path = %path.display(), "config file not found, using defaults");
        Ok(ModelConfig::default())
    }
}
