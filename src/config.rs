//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 직접 지정하는 환경 변수
pub const CONFIG_ENV: &str = "HANFOLD_CONFIG";

/// 입력이 `max_input_chars`를 넘을 때의 처리 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OversizePolicy {
    /// 앞에서부터 `max_input_chars` 길이까지만 사용
    #[default]
    Truncate,
    /// `VariantError::InputTooLarge` 반환
    Reject,
}

/// 변형 생성기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HanfoldConfig {
    /// 앞뒤 공백 제거 후 처리할 최대 길이 (음절은 자모로 분해한 길이로 셈)
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// 생성할 최대 변형 수
    #[serde(default = "default_max_variants")]
    pub max_variants: usize,
    /// 입력 길이 초과 시 처리 방식
    #[serde(default)]
    pub oversize_policy: OversizePolicy,
    /// 입력기 방식 음절 조합(받침 처리) 사용 여부
    #[serde(default = "default_syllable_composition")]
    pub syllable_composition: bool,
}

fn default_max_input_chars() -> usize {
    256
}

fn default_max_variants() -> usize {
    4096
}

fn default_syllable_composition() -> bool {
    true
}

impl Default for HanfoldConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            max_variants: default_max_variants(),
            oversize_policy: OversizePolicy::default(),
            syllable_composition: default_syllable_composition(),
        }
    }
}

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(e) => write!(f, "설정 파일 형식 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// 설정 파일 경로
///
/// 1. `$HANFOLD_CONFIG`
/// 2. `$XDG_CONFIG_HOME/hanfold/config.json`
/// 3. `$HOME/.config/hanfold/config.json`
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let absolute_dir = |name: &str| {
        std::env::var_os(name)
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("hanfold").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HanfoldConfig {
    let path = config_path();
    if !path.exists() {
        return HanfoldConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|e| {
        log::warn!("{} 로드 실패, 기본 설정 사용: {}", path.display(), e);
        HanfoldConfig::default()
    })
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<HanfoldConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &HanfoldConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성)
pub fn save_config_to(config: &HanfoldConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
