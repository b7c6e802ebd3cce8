//! 配置服务
//!
//! 配置以 JSON 保存在 `{config_dir}/hanz-reader-tui/config.json`。
//! 文件不存在时使用默认值；缺失的字段同样取默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hanz_reader_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hanz-reader-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 分析服务地址
    pub server_url: String,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 文本分析时附带的目标等级，如 `"HSK2"`
    pub target_level: Option<String>,
    pub theme: Theme,
    /// 界面语言代码（`en-US` / `zh-CN`）
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            target_level: None,
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
        }
    }
}

impl AppConfig {
    /// 客户端连接配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.server_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// 界面语言，无法识别的代码回退为英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置目录
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join(CONFIG_FILE_NAME))
    }

    /// 使用指定的配置文件
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 配置文件所在目录（日志也写在这里）
    pub fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))?;

        tracing::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}
