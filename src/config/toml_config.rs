use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub session: SessionInfo,
    pub catalog: SourceConfig,
    pub preferences: SourceConfig,
    pub projection: Option<ProjectionConfig>,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub restaurant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub refresh_seconds: Option<u64>,
    pub watch: Option<bool>,
    pub preview_time: Option<String>,
    pub recommend: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl SessionConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EngineError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EngineError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_ENDPOINT})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    fn validate_source(field_prefix: &str, source: &SourceConfig) -> Result<()> {
        match source.r#type.as_str() {
            "file" => {
                let path =
                    source
                        .path
                        .as_deref()
                        .ok_or_else(|| EngineError::MissingConfigError {
                            field: format!("{}.path", field_prefix),
                        })?;
                validation::validate_path(&format!("{}.path", field_prefix), path)
            }
            "api" => {
                let endpoint =
                    source
                        .endpoint
                        .as_deref()
                        .ok_or_else(|| EngineError::MissingConfigError {
                            field: format!("{}.endpoint", field_prefix),
                        })?;
                validation::validate_url(&format!("{}.endpoint", field_prefix), endpoint)
            }
            other => Err(EngineError::InvalidConfigValueError {
                field: format!("{}.type", field_prefix),
                value: other.to_string(),
                reason: "Supported source types: file, api".to_string(),
            }),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("session.name", &self.session.name)?;
        validation::validate_non_empty_string("session.user_id", &self.session.user_id)?;

        if !self.recommend_mode() {
            match self.session.restaurant_id.as_deref() {
                Some(id) => validation::validate_non_empty_string("session.restaurant_id", id)?,
                None => {
                    return Err(EngineError::MissingConfigError {
                        field: "session.restaurant_id".to_string(),
                    })
                }
            }
        }

        Self::validate_source("catalog", &self.catalog)?;
        Self::validate_source("preferences", &self.preferences)?;

        validation::validate_positive_number(
            "projection.refresh_seconds",
            self.refresh_seconds(),
            1,
        )?;
        if let Some(preview) = self.preview_time() {
            validation::parse_preview_time("projection.preview_time", preview)?;
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_output_formats("output.formats", &self.output.formats)?;

        Ok(())
    }

    /// 取得重新投影的週期（預設 60 秒）
    pub fn refresh_seconds(&self) -> u64 {
        self.projection
            .as_ref()
            .and_then(|p| p.refresh_seconds)
            .unwrap_or(60)
    }

    /// 是否持續重新投影
    pub fn is_watch_mode(&self) -> bool {
        self.projection
            .as_ref()
            .and_then(|p| p.watch)
            .unwrap_or(false)
    }

    /// 是否為餐廳推薦模式
    pub fn recommend_mode(&self) -> bool {
        self.projection
            .as_ref()
            .and_then(|p| p.recommend)
            .unwrap_or(false)
    }

    pub fn preview_time(&self) -> Option<&str> {
        self.projection
            .as_ref()
            .and_then(|p| p.preview_time.as_deref())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
