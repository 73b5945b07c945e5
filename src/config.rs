use serde::Deserialize;

use crate::errors::AppError;

const DEFAULT_CHAT_PATH: &str = "/api/chat";
const DEFAULT_GENERATE_PATH: &str = "/api/blog/generate";

/// Where the two backend endpoints live.
///
/// An empty `api_base` yields same-origin relative URLs, which is what the
/// page expects when it is served by the backend itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub chat_path: String,
    pub generate_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            generate_path: DEFAULT_GENERATE_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Parses a JSON config blob; missing keys fall back to the defaults.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| AppError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn chat_url(&self) -> String {
        self.url(&self.chat_path)
    }

    pub fn generate_url(&self) -> String {
        self.url(&self.generate_path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }

    fn validate(&self) -> Result<(), AppError> {
        for (name, path) in [("chat_path", &self.chat_path), ("generate_path", &self.generate_path)] {
            if !path.starts_with('/') {
                return Err(AppError::InvalidConfig {
                    message: format!("{name} must start with '/' (got '{path}')"),
                });
            }
        }
        Ok(())
    }
}
