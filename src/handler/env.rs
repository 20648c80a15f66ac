use std::env;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Environment variable {0} not found")]
    NotFound(String),
    #[error("Invalid environment variable: {0}")]
    Invalid(String),
}
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub base_url: String,
    pub api_key: String,
}
impl EnvConfig {
    pub fn load() -> Result<Self, EnvError> {
        dotenv::dotenv().ok();
        Ok(Self {
            base_url: get_env("base_url")?,
            api_key: get_env("api_key")?,
        })
    }
    pub fn from_values(base_url: String, api_key: String) -> Self {
        Self { base_url, api_key }
    }
    /// Endpoint paths concatenate directly onto `base_url`; the configured
    /// URL must carry the trailing `/`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
fn get_env(key: &str) -> Result<String, EnvError> {
    env::var(key).map_err(|_| EnvError::NotFound(key.to_string()))
}
