use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub platform_endpoint: Option<String>,
    pub platform_project_id: Option<String>,
    pub platform_api_key: Option<String>,
    pub mail_from: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_send_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            platform_endpoint: env::var("PLATFORM_ENDPOINT").ok(),
            platform_project_id: env::var("PLATFORM_PROJECT_ID").ok(),
            platform_api_key: env::var("PLATFORM_API_KEY").ok(),
            mail_from: env::var("MAIL_FROM").ok(),
            mail_api_key: env::var("MAIL_API_KEY").ok(),
            mail_send_timeout_seconds: env::var("MAIL_SEND_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Names of dispatch-required values that are absent, in a fixed order.
    /// Dispatch must not start until this is empty.
    pub fn missing_dispatch_values(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_set(&self.platform_endpoint) {
            missing.push("PLATFORM_ENDPOINT");
        }
        if !is_set(&self.platform_project_id) {
            missing.push("PLATFORM_PROJECT_ID");
        }
        if !is_set(&self.platform_api_key) {
            missing.push("PLATFORM_API_KEY");
        }
        if !is_set(&self.mail_from) {
            missing.push("MAIL_FROM");
        }
        if !is_set(&self.mail_api_key) {
            missing.push("MAIL_API_KEY");
        }
        missing
    }

    pub fn is_dispatch_ready(&self) -> bool {
        self.missing_dispatch_values().is_empty()
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
}
