use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which hosted LLM backend serves advice completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Gemini,
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProvider::OpenAi => write!(f, "openai"),
            LlmProvider::Gemini => write!(f, "gemini"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub llm_provider: LlmProvider,
    pub llm_api_key: String,
    pub llm_model: String,
    /// Override for the provider's default API root, mainly for tests and
    /// self-hosted gateways.
    pub llm_base_url: Option<String>,
    pub llm_timeout_secs: u64,
    pub overpass_base_url: String,
    pub overpass_timeout_secs: u64,
    pub search_radius_meters: u32,
    pub result_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("llm_provider", &self.llm_provider)
            .field("llm_api_key", &"[redacted]")
            .field("llm_model", &self.llm_model)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("overpass_base_url", &self.overpass_base_url)
            .field("overpass_timeout_secs", &self.overpass_timeout_secs)
            .field("search_radius_meters", &self.search_radius_meters)
            .field("result_limit", &self.result_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            env: Environment::Test,
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            log_level: "info".to_string(),
            llm_provider: LlmProvider::OpenAi,
            llm_api_key: "sk-super-secret".to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            llm_base_url: None,
            llm_timeout_secs: 60,
            overpass_base_url: "https://overpass-api.de/api/interpreter".to_string(),
            overpass_timeout_secs: 10,
            search_radius_meters: 3000,
            result_limit: 5,
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
