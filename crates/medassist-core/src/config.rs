use crate::app_config::{AppConfig, Environment, LlmProvider};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let llm_api_key = require("MEDASSIST_LLM_API_KEY")?;
    let llm_provider = parse_provider(&or_default("MEDASSIST_LLM_PROVIDER", "openai"))?;

    let env = parse_environment(&or_default("MEDASSIST_ENV", "development"));
    let bind_addr = parse_addr("MEDASSIST_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MEDASSIST_LOG_LEVEL", "info");

    let llm_model = or_default("MEDASSIST_LLM_MODEL", default_model(llm_provider));
    let llm_base_url = lookup("MEDASSIST_LLM_BASE_URL").ok();
    let llm_timeout_secs = parse_u64("MEDASSIST_LLM_TIMEOUT_SECS", "60")?;

    let overpass_base_url = or_default(
        "MEDASSIST_OVERPASS_BASE_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let overpass_timeout_secs = parse_u64("MEDASSIST_OVERPASS_TIMEOUT_SECS", "10")?;

    let search_radius_meters = parse_u32("MEDASSIST_SEARCH_RADIUS_METERS", "3000")?;
    let result_limit = parse_usize("MEDASSIST_RESULT_LIMIT", "5")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        llm_provider,
        llm_api_key,
        llm_model,
        llm_base_url,
        llm_timeout_secs,
        overpass_base_url,
        overpass_timeout_secs,
        search_radius_meters,
        result_limit,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a string into an `LlmProvider` variant. Unlike the environment,
/// a typo here silently pointing at the wrong API would be confusing, so
/// unrecognized values are rejected.
fn parse_provider(s: &str) -> Result<LlmProvider, ConfigError> {
    match s {
        "openai" => Ok(LlmProvider::OpenAi),
        "gemini" => Ok(LlmProvider::Gemini),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEDASSIST_LLM_PROVIDER".to_string(),
            reason: format!("unknown provider '{other}' (expected 'openai' or 'gemini')"),
        }),
    }
}

fn default_model(provider: LlmProvider) -> &'static str {
    match provider {
        LlmProvider::OpenAi => "gpt-4o-mini",
        LlmProvider::Gemini => "gemini-1.5-flash",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("MEDASSIST_LLM_API_KEY", "test-key");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_llm_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MEDASSIST_LLM_API_KEY"),
            "expected MissingEnvVar(MEDASSIST_LLM_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_uses_defaults() {
        let map = full_env();
        let config = build_app_config(lookup_from_map(&map)).expect("config builds");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.llm_provider, LlmProvider::OpenAi);
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert!(config.llm_base_url.is_none());
        assert_eq!(config.llm_timeout_secs, 60);
        assert_eq!(
            config.overpass_base_url,
            "https://overpass-api.de/api/interpreter"
        );
        assert_eq!(config.overpass_timeout_secs, 10);
        assert_eq!(config.search_radius_meters, 3000);
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn build_app_config_rejects_unknown_provider() {
        let mut map = full_env();
        map.insert("MEDASSIST_LLM_PROVIDER", "claude");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MEDASSIST_LLM_PROVIDER"),
            "expected InvalidEnvVar(MEDASSIST_LLM_PROVIDER), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_gemini_provider_changes_default_model() {
        let mut map = full_env();
        map.insert("MEDASSIST_LLM_PROVIDER", "gemini");
        let config = build_app_config(lookup_from_map(&map)).expect("config builds");
        assert_eq!(config.llm_provider, LlmProvider::Gemini);
        assert_eq!(config.llm_model, "gemini-1.5-flash");
    }

    #[test]
    fn build_app_config_rejects_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("MEDASSIST_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MEDASSIST_BIND_ADDR"),
            "expected InvalidEnvVar(MEDASSIST_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_radius() {
        let mut map = full_env();
        map.insert("MEDASSIST_SEARCH_RADIUS_METERS", "three-thousand");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MEDASSIST_SEARCH_RADIUS_METERS"),
            "expected InvalidEnvVar(MEDASSIST_SEARCH_RADIUS_METERS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_result_limit() {
        let mut map = full_env();
        map.insert("MEDASSIST_RESULT_LIMIT", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MEDASSIST_RESULT_LIMIT"),
            "expected InvalidEnvVar(MEDASSIST_RESULT_LIMIT), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map = full_env();
        map.insert("MEDASSIST_ENV", "production");
        map.insert("MEDASSIST_LLM_MODEL", "gpt-4o");
        map.insert("MEDASSIST_LLM_BASE_URL", "http://localhost:8080/v1");
        map.insert("MEDASSIST_SEARCH_RADIUS_METERS", "5000");
        map.insert("MEDASSIST_RESULT_LIMIT", "3");
        let config = build_app_config(lookup_from_map(&map)).expect("config builds");
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.llm_model, "gpt-4o");
        assert_eq!(
            config.llm_base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
        assert_eq!(config.search_radius_meters, 5000);
        assert_eq!(config.result_limit, 3);
    }
}
