use std::env;

pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-1.0-pro";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_id: String,
    pub location: String,
    pub model: String,
    pub access_token: String,
    pub api_endpoint: Option<String>,
    pub max_text_chars: Option<usize>,
    pub provider_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            project_id: get("GCLOUD_PROJECT")
                .or_else(|| get("GOOGLE_CLOUD_PROJECT"))
                .ok_or_else(|| "GCLOUD_PROJECT: environment variable not found".to_string())?,
            location: get("VERTEX_LOCATION").unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            model: get("VERTEX_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            access_token: get("VERTEX_ACCESS_TOKEN")
                .ok_or_else(|| "VERTEX_ACCESS_TOKEN: environment variable not found".to_string())?,
            api_endpoint: get("VERTEX_API_ENDPOINT"),
            max_text_chars: get("MAX_TEXT_CHARS")
                .map(|v| {
                    v.trim()
                        .parse::<usize>()
                        .map_err(|e| format!("MAX_TEXT_CHARS: {}", e))
                })
                .transpose()?,
            provider_timeout_secs: get("PROVIDER_TIMEOUT_SECS")
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .map_err(|e| format!("PROVIDER_TIMEOUT_SECS: {}", e))
                })
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GCLOUD_PROJECT", "demo-project"),
            ("VERTEX_ACCESS_TOKEN", "token"),
        ]))
        .unwrap();

        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.location, DEFAULT_LOCATION);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_endpoint.is_none());
        assert!(config.max_text_chars.is_none());
        assert!(config.provider_timeout_secs.is_none());
    }

    #[test]
    fn test_google_cloud_project_fallback() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GOOGLE_CLOUD_PROJECT", "fallback"),
            ("VERTEX_ACCESS_TOKEN", "token"),
        ]))
        .unwrap();
        assert_eq!(config.project_id, "fallback");
    }

    #[test]
    fn test_missing_project_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("VERTEX_ACCESS_TOKEN", "token")]))
            .unwrap_err();
        assert!(err.contains("GCLOUD_PROJECT"));
    }

    #[test]
    fn test_missing_token_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("GCLOUD_PROJECT", "p")])).unwrap_err();
        assert!(err.contains("VERTEX_ACCESS_TOKEN"));
    }

    #[test]
    fn test_optional_numbers_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GCLOUD_PROJECT", "p"),
            ("VERTEX_ACCESS_TOKEN", "t"),
            ("VERTEX_LOCATION", "europe-west1"),
            ("MAX_TEXT_CHARS", "20000"),
            ("PROVIDER_TIMEOUT_SECS", " 30 "),
        ]))
        .unwrap();
        assert_eq!(config.location, "europe-west1");
        assert_eq!(config.max_text_chars, Some(20_000));
        assert_eq!(config.provider_timeout_secs, Some(30));
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("GCLOUD_PROJECT", "p"),
            ("VERTEX_ACCESS_TOKEN", "t"),
            ("MAX_TEXT_CHARS", "lots"),
        ]))
        .unwrap_err();
        assert!(err.starts_with("MAX_TEXT_CHARS"));
    }
}
