/// Descriptive and CORS settings of the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_name: String,
    pub api_version: String,
    pub api_description: String,
    pub contact_email: String,
    /// Allowed CORS origins; `*` allows any origin without credentials
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_name: "Observatorio Ambiental Backend".to_string(),
            api_version: env!("CARGO_PKG_VERSION").to_string(),
            api_description: "API para datos ambientales de Chile".to_string(),
            contact_email: "contacto@observatorio.cl".to_string(),
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    /// Parse a comma-separated origin list, e.g. from `OBS_ALLOWED_ORIGINS`.
    pub fn with_origins(mut self, origins: &str) -> Self {
        let parsed: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            self.allowed_origins = parsed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_any_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.allowed_origins, vec!["*"]);
        assert_eq!(config.api_version, "0.1.0");
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = ApiConfig::default()
            .with_origins("https://observatorio.cl, http://localhost:5173 ,");
        assert_eq!(
            config.allowed_origins,
            vec!["https://observatorio.cl", "http://localhost:5173"]
        );
    }

    #[test]
    fn empty_origin_list_keeps_default() {
        let config = ApiConfig::default().with_origins(" , ");
        assert_eq!(config.allowed_origins, vec!["*"]);
    }
}
