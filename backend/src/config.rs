use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::error::ConfigError;

const DEFAULT_SITE_DIR: &str = "frontend/dist";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub frontend_origin: HeaderValue,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    ///
    /// `PORT` wins when set; otherwise staging listens on 3100 and
    /// everything else on 3000.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => match lookup("ENVIRONMENT").as_deref() {
                Some("staging") => 3100,
                _ => 3000,
            },
        };

        let site_dir = lookup("SITE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));

        let frontend_url = lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_origin = frontend_url
            .trim_end_matches('/')
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidOrigin(frontend_url.clone()))?;

        Ok(Self {
            port,
            site_dir,
            frontend_origin,
        })
    }

    pub fn ensure_site_dir(&self) -> Result<(), ConfigError> {
        if self.site_dir.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::MissingSiteDir(self.site_dir.display().to_string()))
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.frontend_origin, "http://localhost:8080");
        assert_eq!(config.index_file(), PathBuf::from("frontend/dist/index.html"));
    }

    #[test]
    fn staging_uses_its_own_port() {
        let config = config_from(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins() {
        let config = config_from(&[("ENVIRONMENT", "staging"), ("PORT", "8081")]).unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn bad_port_is_rejected() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
        assert!(matches!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn origin_trailing_slash_is_dropped() {
        let config = config_from(&[("FRONTEND_URL", "https://flowix.ru/")]).unwrap();
        assert_eq!(config.frontend_origin, "https://flowix.ru");
    }

    #[test]
    fn bad_origin_is_rejected() {
        assert!(matches!(
            config_from(&[("FRONTEND_URL", "https://flowix.ru\n")]),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn missing_site_dir_is_reported() {
        let config = config_from(&[("SITE_DIR", "/definitely/not/here")]).unwrap();
        assert_eq!(
            config.ensure_site_dir(),
            Err(ConfigError::MissingSiteDir("/definitely/not/here".to_string()))
        );
    }
}
