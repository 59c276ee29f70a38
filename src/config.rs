use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::{Gazetteer, GeoBounds};
use crate::resolver::RegionResolver;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unknown gazetteer '{0}'. Use 'districts' or 'provinces'.")]
    UnknownGazetteer(String),

    #[error("Invalid bounds: latitude {min_lat}..{max_lat}, longitude {min_lon}..{max_lon}")]
    InvalidBounds {
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    },
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub resolver: ResolverConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ResolverConfig {
    pub gazetteer: String,
    /// Overrides the built-in coverage box
    pub bounds: Option<GeoBounds>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            gazetteer: "districts".to_string(),
            bounds: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Build the resolver described by the `[resolver]` table
    pub fn resolver(&self) -> Result<RegionResolver, ConfigError> {
        let gazetteer = Gazetteer::builtin(&self.resolver.gazetteer)
            .ok_or_else(|| ConfigError::UnknownGazetteer(self.resolver.gazetteer.clone()))?;
        let resolver = RegionResolver::new(gazetteer);

        match self.resolver.bounds {
            Some(b) if !b.is_valid() => Err(ConfigError::InvalidBounds {
                min_lat: b.min_lat,
                max_lat: b.max_lat,
                min_lon: b.min_lon,
                max_lon: b.max_lon,
            }),
            Some(b) => Ok(resolver.with_bounds(b)),
            None => Ok(resolver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::load_or_default(None::<&Path>).unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:3000");
        let resolver = config.resolver().unwrap();
        assert_eq!(resolver.gazetteer().name, "districts");
        assert_eq!(resolver.gazetteer().bounds, GeoBounds::KOREA);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
listen = "127.0.0.1:8080"

[resolver]
gazetteer = "provinces"
bounds = {{ min_lat = 33.0, max_lat = 38.7, min_lon = 124.5, max_lon = 131.0 }}
"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8080");

        let resolver = config.resolver().unwrap();
        assert_eq!(resolver.gazetteer().name, "provinces");
        assert_eq!(resolver.gazetteer().bounds.max_lat, 38.7);
        assert_eq!(resolver.resolve_label(33.5, 126.5), "제주특별자치도");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[resolver]\ngazetteer = \"districts\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:3000");
        assert!(config.resolver.bounds.is_none());
    }

    #[test]
    fn test_unknown_gazetteer() {
        let mut config = Config::default();
        config.resolver.gazetteer = "counties".into();
        assert_eq!(
            config.resolver().unwrap_err(),
            ConfigError::UnknownGazetteer("counties".into())
        );
    }

    #[test]
    fn test_inverted_bounds() {
        let mut config = Config::default();
        config.resolver.bounds = Some(GeoBounds {
            min_lat: 39.0,
            max_lat: 33.0,
            min_lon: 124.0,
            max_lon: 132.0,
        });
        assert!(matches!(
            config.resolver(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Config::load_from_file("/nonexistent/regiondex.toml").is_err());
    }
}
