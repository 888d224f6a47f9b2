use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub cors_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("TODO_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("TODO_PORT")
            .unwrap_or_else(|| "3001".into())
            .parse()
            .context("TODO_PORT must be a port number")?;
        let db_path: PathBuf = lookup("TODO_DB_PATH")
            .unwrap_or_else(|| "todos.db".into())
            .into();
        let origin = lookup("TODO_CORS_ORIGIN").unwrap_or_else(|| "http://localhost:4200".into());
        let cors_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("TODO_CORS_ORIGIN is not a valid origin: {}", origin))?;

        Ok(Self {
            host,
            port,
            db_path,
            cors_origin,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.db_path, PathBuf::from("todos.db"));
        assert_eq!(cfg.cors_origin, "http://localhost:4200");
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("TODO_HOST", "127.0.0.1"),
            ("TODO_PORT", "8080"),
            ("TODO_DB_PATH", "/tmp/t.db"),
            ("TODO_CORS_ORIGIN", "https://todos.example"),
        ])
        .unwrap();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/t.db"));
        assert_eq!(cfg.cors_origin, "https://todos.example");
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("TODO_PORT", "http")]).is_err());
        assert!(config(&[("TODO_PORT", "70000")]).is_err());
    }
}
