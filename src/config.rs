use anyhow::Context;

/// Default mount point for the items resource.
const DEFAULT_BASE_PATH: &str = "/api/menu/items";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .context("PORT must be set")?
                .parse()
                .context("PORT must be a valid number")?,
            base_path: std::env::var("ITEMS_BASE_PATH")
                .unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
        })
    }
}
