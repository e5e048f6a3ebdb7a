use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// When unset the storefront keeps everything in process memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub storage_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let storage_prefix = env::var("STORAGE_PREFIX")
            .ok()
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| "stirling".to_string());
        if storage_prefix.contains(':') {
            anyhow::bail!("STORAGE_PREFIX must not contain ':'");
        }
        Ok(Self {
            port,
            database_url,
            host,
            storage_prefix,
        })
    }
}
