use std::net::IpAddr;
use std::time::Duration;

/// Automation webhook notified after every stored lead. Fixed at build
/// time; never read from the environment.
pub const WEBHOOK_URL: &str = "https://hook.eu2.make.com/cvw9ncjyyyyo1qlhepbnkuj61muq1kx5";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub webhook_url: String,
    pub max_body_size: usize,
    pub store_timeout: Duration,
    pub webhook_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| "Missing required environment variable: DATABASE_URL".to_string())?;

        let host: IpAddr = env_or("SEASIDE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SEASIDE_HOST: {e}"))?;

        let port: u16 = env_or("SEASIDE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SEASIDE_PORT: {e}"))?;

        let max_body_size: usize = env_or("SEASIDE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SEASIDE_MAX_BODY_SIZE: {e}"))?;

        let timeout_secs = |key: &str| -> Result<Duration, String> {
            match env_or(key, "10").parse::<u64>() {
                Ok(0) => Err(format!("Invalid {key}: must be at least 1 second")),
                Ok(secs) => Ok(Duration::from_secs(secs)),
                Err(e) => Err(format!("Invalid {key}: {e}")),
            }
        };

        let store_timeout = timeout_secs("SEASIDE_STORE_TIMEOUT_SECS")?;
        let webhook_timeout = timeout_secs("SEASIDE_WEBHOOK_TIMEOUT_SECS")?;

        let log_level = env_or("SEASIDE_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            webhook_url: WEBHOOK_URL.to_string(),
            max_body_size,
            store_timeout,
            webhook_timeout,
            log_level,
        })
    }
}
