use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory served for every path not handled by the API.
    pub public_dir: PathBuf,
    /// Answer lookup misses with 404 instead of 200.
    pub strict_not_found: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            public_dir: PathBuf::from("./public"),
            strict_not_found: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        tracing::debug!("Server Host: {}", config.host);
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Public Dir: {}", config.public_dir.display());
        if config.strict_not_found {
            tracing::info!("Strict not-found mode enabled: lookup misses return 404");
        }

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST")
                .map(|host| {
                    if host.trim().is_empty() {
                        anyhow::bail!("HOST cannot be empty");
                    }
                    Ok(host.trim().to_string())
                })
                .transpose()?
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .map(|port| {
                    port.trim()
                        .parse::<u16>()
                        .ok()
                        .filter(|p| *p != 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!("PORT must be a valid number between 1-65535")
                        })
                })
                .transpose()?
                .unwrap_or(defaults.port),
            public_dir: lookup("PUBLIC_DIR")
                .map(|dir| {
                    if dir.trim().is_empty() {
                        anyhow::bail!("PUBLIC_DIR cannot be empty");
                    }
                    Ok(PathBuf::from(dir.trim()))
                })
                .transpose()?
                .unwrap_or(defaults.public_dir),
            strict_not_found: lookup("STRICT_NOT_FOUND")
                .map(|flag| parse_bool("STRICT_NOT_FOUND", &flag))
                .transpose()?
                .unwrap_or(defaults.strict_not_found),
        })
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("{} must be true or false, got '{}'", key, other),
    }
}
