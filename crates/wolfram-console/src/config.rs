/// Console configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Wolfram application ID sent with every query.
    pub app_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `WOLFRAM_APP_ID`: application ID issued by Wolfram
    pub fn from_env() -> anyhow::Result<Self> {
        let app_id = std::env::var("WOLFRAM_APP_ID")
            .map_err(|_| anyhow::anyhow!("WOLFRAM_APP_ID environment variable is required"))?;
        if app_id.trim().is_empty() {
            anyhow::bail!("WOLFRAM_APP_ID must not be empty");
        }
        Ok(Self { app_id })
    }
}
