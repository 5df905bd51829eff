use clap::{Parser, ValueEnum};

/// GPT Proxy: authenticated text generation proxy.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Config {
    /// Listen address (e.g. ":8000" or "0.0.0.0:8000")
    #[arg(long, default_value = ":8000", env = "ADDR")]
    pub addr: String,

    /// Log format: "text" or "json"
    #[arg(long, default_value = "text", env = "LOG_FORMAT")]
    pub log_format: String,

    /// Shared secret expected in the x-api-key header
    #[arg(long, env = "PROXY_API_KEY")]
    pub proxy_api_key: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    /// OpenAI API base URL
    #[arg(
        long,
        default_value = "https://api.openai.com/v1",
        env = "OPENAI_BASE_URL"
    )]
    pub openai_base_url: String,

    /// Upstream completion timeout in seconds (0 to disable)
    #[arg(long, default_value_t = 60, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: u64,

    /// Welcome page format served on "/"
    #[arg(long, value_enum, default_value_t = WelcomeFormat::Json, env = "WELCOME_FORMAT")]
    pub welcome_format: WelcomeFormat,

    /// Public base URL used in the welcome page usage example
    #[arg(long, default_value = "http://localhost:8000", env = "PUBLIC_URL")]
    pub public_url: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeFormat {
    Json,
    Html,
}

/// Convert Go-style ":8000" to "0.0.0.0:8000".
pub fn normalize_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}
