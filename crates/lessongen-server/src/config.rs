use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "lessongen-server", about = "Learning-material generator for teachers")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "LESSONGEN_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "LESSONGEN_PORT", default_value = "8501")]
    pub port: u16,

    /// TOML secrets file holding `[openai] api_key`
    #[arg(long, env = "LESSONGEN_SECRETS", default_value = "secrets.toml")]
    pub secrets: PathBuf,

    /// Base URL of the chat-completion API
    #[arg(
        long,
        env = "LESSONGEN_API_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub api_base_url: String,

    /// Timeout for one completion call (seconds)
    #[arg(long, env = "LESSONGEN_REQUEST_TIMEOUT", default_value = "120")]
    pub request_timeout: u64,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["lessongen-server"]).unwrap();
        assert_eq!(config.port, 8501);
        assert_eq!(config.secrets, PathBuf::from("secrets.toml"));
        assert_eq!(config.api_base_url, "https://api.openai.com/v1");
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
        assert_eq!(config.addr().to_string(), "0.0.0.0:8501");
    }

    #[test]
    fn flags_override() {
        let config = ServerConfig::try_parse_from([
            "lessongen-server",
            "--bind",
            "127.0.0.1",
            "--port",
            "9000",
            "--secrets",
            "/etc/lessongen/secrets.toml",
            "--request-timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.secrets, PathBuf::from("/etc/lessongen/secrets.toml"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
