//! Server configuration from CLI flags and environment.

use std::net::SocketAddr;

use clap::Parser;

/// cardgen-server: HTTP API for synthetic test card generation.
#[derive(Parser, Debug, Clone)]
#[command(name = "cardgen-server", version, about)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "CARDGEN_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value = "5000", env = "CARDGEN_PORT")]
    pub port: u16,
}

impl ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:5000`.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {addr}: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::parse_from(["cardgen-server"]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn explicit_flags() {
        let config = ServerConfig::parse_from(["cardgen-server", "--host", "0.0.0.0", "-p", "8080"]);
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn bad_host_rejected() {
        let config = ServerConfig::parse_from(["cardgen-server", "--host", "not a host"]);
        assert!(config.bind_addr().is_err());
    }
}
