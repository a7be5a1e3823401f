use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Address the cart HTTP server listens on
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    ///
    /// # Errors
    /// Returns error if either variable does not parse
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let raw_ip = ip.unwrap_or_else(|| DEFAULT_IP.to_string());
        let ip = raw_ip
            .trim()
            .parse::<IpAddr>()
            .with_context(|| format!("SERVICE_IP is not an IP address: {}", raw_ip))?;

        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SERVICE_PORT is not a valid port: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { ip, port })
    }

    /// Bind address as "ip:port", bracketing IPv6 hosts
    pub fn bind_address(&self) -> String {
        SocketAddr::new(self.ip, self.port).to_string()
    }
}
