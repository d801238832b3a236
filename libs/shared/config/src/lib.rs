use std::env;
use std::net::SocketAddr;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: [u8; 4],
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST")
            .ok()
            .and_then(|raw| parse_host(&raw))
            .unwrap_or_else(|| {
                warn!("APP_HOST not set or invalid, binding on 0.0.0.0");
                [0, 0, 0, 0]
            });

        let port = env::var("APP_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or_else(|| {
                warn!("APP_PORT not set or invalid, using default 3000");
                3000
            });

        Self { host, port }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_host(raw: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = raw.split('.');
    for octet in octets.iter_mut() {
        *octet = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}
