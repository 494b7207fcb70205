//! Server settings (loaded through OrthoConfig) and the resolved server
//! configuration.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use registration::outbound::persistence::{DbPool, PoolConfig};
use serde::Deserialize;
use tracing::info;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Values read from CLI flags, `REGISTRATION_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL for duplicate lookups. Absent means no user store.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn pool_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.pool_connection_timeout_secs
                .unwrap_or(DEFAULT_POOL_CONNECTION_TIMEOUT_SECS),
        )
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size())
                .with_connection_timeout(self.pool_connection_timeout())
        })
    }
}

/// Resolved configuration handed to [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Use the database for duplicate lookups.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Parse the bind address and, when a database URL is set, build the pool.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] for an unparsable bind address
    /// and [`io::Error::other`] when the pool cannot be built.
    pub async fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let bind_addr = parse_bind_addr(settings.bind_addr())?;
        let config = Self::new(bind_addr);

        let Some(pool_config) = settings.pool_config() else {
            return Ok(config);
        };
        info!(?pool_config, "connecting user store pool");
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| io::Error::other(format!("user store unavailable: {err}")))?;
        Ok(config.with_db_pool(pool))
    }
}

fn parse_bind_addr(raw: &str) -> io::Result<SocketAddr> {
    raw.parse().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid bind address {raw:?}: {err}"),
        )
    })
}
