//! Connection settings for remote stores

use serde::{Deserialize, Serialize};

/// Where to find the Redis server holding the completion sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConnectionConfig {
    /// Server host name
    pub host: String,
    /// Server port
    pub port: u16,
    /// Logical database selected after connecting
    pub db: i64,
    /// Full connection URL; overrides host/port/db when set
    pub url: Option<String>,
}

impl RedisConnectionConfig {
    /// Connection URL understood by the Redis client
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

impl Default for RedisConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 0,
            url: None,
        }
    }
}
