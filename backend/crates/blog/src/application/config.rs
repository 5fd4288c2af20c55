//! Application Configuration
//!
//! Configuration for the blog application layer. The token signing
//! secret itself lives in `platform::token::TokenService`, constructed
//! once at startup from this TTL.

use std::time::Duration;

/// Blog application configuration
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Bearer token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Page size when the client does not ask for one
    pub default_page_size: i64,
    /// Upper bound on requested page sizes
    pub max_page_size: i64,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::from_secs(3600),
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl BlogConfig {
    /// Token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
