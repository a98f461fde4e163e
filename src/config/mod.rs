//! Configuration module.
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required environment variables are not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "warden".to_string()),
        }
    }

    /// Build a config directly, bypassing the environment.
    pub fn new(mongodb_uri: impl Into<String>, mongodb_database: impl Into<String>) -> Self {
        Self {
            mongodb_uri: mongodb_uri.into(),
            mongodb_database: mongodb_database.into(),
        }
    }
}
