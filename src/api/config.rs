use std::env;

pub const AUTH_HEADER: &str = "x-authentication";

#[derive(Clone)]
pub struct ApiConfig {
    pub secret_key: String,
}

impl ApiConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self { secret_key: secret_key.into() }
    }

    pub fn from_env() -> Self {
        let secret_key = env::var("AUTH_KEY").unwrap_or_else(|_| {
            tracing::warn!("AUTH_KEY not set in environment, using default");
            "savy".to_string()
        });

        Self { secret_key }
    }
}
