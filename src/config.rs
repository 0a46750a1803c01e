use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        base_url: get_env_or_default("SEARCH_BASE_URL", "http://localhost:3001"),
        default_page: get_env_or_default("SEARCH_DEFAULT_PAGE", "1"),
        default_limit: get_env_or_default("SEARCH_DEFAULT_LIMIT", "20"),
    }
});

pub struct Config {
    /// Where the `/search` endpoint lives.
    pub base_url: String,
    pub default_page: String,
    pub default_limit: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
