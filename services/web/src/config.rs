/// Web service configuration loaded from environment variables.
#[derive(Debug)]
pub struct WebConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `WEB_PORT`.
    pub web_port: u16,
    /// Base URL of the external auth provider's REST API
    /// (e.g. "https://auth.example.com/auth/v1").
    pub auth_base_url: String,
    /// Public API key sent with every auth provider request.
    pub auth_api_key: String,
    /// Domain attribute for the session cookie (e.g. "example.com").
    pub cookie_domain: String,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            web_port: std::env::var("WEB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            auth_base_url: std::env::var("AUTH_BASE_URL").expect("AUTH_BASE_URL"),
            auth_api_key: std::env::var("AUTH_API_KEY").expect("AUTH_API_KEY"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
        }
    }
}
