#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration, loaded from the environment by [`crate::config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the gate backend that proxies the source site
    /// (listing, detail, and image-search endpoints live under it).
    pub gate_base_url: String,
    /// Base URL of the source site itself; product page URLs are built by
    /// appending the detail endpoint's relative `link` to it.
    pub site_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Default for the image-search enrichment toggle; the CLI flag wins.
    pub image_search_enabled: bool,
}
