use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_COVER_PATH: &str = "/images/book_covers";
const DEFAULT_COVER_IMAGE: &str =
    "https://comicfever.ca/cdn/shop/products/202307-0000426174.jpg?v=1698170103";

/// Where the library backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// How cover images are resolved from a book's `cover_filename`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverConfig {
    #[serde(default = "default_cover_path")]
    pub base_path: String,
    #[serde(default = "default_cover_image")]
    pub default_image: String,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            base_path: default_cover_path(),
            default_image: default_cover_image(),
        }
    }
}

impl CoverConfig {
    /// URL of the cover for `filename`, or the default image when absent.
    pub fn cover_url(&self, filename: Option<&str>) -> String {
        match filename.map(str::trim).filter(|f| !f.is_empty()) {
            Some(name) => format!("{}/{}", self.base_path.trim_end_matches('/'), name),
            None => self.default_image.clone(),
        }
    }
}

/// Admin view settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminConfig {
    /// Show member passwords in plain text. Masked when `false`.
    #[serde(default)]
    pub reveal_credentials: bool,
}

/// Top-level structure of `config.toml`.
///
/// Every section and field has a default so an empty or partial file still
/// produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortalConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub covers: CoverConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl PortalConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Replace the backend origin, e.g. from a build-time environment override.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.backend.base_url = base_url.into();
        self
    }

    /// Backend origin without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.backend.base_url.trim_end_matches('/')
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cover_path() -> String {
    DEFAULT_COVER_PATH.to_string()
}

fn default_cover_image() -> String {
    DEFAULT_COVER_IMAGE.to_string()
}
