//! Remote image hosts
//!
//! Entity images are only rendered from known hosts; anything else shows
//! the placeholder.

use url::Url;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

pub const DEFAULT_IMAGE_HOSTS: [&str; 3] = [
    "res.cloudinary.com",
    "static.wikia.nocookie.net",
    "example.com",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePolicy {
    allowed_hosts: Vec<String>,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOSTS.iter().map(|h| h.to_string()).collect())
    }
}

impl ImagePolicy {
    pub fn new(allowed_hosts: Vec<String>) -> Self {
        Self {
            allowed_hosts: allowed_hosts
                .into_iter()
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    /// Whether `url` is an http(s) URL on an allowed host
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url.trim()) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        parsed
            .host_str()
            .map(|host| self.allowed_hosts.iter().any(|h| h == host))
            .unwrap_or(false)
    }

    /// URL to render for an entity image
    pub fn display_url<'a>(&self, url: Option<&'a str>) -> &'a str {
        match url {
            Some(u) if self.is_allowed(u) => u,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}
