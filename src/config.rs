pub const DEFAULT_BASE_URL: &str = "https://api.azionapi.net/";
pub const DEFAULT_API_VERSION: u32 = 3;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String, // e.g. "https://api.azionapi.net/"
    pub api_version: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION,
        }
    }
}

impl ClientConfig {
    /// Zone collection endpoint (e.g. https://api.azionapi.net/intelligent_dns).
    pub fn zones_url(&self) -> String {
        format!("{}/intelligent_dns", self.base_url.trim_end_matches('/'))
    }

    /// Accept header value pinning the API version.
    pub fn accept_header(&self) -> String {
        format!("application/json;version={}", self.api_version)
    }
}
