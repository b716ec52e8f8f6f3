use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::HelperError;
use crate::idns::ZoneApi;
use crate::idns::types::*;

const LOG_BODY_LIMIT: usize = 256;

#[derive(Clone)]
pub struct IdnsClient {
    http: Client,
    zones_url: String, // e.g. "https://api.azionapi.net/intelligent_dns"
}

impl IdnsClient {
    pub fn new(config: &ClientConfig, token: &str) -> Result<Self, HelperError> {
        let http = Client::builder()
            .default_headers(default_headers(config, token)?)
            .build()
            .map_err(HelperError::Client)?;

        Ok(Self {
            http,
            zones_url: config.zones_url(),
        })
    }
}

#[async_trait]
impl ZoneApi for IdnsClient {
    async fn create_zone(&self, zone: &ZoneCreate) -> Result<ZoneResult, HelperError> {
        debug!(url = %self.zones_url, name = %zone.name, domain = %zone.domain, "POST zone");

        let res = self
            .http
            .post(&self.zones_url)
            .json(zone)
            .send()
            .await
            .map_err(|source| HelperError::Transport { source, body: None })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| HelperError::Transport { source, body: None })?;
        debug!(%status, body = %truncate_for_log(&body), "iDNS response");

        if !status.is_success() {
            warn!("iDNS create_zone failed with {status}");
            return Err(HelperError::Api {
                status: status.as_u16(),
                body,
            });
        }

        ZoneEnvelope::from_body(&body)?.into_first()
    }
}

/// Headers attached to every request made by the client.
pub fn default_headers(config: &ClientConfig, token: &str) -> Result<HeaderMap, HelperError> {
    let mut auth = HeaderValue::from_str(&format!("token {token}"))
        .map_err(|_| HelperError::InvalidHeader { header: "Authorization" })?;
    auth.set_sensitive(true);

    let accept = HeaderValue::from_str(&config.accept_header())
        .map_err(|_| HelperError::InvalidHeader { header: "Accept" })?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, accept);
    Ok(headers)
}

fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_LIMIT) {
        Some((cut, _)) => format!("{}... ({} bytes)", &body[..cut], body.len()),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_token_and_pinned_version() {
        let headers = default_headers(&ClientConfig::default(), "abc123").unwrap();
        assert_eq!(headers[AUTHORIZATION], "token abc123");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[ACCEPT], "application/json;version=3");
    }

    #[test]
    fn empty_token_still_builds_headers() {
        let headers = default_headers(&ClientConfig::default(), "").unwrap();
        assert_eq!(headers[AUTHORIZATION], "token ");
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let err = default_headers(&ClientConfig::default(), "bad\ntoken").unwrap_err();
        assert!(matches!(
            err,
            HelperError::InvalidHeader { header: "Authorization" }
        ));
    }

    #[test]
    fn long_bodies_are_truncated_for_logs() {
        let body = "é".repeat(LOG_BODY_LIMIT + 10);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"é".repeat(LOG_BODY_LIMIT)));
        assert!(logged.ends_with(&format!("... ({} bytes)", body.len())));
        assert_eq!(truncate_for_log("short"), "short");
    }
}
