// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
    #[error("failed to read {field}")]
    Input {
        field: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{header} value contains characters not allowed in an HTTP header")]
    InvalidHeader { header: &'static str },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to iDNS API failed")]
    Transport {
        #[source]
        source: reqwest::Error,
        body: Option<String>,
    },

    #[error("iDNS API returned HTTP {status}")]
    Api { status: u16, body: String },

    #[error("unexpected iDNS response")]
    Decode(#[from] serde_json::Error),

    #[error("iDNS API reported success but returned no zone")]
    EmptyResults,
}

impl HelperError {
    pub fn input(field: &'static str, source: std::io::Error) -> Self {
        HelperError::Input { field, source }
    }

    /// Verbatim response body for failures that have one.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            HelperError::Api { body, .. } => Some(body),
            HelperError::Transport { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_body_verbatim() {
        let err = HelperError::Api {
            status: 400,
            body: "{\"detail\": \"zone already exists\"}\n".into(),
        };
        assert_eq!(err.raw_body(), Some("{\"detail\": \"zone already exists\"}\n"));
        assert_eq!(err.to_string(), "iDNS API returned HTTP 400");
    }

    #[test]
    fn decode_and_empty_results_have_no_body() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(HelperError::from(decode).raw_body().is_none());
        assert!(HelperError::EmptyResults.raw_body().is_none());
    }

    #[test]
    fn input_error_names_the_field() {
        let err = HelperError::input(
            "DNS zone",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"),
        );
        assert_eq!(err.to_string(), "failed to read DNS zone");
    }

    #[test]
    fn error_chain_mentions_each_cause_once() {
        let input = anyhow::Error::from(HelperError::input(
            "domain name",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"),
        ));
        assert_eq!(format!("{input:#}"), "failed to read domain name: input closed");

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause = source.to_string();
        let decode = anyhow::Error::from(HelperError::from(source));
        let shown = format!("{decode:#}");
        assert_eq!(shown, format!("unexpected iDNS response: {cause}"));
        assert_eq!(shown.matches(&cause).count(), 1);
    }
}
